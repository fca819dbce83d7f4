//! Render error types.

use prerender_types::BoxError;
use thiserror::Error;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Fatal render errors.
///
/// Unsupported attribute values and child types are not errors: they are
/// dropped from the output. Only failures the renderer cannot degrade from
/// surface here, and none of them is retried.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
	/// A component's cache-key computation failed.
	#[error("cache key computation failed for component '{component}': {source}")]
	CacheKey {
		/// Name of the component.
		component: String,
		/// Error returned by the component.
		#[source]
		source: BoxError,
	},

	/// Props on a native element cannot be interpreted.
	#[error("malformed props on <{tag}>: {reason}")]
	MalformedProps {
		/// Tag of the element.
		tag: String,
		/// What is wrong with the props.
		reason: String,
	},
}
