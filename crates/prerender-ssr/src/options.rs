//! Per-render options.

use std::sync::Arc;

use prerender_types::Context;

use crate::cache::RenderCache;

/// Options for one render call.
///
/// The cache is shared with the caller; the context flows down the tree and
/// is extended by components that contribute child context.
#[derive(Clone, Default)]
pub struct RenderOptions {
	/// Cache for component markup. Without one, no component is memoized.
	pub cache: Option<Arc<dyn RenderCache>>,
	/// Context visible to components at the root.
	pub context: Context,
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the cache.
	pub fn with_cache(mut self, cache: Arc<dyn RenderCache>) -> Self {
		self.cache = Some(cache);
		self
	}

	/// Sets the root context.
	pub fn with_context(mut self, context: impl Into<Context>) -> Self {
		self.context = context.into();
		self
	}

	/// Returns the cache, if any.
	pub fn cache(&self) -> Option<&dyn RenderCache> {
		self.cache.as_deref()
	}

	/// Same cache, different context.
	pub(crate) fn scoped(&self, context: Context) -> Self {
		Self {
			cache: self.cache.clone(),
			context,
		}
	}
}

impl std::fmt::Debug for RenderOptions {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RenderOptions")
			.field("cache", &self.cache.as_ref().map(|_| "<cache>"))
			.field("context", &self.context)
			.finish()
	}
}
