//! # Prerender
//!
//! Server-side rendering of virtual element trees to HTML strings.
//!
//! An element is either a native tag, a stateful component, or a plain
//! function of its props. Rendering walks the tree depth-first and produces
//! markup in one synchronous pass; components may pass context down to their
//! subtree and may be memoized in a shared cache under a key they choose.
//!
//! ## Feature Flags
//!
//! - `cache` (default) - [`InMemoryCache`], an LRU render cache with an
//!   optional time-to-live
//!
//! ## Crates
//!
//! - [`types`] - elements, props, context and the component traits
//! - [`ssr`] - the renderer, attribute and style serialization, escaping
//! - [`cache`] - the in-memory render cache
//!
//! ## Quick Example
//!
//! ```rust
//! use prerender::prelude::*;
//!
//! struct Greeting {
//!     name: String,
//! }
//!
//! impl Component for Greeting {
//!     fn create(_props: &Props, context: &Context) -> Self {
//!         let name = context.get_str("user").unwrap_or("guest").to_string();
//!         Greeting { name }
//!     }
//!
//!     fn render(&self) -> Option<Element> {
//!         Some(
//!             Element::tag("p")
//!                 .prop("className", "greeting")
//!                 .child(format!("Hello, {}", self.name)),
//!         )
//!     }
//! }
//!
//! let options = RenderOptions::new().with_context(Context::new().with("user", "Aeron"));
//! let html = element_to_string(Some(&Element::component::<Greeting>()), &options).unwrap();
//! assert_eq!(html, r#"<p class="greeting">Hello, Aeron</p>"#);
//! ```

pub use prerender_ssr as ssr;
pub use prerender_types as types;

#[cfg(feature = "cache")]
pub use prerender_cache as cache;

pub use prerender_ssr::{
	RenderCache, RenderError, RenderOptions, RenderResult, Renderer, element_to_string,
	render_to_string,
};
pub use prerender_types::{
	BoxError, Component, ComponentType, Context, Element, ElementType, FunctionComponent,
	PropValue, Props,
};

#[cfg(feature = "cache")]
pub use prerender_cache::{CacheStatistics, InMemoryCache};

/// Re-exports for building and rendering element trees.
pub mod prelude {
	pub use crate::{
		BoxError, Component, Context, Element, PropValue, Props, RenderCache, RenderError,
		RenderOptions, RenderResult, Renderer, element_to_string, render_to_string,
	};

	#[cfg(feature = "cache")]
	pub use crate::InMemoryCache;
}
