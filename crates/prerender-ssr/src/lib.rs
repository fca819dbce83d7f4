//! # Prerender SSR
//!
//! Renders an element tree to an HTML string.
//!
//! ## Overview
//!
//! - Native tags render their attributes and children, with `<textarea>` and
//!   `<select>` projecting their value props into content.
//! - Stateful components are instantiated with the inherited context, may
//!   extend it for their subtree, and may be memoized through a
//!   [`RenderCache`].
//! - Function components receive only their props.
//!
//! Rendering is synchronous and has no side effects other than the cache.
//!
//! ## Example
//!
//! ```
//! use prerender_ssr::render_to_string;
//! use prerender_types::Element;
//!
//! let input = Element::tag("input")
//!     .prop("type", "password")
//!     .prop("value", "pass")
//!     .prop("maxLength", 1)
//!     .prop("readOnly", false);
//!
//! assert_eq!(
//!     render_to_string(&input).unwrap(),
//!     r#"<input type="password" value="pass" maxLength="1" />"#
//! );
//! ```

pub mod attrs;
pub mod cache;
pub mod error;
pub mod escape;
pub mod form;
pub mod native;
pub mod options;
pub mod renderer;
pub mod style;

pub use cache::{RenderCache, cache_prefix};
pub use error::{RenderError, RenderResult};
pub use options::RenderOptions;
pub use renderer::{Renderer, element_to_string, render_to_string};
