//! # Prerender Types
//!
//! The element model consumed by the prerender renderer.
//!
//! ## Overview
//!
//! - [`Element`]: an immutable `{type, props}` node. Its [`ElementType`] is a
//!   closed variant: a native tag, a stateful [`Component`], or a stateless
//!   [`FunctionComponent`].
//! - [`Props`]: ordered mapping from prop names to [`PropValue`]s.
//! - [`Context`]: the immutable mapping inherited from ancestor components.
//!
//! ## Example
//!
//! ```
//! use prerender_types::{Element, PropValue};
//!
//! let form = Element::tag("div")
//!     .prop("className", "password")
//!     .child(Element::tag("label").prop("htmlFor", "pass").child("Password"))
//!     .child(Element::tag("input").prop("type", "password").prop("id", "pass"));
//!
//! assert_eq!(
//!     form.props().get("className"),
//!     Some(&PropValue::from("password"))
//! );
//! ```

pub mod component;
pub mod context;
pub mod element;
pub mod props;
pub mod value;

pub use component::{BoxError, Component, ComponentType, FunctionComponent};
pub use context::Context;
pub use element::{Element, ElementType};
pub use props::{CHILDREN, Props};
pub use value::{Callback, PropValue, format_number};
