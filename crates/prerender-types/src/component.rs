//! Component definitions.

use std::any::TypeId;
use std::sync::Arc;

use crate::context::Context;
use crate::element::Element;
use crate::props::Props;

/// Boxed error returned by user-supplied component hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Trait for stateful components.
///
/// A component definition is a Rust type. The renderer instantiates it once
/// per element with the element's props and the inherited context, runs
/// [`will_mount`](Component::will_mount) and renders whatever
/// [`render`](Component::render) returns.
///
/// # Example
///
/// ```
/// use prerender_types::{Component, Context, Element, Props};
///
/// struct Greeting {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     fn create(props: &Props, _context: &Context) -> Self {
///         let name = props
///             .get("name")
///             .and_then(|v| v.as_str())
///             .unwrap_or("stranger")
///             .to_string();
///         Self { name }
///     }
///
///     fn render(&self) -> Option<Element> {
///         Some(Element::tag("p").child(format!("Hello, {}!", self.name)))
///     }
/// }
///
/// let element = Element::component::<Greeting>().prop("name", "Aeron");
/// assert!(element.tag_name().is_none());
/// ```
pub trait Component: 'static {
	/// Creates an instance from props and the inherited context.
	fn create(props: &Props, context: &Context) -> Self
	where
		Self: Sized;

	/// Produces the element this component renders to.
	fn render(&self) -> Option<Element>;

	/// Stable name used as the cache-key prefix.
	///
	/// When `None`, a process-unique identifier is generated on first use.
	fn display_name() -> Option<&'static str>
	where
		Self: Sized,
	{
		None
	}

	/// Memoization key for this instance.
	///
	/// `Ok(None)` opts out of caching. Errors abort the render.
	fn cache_key(&self) -> Result<Option<String>, BoxError> {
		Ok(None)
	}

	/// Context entries to merge into what descendants inherit.
	fn child_context(&self) -> Option<Context> {
		None
	}

	/// Pre-render hook, invoked once right before [`render`](Component::render).
	fn will_mount(&mut self) {}
}

type Constructor = fn(&Props, &Context) -> Box<dyn Component>;

fn construct<C: Component>(props: &Props, context: &Context) -> Box<dyn Component> {
	Box::new(C::create(props, context))
}

/// Type-erased handle to a component definition.
#[derive(Clone, Copy)]
pub struct ComponentType {
	type_id: TypeId,
	type_name: &'static str,
	display_name: Option<&'static str>,
	construct: Constructor,
}

impl ComponentType {
	/// Returns the handle for `C`.
	pub fn of<C: Component>() -> Self {
		Self {
			type_id: TypeId::of::<C>(),
			type_name: std::any::type_name::<C>(),
			display_name: C::display_name(),
			construct: construct::<C>,
		}
	}

	/// Identity of the definition.
	pub fn type_id(&self) -> TypeId {
		self.type_id
	}

	/// Rust type name of the definition.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Explicit display name, if the definition provides one.
	pub fn display_name(&self) -> Option<&'static str> {
		self.display_name
	}

	/// Display name, falling back to the Rust type name.
	pub fn name(&self) -> &'static str {
		self.display_name.unwrap_or(self.type_name)
	}

	/// Creates a fresh instance.
	pub fn instantiate(&self, props: &Props, context: &Context) -> Box<dyn Component> {
		(self.construct)(props, context)
	}
}

impl PartialEq for ComponentType {
	fn eq(&self, other: &Self) -> bool {
		self.type_id == other.type_id
	}
}

impl Eq for ComponentType {}

impl std::fmt::Debug for ComponentType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ComponentType")
			.field("name", &self.name())
			.finish()
	}
}

type RenderFn = dyn Fn(&Props) -> Option<Element> + Send + Sync;

/// A stateless component: a plain function from props to an element.
#[derive(Clone)]
pub struct FunctionComponent {
	func: Arc<RenderFn>,
	name: &'static str,
}

impl FunctionComponent {
	/// Wraps a function.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(&Props) -> Option<Element> + Send + Sync + 'static,
	{
		Self {
			func: Arc::new(f),
			name: std::any::type_name::<F>(),
		}
	}

	/// Rust type name of the wrapped function.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Invokes the function.
	pub fn call(&self, props: &Props) -> Option<Element> {
		(self.func)(props)
	}
}

impl PartialEq for FunctionComponent {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.func, &other.func)
	}
}

impl std::fmt::Debug for FunctionComponent {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FunctionComponent")
			.field("name", &self.name)
			.finish()
	}
}
