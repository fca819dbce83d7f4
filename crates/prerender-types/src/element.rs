//! Elements: the nodes of the virtual tree.

use std::borrow::Cow;

use crate::component::{Component, ComponentType, FunctionComponent};
use crate::props::Props;
use crate::value::PropValue;

/// What an element renders as.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
	/// Native tag, rendered directly to markup.
	Tag(Cow<'static, str>),
	/// Stateful component.
	Component(ComponentType),
	/// Stateless function component.
	Function(FunctionComponent),
}

/// Immutable `{type, props}` node.
///
/// Builder methods consume and return the element; once handed to the
/// renderer an element is only read. Patching produces a copy, see
/// [`Element::with_prop`].
///
/// # Example
///
/// ```
/// use prerender_types::{Element, ElementType};
///
/// let link = Element::tag("a")
///     .prop("href", "/docs")
///     .prop("className", "link")
///     .child("Docs");
///
/// assert_eq!(link.tag_name(), Some("a"));
/// assert!(matches!(link.element_type(), ElementType::Tag(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
	element_type: ElementType,
	props: Props,
}

impl Element {
	/// Creates an element from its parts.
	pub fn new(element_type: ElementType, props: Props) -> Self {
		Self {
			element_type,
			props,
		}
	}

	/// Creates a native tag element.
	pub fn tag(name: impl Into<Cow<'static, str>>) -> Self {
		Self::new(ElementType::Tag(name.into()), Props::new())
	}

	/// Creates an element for component `C`.
	pub fn component<C: Component>() -> Self {
		Self::new(ElementType::Component(ComponentType::of::<C>()), Props::new())
	}

	/// Creates an element for a function component.
	pub fn function<F>(f: F) -> Self
	where
		F: Fn(&Props) -> Option<Element> + Send + Sync + 'static,
	{
		Self::new(
			ElementType::Function(FunctionComponent::new(f)),
			Props::new(),
		)
	}

	/// Sets a prop.
	pub fn prop(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) -> Self {
		self.props.set(key, value);
		self
	}

	/// Replaces all props.
	pub fn with_props(mut self, props: Props) -> Self {
		self.props = props;
		self
	}

	/// Appends a child.
	///
	/// The `children` prop becomes a sequence on the first call.
	pub fn child(mut self, child: impl Into<PropValue>) -> Self {
		self.props.push_child(child.into());
		self
	}

	/// Appends several children.
	pub fn children<I>(mut self, children: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<PropValue>,
	{
		for child in children {
			self.props.push_child(child.into());
		}
		self
	}

	/// Returns a copy of this element with one prop added or replaced.
	pub fn with_prop(
		&self,
		key: impl Into<Cow<'static, str>>,
		value: impl Into<PropValue>,
	) -> Self {
		Self {
			element_type: self.element_type.clone(),
			props: self.props.with(key, value),
		}
	}

	/// Returns the element type.
	pub fn element_type(&self) -> &ElementType {
		&self.element_type
	}

	/// Returns the props.
	pub fn props(&self) -> &Props {
		&self.props
	}

	/// Returns the tag name for native elements.
	pub fn tag_name(&self) -> Option<&str> {
		match &self.element_type {
			ElementType::Tag(tag) => Some(&**tag),
			_ => None,
		}
	}
}
