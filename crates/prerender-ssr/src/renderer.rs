//! Element dispatch and component invocation.

use prerender_types::{Component, ComponentType, Element, ElementType};

use crate::cache::cache_prefix;
use crate::error::{RenderError, RenderResult};
use crate::native::write_native;
use crate::options::RenderOptions;

/// Renders an element tree to markup.
///
/// An absent root renders as the empty string.
///
/// # Examples
///
/// ```
/// use prerender_ssr::{RenderOptions, element_to_string};
/// use prerender_types::Element;
///
/// let page = Element::tag("p").child("<br />Paragraph");
/// let html = element_to_string(Some(&page), &RenderOptions::default()).unwrap();
/// assert_eq!(html, "<p>&lt;br /&gt;Paragraph</p>");
/// ```
pub fn element_to_string(element: Option<&Element>, options: &RenderOptions) -> RenderResult<String> {
	let mut out = String::new();
	write_element(&mut out, element, options)?;
	Ok(out)
}

/// Renders an element tree with default options: no cache, empty context.
pub fn render_to_string(element: &Element) -> RenderResult<String> {
	element_to_string(Some(element), &RenderOptions::default())
}

pub(crate) fn write_element(
	out: &mut String,
	element: Option<&Element>,
	options: &RenderOptions,
) -> RenderResult<()> {
	let Some(element) = element else {
		return Ok(());
	};

	match element.element_type() {
		ElementType::Tag(tag) => write_native(out, tag, element.props(), options),
		ElementType::Component(component) => write_component(out, component, element, options),
		ElementType::Function(function) => {
			tracing::trace!(component = function.name(), "rendering function component");
			// Function components see neither the context nor the cache.
			let rendered = function.call(element.props());
			write_element(out, rendered.as_ref(), &RenderOptions::default())
		}
	}
}

fn write_component(
	out: &mut String,
	component_type: &ComponentType,
	element: &Element,
	options: &RenderOptions,
) -> RenderResult<()> {
	let mut component = component_type.instantiate(element.props(), &options.context);

	let cache_key = match options.cache() {
		Some(cache) => match cached_key(component_type, &*component)? {
			Some(key) => {
				if cache.has(&key)
					&& let Some(html) = cache.get(&key)
				{
					tracing::debug!(component = component_type.name(), key = %key, "render cache hit");
					out.push_str(&html);
					return Ok(());
				}
				Some(key)
			}
			None => None,
		},
		None => None,
	};

	let context = match component.child_context() {
		Some(child) => options.context.extend(&child),
		None => options.context.clone(),
	};
	component.will_mount();

	tracing::trace!(component = component_type.name(), "rendering component");
	let rendered = component.render();
	let mut html = String::new();
	write_element(&mut html, rendered.as_ref(), &options.scoped(context))?;

	if let (Some(cache), Some(key)) = (options.cache(), cache_key) {
		tracing::debug!(component = component_type.name(), key = %key, "render cache store");
		cache.set(&key, html.clone());
	}
	out.push_str(&html);
	Ok(())
}

/// Full cache key of a component instance: its definition's prefix joined
/// with the instance key, or `None` when the instance is not cacheable.
fn cached_key(
	component_type: &ComponentType,
	component: &dyn Component,
) -> RenderResult<Option<String>> {
	let key = component
		.cache_key()
		.map_err(|source| RenderError::CacheKey {
			component: component_type.name().to_string(),
			source,
		})?;
	Ok(key.map(|key| format!("{}{}", cache_prefix(component_type), key)))
}

/// Renders element trees with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
	options: RenderOptions,
}

impl Renderer {
	/// Creates a new renderer with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer with custom options.
	pub fn with_options(options: RenderOptions) -> Self {
		Self { options }
	}

	/// Returns the options.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Renders an element to markup.
	pub fn render(&self, element: &Element) -> RenderResult<String> {
		element_to_string(Some(element), &self.options)
	}
}
