//! Native tag rendering and child serialization.

use prerender_types::{PropValue, Props};

use crate::attrs::write_attrs;
use crate::error::RenderResult;
use crate::escape::escape_html;
use crate::form;
use crate::options::RenderOptions;
use crate::renderer::write_element;

/// Tags rendered as `<tag />` without a closing tag.
pub const SELF_CLOSING_TAGS: &[&str] = &[
	"area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
	"meta", "param", "source", "track", "wbr",
];

const DANGEROUSLY_SET_INNER_HTML: &str = "dangerouslySetInnerHTML";
const INNER_HTML: &str = "__html";

/// Returns whether `tag` is rendered without a closing tag.
pub fn is_self_closing(tag: &str) -> bool {
	SELF_CLOSING_TAGS.contains(&tag)
}

/// Renders a native element.
///
/// Self-closing tags render as `<tag ATTRS />CONTENT`: content given to
/// them lands after the tag instead of being dropped.
pub(crate) fn write_native(
	out: &mut String,
	tag: &str,
	props: &Props,
	options: &RenderOptions,
) -> RenderResult<()> {
	let mut content = String::new();
	if tag == "textarea" {
		form::write_textarea(&mut content, props, options)?;
	} else if let Some(inner) = props
		.get(DANGEROUSLY_SET_INNER_HTML)
		.filter(|inner| inner.is_truthy())
	{
		write_inner_html(&mut content, inner);
	} else if tag == "select" {
		form::write_select(&mut content, props, options)?;
	} else if let Some(children) = props.children() {
		write_children(&mut content, children.as_sequence(), options)?;
	}

	out.push('<');
	out.push_str(tag);
	write_attrs(out, tag, props);
	if is_self_closing(tag) {
		out.push_str(" />");
		out.push_str(&content);
	} else {
		out.push('>');
		out.push_str(&content);
		out.push_str("</");
		out.push_str(tag);
		out.push('>');
	}
	Ok(())
}

/// Raw markup, never escaped.
fn write_inner_html(out: &mut String, inner: &PropValue) {
	if let Some(html) = inner
		.as_props()
		.and_then(|inner| inner.get(INNER_HTML))
		.and_then(PropValue::to_text)
	{
		out.push_str(&html);
	}
}

/// Renders a sequence of children in order.
///
/// Strings are escaped, nested sequences are flattened, elements are
/// dispatched and numbers print as text. Anything else renders nothing.
pub(crate) fn write_children(
	out: &mut String,
	children: &[PropValue],
	options: &RenderOptions,
) -> RenderResult<()> {
	for child in children {
		match child {
			PropValue::Str(text) => out.push_str(&escape_html(text)),
			PropValue::List(items) => write_children(out, items, options)?,
			PropValue::Element(element) => write_element(out, Some(element), options)?,
			PropValue::Number(_) => {
				if let Some(text) = child.to_text() {
					out.push_str(&text);
				}
			}
			PropValue::Null | PropValue::Bool(_) | PropValue::Map(_) | PropValue::Callback(_) => {}
		}
	}
	Ok(())
}

/// Renders a children sequence to a new string.
pub fn render_children(children: &[PropValue], options: &RenderOptions) -> RenderResult<String> {
	let mut out = String::new();
	write_children(&mut out, children, options)?;
	Ok(out)
}
