//! Attribute projection: props to markup attributes.

use std::borrow::Cow;

use prerender_types::{CHILDREN, PropValue, Props};

use crate::escape::escape_attr;
use crate::style::render_style;

/// Prefixes whose boolean values render as literal `"true"` / `"false"`.
pub const AS_IS_BOOLEAN_PREFIXES: &[&str] = &["data-", "aria-"];

const KEY: &str = "key";
const STYLE: &str = "style";

/// Renders the attribute fragment for `tag`, with a leading space before
/// every attribute, or the empty string.
///
/// # Examples
///
/// ```
/// use prerender_ssr::attrs::render_attrs;
/// use prerender_types::Props;
///
/// let props = Props::new()
///     .prop("type", "password")
///     .prop("value", "pass")
///     .prop("readOnly", true)
///     .prop("disabled", false);
/// assert_eq!(
///     render_attrs("input", &props),
///     r#" type="password" value="pass" readOnly"#
/// );
/// ```
pub fn render_attrs(tag: &str, props: &Props) -> String {
	let mut out = String::new();
	write_attrs(&mut out, tag, props);
	out
}

pub(crate) fn write_attrs(out: &mut String, tag: &str, props: &Props) {
	for (key, value) in props {
		if is_reserved(tag, key) {
			continue;
		}

		let serialized;
		let value = if key == STYLE {
			serialized = PropValue::from(render_style(value));
			&serialized
		} else {
			value
		};

		let as_is = matches!(value, PropValue::Bool(_)) && has_prefixes(key, AS_IS_BOOLEAN_PREFIXES);
		let text: Option<Cow<'_, str>> = match value {
			PropValue::Bool(_) if as_is => value.to_text(),
			PropValue::Bool(false) => continue,
			PropValue::Bool(true) => None,
			PropValue::Str(s) => Some(escape_attr(s)),
			PropValue::Number(_) => value.to_text(),
			_ => continue,
		};

		out.push(' ');
		out.push_str(attr_name(key));
		if let Some(text) = text {
			out.push_str("=\"");
			out.push_str(&text);
			out.push('"');
		}
	}
}

/// Props that never become attributes on `tag`.
///
/// `value`/`defaultValue` on `select` and `value` on `textarea` are consumed
/// as content by the form-control rendering.
fn is_reserved(tag: &str, key: &str) -> bool {
	match key {
		CHILDREN | KEY => true,
		"value" => tag == "select" || tag == "textarea",
		"defaultValue" => tag == "select",
		_ => false,
	}
}

fn attr_name(key: &str) -> &str {
	match key {
		"htmlFor" => "for",
		"className" => "class",
		other => other,
	}
}

/// Returns whether `s` starts with any of `prefixes`.
pub fn has_prefixes(s: &str, prefixes: &[&str]) -> bool {
	prefixes.iter().any(|prefix| s.starts_with(prefix))
}
