//! Inline style serialization.

use std::borrow::Cow;

use prerender_types::PropValue;

/// Serializes a `style` prop into the text of a `style` attribute.
///
/// Each `property -> value` pair becomes `dasherized-property: value;`, with
/// no separator between pairs. String styles pass through untouched; any
/// other non-mapping value serializes to the empty string. Sequence values
/// are joined with `,`; entries holding elements, mappings or callbacks are
/// skipped.
///
/// # Examples
///
/// ```
/// use prerender_ssr::style::render_style;
/// use prerender_types::{PropValue, Props};
///
/// let style = Props::new()
///     .prop("backgroundColor", "red")
///     .prop("borderBottomWidth", "10px");
/// assert_eq!(
///     render_style(&PropValue::Map(style)),
///     "background-color: red;border-bottom-width: 10px;"
/// );
/// ```
pub fn render_style(style: &PropValue) -> String {
	match style {
		PropValue::Map(declarations) => {
			let mut out = String::new();
			for (property, value) in declarations {
				let text = match value {
					PropValue::Null => Cow::Borrowed("null"),
					PropValue::List(items) => match join_values(items) {
						Some(text) => Cow::Owned(text),
						None => continue,
					},
					other => match other.to_text() {
						Some(text) => text,
						None => continue,
					},
				};
				out.push_str(&dasherize(property));
				out.push_str(": ");
				out.push_str(&text);
				out.push(';');
			}
			out
		}
		PropValue::Str(text) => text.to_string(),
		_ => String::new(),
	}
}

/// Joins a sequence value with `,`, `Null` items as empty text.
fn join_values(items: &[PropValue]) -> Option<String> {
	let mut parts = Vec::with_capacity(items.len());
	for item in items {
		match item {
			PropValue::Null => parts.push(String::new()),
			PropValue::List(nested) => parts.push(join_values(nested)?),
			other => parts.push(other.to_text()?.into_owned()),
		}
	}
	Some(parts.join(","))
}

/// Converts a camel-case property name to hyphen-case.
///
/// ```
/// use prerender_ssr::style::dasherize;
///
/// assert_eq!(dasherize("backgroundColor"), "background-color");
/// assert_eq!(dasherize("WebkitTransition"), "-webkit-transition");
/// ```
pub fn dasherize(property: &str) -> String {
	let mut out = String::with_capacity(property.len() + 4);
	for c in property.chars() {
		if c.is_ascii_uppercase() {
			out.push('-');
			out.push(c.to_ascii_lowercase());
		} else {
			out.push(c);
		}
	}
	out
}
