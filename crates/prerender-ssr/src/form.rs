//! Form controls whose state renders as content.
//!
//! `<textarea>` renders its `value` prop as its text, and `<select>` projects
//! its `value`/`defaultValue` onto its `<option>` children as `selected`
//! markers. Neither tag emits those props as attributes.

use std::borrow::Cow;

use prerender_types::{CHILDREN, PropValue, Props};

use crate::error::{RenderError, RenderResult};
use crate::native::write_children;
use crate::options::RenderOptions;

const VALUE: &str = "value";
const DEFAULT_VALUE: &str = "defaultValue";
const MULTIPLE: &str = "multiple";
const SELECTED: &str = "selected";

pub(crate) fn write_textarea(
	out: &mut String,
	props: &Props,
	options: &RenderOptions,
) -> RenderResult<()> {
	match props.get(VALUE) {
		Some(value) => write_children(out, std::slice::from_ref(value), options),
		None => Ok(()),
	}
}

pub(crate) fn write_select(
	out: &mut String,
	props: &Props,
	options: &RenderOptions,
) -> RenderResult<()> {
	let Some(children) = props.get(CHILDREN) else {
		return Ok(());
	};
	let selected = selected_values(props)?;
	let children = mark_select_children(children.as_sequence(), &selected);
	write_children(out, &children, options)
}

/// Renders the content of a `<select>` with the given props.
///
/// # Examples
///
/// ```
/// use prerender_ssr::form::render_select;
/// use prerender_ssr::RenderOptions;
/// use prerender_types::{Element, Props};
///
/// let props = Props::new().prop("value", 2).prop(
///     "children",
///     vec![
///         Element::tag("option").prop("value", 1),
///         Element::tag("option").prop("value", 2),
///     ],
/// );
/// let html = render_select(&props, &RenderOptions::default()).unwrap();
/// assert_eq!(html, r#"<option value="1"></option><option value="2" selected></option>"#);
/// ```
pub fn render_select(props: &Props, options: &RenderOptions) -> RenderResult<String> {
	let mut out = String::new();
	write_select(&mut out, props, options)?;
	Ok(out)
}

/// Computes the set of selected values of a `<select>`, as strings.
///
/// `value` wins over `defaultValue`. Without `multiple` the value is a single
/// entry; with `multiple` it must be a sequence.
pub fn selected_values(props: &Props) -> RenderResult<Vec<String>> {
	let value = props
		.get(VALUE)
		.filter(|v| !v.is_null())
		.or_else(|| props.get(DEFAULT_VALUE).filter(|v| !v.is_null()));
	let Some(value) = value else {
		return Ok(Vec::new());
	};

	let multiple = props.get(MULTIPLE).is_some_and(PropValue::is_truthy);
	if !multiple {
		return Ok(vec![coerce(value)?]);
	}

	match value {
		PropValue::List(items) => items.iter().map(coerce).collect(),
		_ => Err(malformed(
			"a `multiple` select requires a sequence of values",
		)),
	}
}

/// Returns `children` with every matching `<option>` marked `selected`.
///
/// Options nested in an `<optgroup>` whose children are a sequence are
/// marked too. Matching elements are copied; the input is never modified.
pub fn mark_select_children(children: &[PropValue], selected: &[String]) -> Vec<PropValue> {
	children
		.iter()
		.map(|child| {
			let Some(element) = child.as_element() else {
				return child.clone();
			};
			match element.tag_name() {
				Some("option") if is_selected(element.props(), selected) => {
					PropValue::Element(element.with_prop(SELECTED, true))
				}
				Some("optgroup") => match element.props().get(CHILDREN) {
					Some(PropValue::List(options)) => PropValue::Element(element.with_prop(
						CHILDREN,
						PropValue::List(mark_select_children(options, selected)),
					)),
					_ => child.clone(),
				},
				_ => child.clone(),
			}
		})
		.collect()
}

fn is_selected(option: &Props, selected: &[String]) -> bool {
	option
		.get(VALUE)
		.and_then(|value| coerce(value).ok())
		.is_some_and(|value| selected.contains(&value))
}

/// String coercion for selection comparison.
///
/// Scalars use their text form; a sequence joins its entries with `,`
/// (empty entries for `Null`). Anything else has no string form.
fn coerce(value: &PropValue) -> RenderResult<String> {
	match value {
		PropValue::List(items) => items
			.iter()
			.map(|item| match item {
				PropValue::Null => Ok(String::new()),
				other => coerce(other),
			})
			.collect::<RenderResult<Vec<_>>>()
			.map(|parts| parts.join(",")),
		other => other
			.to_text()
			.map(Cow::into_owned)
			.ok_or_else(|| malformed("select values must be strings, numbers or booleans")),
	}
}

fn malformed(reason: &str) -> RenderError {
	RenderError::MalformedProps {
		tag: "select".to_string(),
		reason: reason.to_string(),
	}
}
