//! Prop values.
//!
//! A [`PropValue`] is anything that can sit behind a prop key: scalars that
//! project onto attributes, nested elements and sequences that render as
//! children, nested mappings (`style`, `dangerouslySetInnerHTML`), and opaque
//! callbacks that never render.

use std::borrow::Cow;
use std::sync::Arc;

use crate::element::Element;
use crate::props::Props;

/// Signature of the function wrapped by a [`Callback`].
pub type CallbackFn = dyn Fn(&[PropValue]) -> PropValue + Send + Sync;

/// An opaque function value carried in props.
///
/// Callbacks exist so that event-handler-like props can travel through the
/// tree. The renderer never invokes them: as attributes they are dropped and
/// as children they are skipped.
#[derive(Clone)]
pub struct Callback(Arc<CallbackFn>);

impl Callback {
	/// Wraps a function.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(&[PropValue]) -> PropValue + Send + Sync + 'static,
	{
		Self(Arc::new(f))
	}

	/// Invokes the wrapped function.
	pub fn call(&self, args: &[PropValue]) -> PropValue {
		(self.0)(args)
	}
}

impl std::fmt::Debug for Callback {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Callback").field(&"<closure>").finish()
	}
}

impl PartialEq for Callback {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

/// A single prop value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PropValue {
	/// Explicitly empty value.
	#[default]
	Null,
	/// Boolean value.
	Bool(bool),
	/// Numeric value, printed the way JavaScript prints numbers.
	Number(f64),
	/// Text value.
	Str(Cow<'static, str>),
	/// Nested element.
	Element(Element),
	/// Nested sequence, flattened when rendered as children.
	List(Vec<PropValue>),
	/// Nested mapping, e.g. a style object.
	Map(Props),
	/// Function value.
	Callback(Callback),
}

impl PropValue {
	/// Creates a text value.
	pub fn str(value: impl Into<Cow<'static, str>>) -> Self {
		Self::Str(value.into())
	}

	/// Creates a callback value.
	pub fn callback<F>(f: F) -> Self
	where
		F: Fn(&[PropValue]) -> PropValue + Send + Sync + 'static,
	{
		Self::Callback(Callback::new(f))
	}

	/// Returns `true` for [`PropValue::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// JavaScript truthiness.
	///
	/// `Null`, `false`, `0`, `NaN` and the empty string are falsy; everything
	/// else, including empty sequences and mappings, is truthy.
	pub fn is_truthy(&self) -> bool {
		match self {
			Self::Null => false,
			Self::Bool(b) => *b,
			Self::Number(n) => *n != 0.0 && !n.is_nan(),
			Self::Str(s) => !s.is_empty(),
			Self::Element(_) | Self::List(_) | Self::Map(_) | Self::Callback(_) => true,
		}
	}

	/// Textual form of a scalar value.
	///
	/// Returns `None` for everything that is not a string, number or boolean.
	pub fn to_text(&self) -> Option<Cow<'_, str>> {
		match self {
			Self::Str(s) => Some(Cow::Borrowed(s.as_ref())),
			Self::Number(n) => Some(Cow::Owned(format_number(*n))),
			Self::Bool(true) => Some(Cow::Borrowed("true")),
			Self::Bool(false) => Some(Cow::Borrowed("false")),
			_ => None,
		}
	}

	/// Returns the text if this is a string value.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the number if this is a numeric value.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Self::Number(n) => Some(*n),
			_ => None,
		}
	}

	/// Returns the boolean if this is a boolean value.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Returns the element if this is an element value.
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Self::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Returns the items if this is a sequence.
	pub fn as_list(&self) -> Option<&[PropValue]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	/// Returns the nested props if this is a mapping.
	pub fn as_props(&self) -> Option<&Props> {
		match self {
			Self::Map(props) => Some(props),
			_ => None,
		}
	}

	/// Views this value as a sequence: a list yields its items, anything
	/// else yields a one-element slice containing itself.
	pub fn as_sequence(&self) -> &[PropValue] {
		match self {
			Self::List(items) => items,
			other => std::slice::from_ref(other),
		}
	}
}

/// Formats a number the way JavaScript's `String(number)` does.
///
/// Digits are the shortest that round-trip. Integral values print without a
/// fractional part, `-0` prints as `0`, and non-finite values print as `NaN`,
/// `Infinity` and `-Infinity`. Magnitudes of at least `1e21` or below `1e-6`
/// use exponent notation with an explicit sign (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
	if n.is_nan() {
		return "NaN".to_string();
	}
	if n.is_infinite() {
		return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
	}
	if n == 0.0 {
		return "0".to_string();
	}

	let magnitude = n.abs();
	if magnitude >= 1e21 || magnitude < 1e-6 {
		let formatted = format!("{n:e}");
		return match formatted.split_once('e') {
			Some((mantissa, exponent)) if !exponent.starts_with('-') => {
				format!("{mantissa}e+{exponent}")
			}
			_ => formatted,
		};
	}
	n.to_string()
}

impl From<&'static str> for PropValue {
	fn from(value: &'static str) -> Self {
		Self::Str(Cow::Borrowed(value))
	}
}

impl From<String> for PropValue {
	fn from(value: String) -> Self {
		Self::Str(Cow::Owned(value))
	}
}

impl From<&String> for PropValue {
	fn from(value: &String) -> Self {
		Self::Str(Cow::Owned(value.clone()))
	}
}

impl From<Cow<'static, str>> for PropValue {
	fn from(value: Cow<'static, str>) -> Self {
		Self::Str(value)
	}
}

impl From<bool> for PropValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for PropValue {
				fn from(value: $ty) -> Self {
					Self::Number(value as f64)
				}
			}
		)*
	};
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Element> for PropValue {
	fn from(value: Element) -> Self {
		Self::Element(value)
	}
}

impl From<Props> for PropValue {
	fn from(value: Props) -> Self {
		Self::Map(value)
	}
}

impl From<Callback> for PropValue {
	fn from(value: Callback) -> Self {
		Self::Callback(value)
	}
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
	fn from(value: Vec<T>) -> Self {
		Self::List(value.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl<T: Into<PropValue>> FromIterator<T> for PropValue {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::List(iter.into_iter().map(Into::into).collect())
	}
}
