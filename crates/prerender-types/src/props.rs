//! Ordered prop mappings.

use std::borrow::Cow;

use crate::value::PropValue;

/// Key under which child content is stored.
pub const CHILDREN: &str = "children";

/// Ordered mapping from prop names to values.
///
/// Iteration follows insertion order, which is also the order in which
/// attributes are emitted. Setting an existing key replaces its value in
/// place without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
	entries: Vec<Entry>,
}

impl Props {
	/// Creates an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a prop, builder style.
	pub fn prop(
		mut self,
		key: impl Into<Cow<'static, str>>,
		value: impl Into<PropValue>,
	) -> Self {
		self.set(key, value);
		self
	}

	/// Adds or replaces a prop.
	pub fn set(&mut self, key: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) {
		let key = key.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(k, _)| *k == key) {
			Some((_, slot)) => *slot = value,
			None => self.entries.push((key, value)),
		}
	}

	/// Returns a copy of these props with `key` set to `value`.
	pub fn with(&self, key: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) -> Self {
		let mut patched = self.clone();
		patched.set(key, value);
		patched
	}

	/// Looks up a prop.
	pub fn get(&self, key: &str) -> Option<&PropValue> {
		self.entries
			.iter()
			.find(|(k, _)| *k == key)
			.map(|(_, v)| v)
	}

	/// Returns whether a prop is present, even if it is [`PropValue::Null`].
	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Returns the `children` prop.
	pub fn children(&self) -> Option<&PropValue> {
		self.get(CHILDREN)
	}

	/// Iterates over `(key, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
		self.entries.iter().map(|(k, v)| (&**k, v))
	}

	/// Number of props.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` when no props are set.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Appends a child to the `children` prop, promoting it to a sequence.
	pub(crate) fn push_child(&mut self, child: PropValue) {
		match self.entries.iter_mut().find(|(k, _)| k == CHILDREN) {
			Some((_, PropValue::List(items))) => items.push(child),
			Some((_, slot)) => {
				let previous = std::mem::take(slot);
				*slot = PropValue::List(vec![previous, child]);
			}
			None => self
				.entries
				.push((Cow::Borrowed(CHILDREN), PropValue::List(vec![child]))),
		}
	}
}

impl<K, V> FromIterator<(K, V)> for Props
where
	K: Into<Cow<'static, str>>,
	V: Into<PropValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut props = Props::new();
		for (key, value) in iter {
			props.set(key, value);
		}
		props
	}
}

impl<'a> IntoIterator for &'a Props {
	type Item = (&'a str, &'a PropValue);
	type IntoIter = std::iter::Map<std::slice::Iter<'a, Entry>, EntryRef<'a>>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter().map(entry_ref as EntryRef<'a>)
	}
}

type Entry = (Cow<'static, str>, PropValue);
type EntryRef<'a> = fn(&'a Entry) -> (&'a str, &'a PropValue);

fn entry_ref(entry: &Entry) -> (&str, &PropValue) {
	(&entry.0, &entry.1)
}
