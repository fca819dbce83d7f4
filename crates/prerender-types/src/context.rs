//! Inherited render context.

use std::sync::Arc;

use serde_json::{Map, Value};

/// Immutable mapping handed from ancestor components to their descendants.
///
/// A context is never pruned and never mutated in place. Descending into a
/// component that supplies child context produces a new context through
/// [`Context::extend`], leaving the parent's copy untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
	values: Arc<Map<String, Value>>,
}

impl Context {
	/// Creates an empty context.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a value, builder style.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		Arc::make_mut(&mut self.values).insert(key.into(), value.into());
		self
	}

	/// Looks up a value.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.values.get(key)
	}

	/// Looks up a string value.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(Value::as_str)
	}

	/// Shallow merge: entries of `child` win on key collisions.
	pub fn extend(&self, child: &Context) -> Context {
		if child.is_empty() {
			return self.clone();
		}
		if self.is_empty() {
			return child.clone();
		}
		let mut merged = (*self.values).clone();
		for (key, value) in child.values.iter() {
			merged.insert(key.clone(), value.clone());
		}
		Context {
			values: Arc::new(merged),
		}
	}

	/// Iterates over all entries.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.values.iter()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns `true` when the context holds no entries.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl From<Map<String, Value>> for Context {
	fn from(values: Map<String, Value>) -> Self {
		Self {
			values: Arc::new(values),
		}
	}
}

impl<K, V> FromIterator<(K, V)> for Context
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		iter.into_iter()
			.map(|(k, v)| (k.into(), v.into()))
			.collect::<Map<String, Value>>()
			.into()
	}
}
