//! Render cache capability and component cache-key prefixes.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use prerender_types::ComponentType;
use uuid::Uuid;

/// Memoization store for rendered component markup.
///
/// The renderer only reads and inserts: it checks [`has`](RenderCache::has)
/// and [`get`](RenderCache::get) before rendering a cacheable component and
/// calls [`set`](RenderCache::set) once the component's whole subtree has
/// rendered. Eviction and expiry belong to the implementation.
///
/// Implementations are shared across render calls, hence `&self` receivers
/// and the `Send + Sync` bound.
pub trait RenderCache: Send + Sync {
	/// Returns whether `key` holds markup.
	fn has(&self, key: &str) -> bool;

	/// Returns the markup stored under `key`.
	fn get(&self, key: &str) -> Option<String>;

	/// Stores markup under `key`.
	fn set(&self, key: &str, html: String);
}

impl<C: RenderCache + ?Sized> RenderCache for Arc<C> {
	fn has(&self, key: &str) -> bool {
		(**self).has(key)
	}

	fn get(&self, key: &str) -> Option<String> {
		(**self).get(key)
	}

	fn set(&self, key: &str, html: String) {
		(**self).set(key, html)
	}
}

/// Side table of cache-key prefixes, one per component definition.
pub(crate) struct PrefixTable {
	prefixes: RwLock<HashMap<TypeId, Arc<str>>>,
}

impl PrefixTable {
	fn new() -> Self {
		Self {
			prefixes: RwLock::new(HashMap::new()),
		}
	}

	/// Returns the prefix for `component`, assigning it on first use.
	///
	/// The display name is used when present; otherwise a fresh UUID. The
	/// first writer wins, so concurrent first renders agree on one prefix.
	pub(crate) fn prefix_for(&self, component: &ComponentType) -> Arc<str> {
		{
			let prefixes = self.prefixes.read();
			if let Some(prefix) = prefixes.get(&component.type_id()) {
				return prefix.clone();
			}
		}

		self.prefixes
			.write()
			.entry(component.type_id())
			.or_insert_with(|| {
				let prefix: Arc<str> = match component.display_name() {
					Some(name) => name.into(),
					None => Uuid::new_v4().to_string().into(),
				};
				tracing::debug!(
					component = component.name(),
					prefix = %prefix,
					"assigned cache key prefix"
				);
				prefix
			})
			.clone()
	}
}

static PREFIXES: Lazy<PrefixTable> = Lazy::new(PrefixTable::new);

/// Returns the cache-key prefix of a component definition.
///
/// Stable for the lifetime of the process.
pub fn cache_prefix(component: &ComponentType) -> Arc<str> {
	PREFIXES.prefix_for(component)
}
