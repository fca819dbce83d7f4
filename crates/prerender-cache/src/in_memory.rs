//! In-memory render cache implementation

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::RwLock;
use prerender_ssr::RenderCache;

use crate::entry::CacheEntry;
use crate::statistics::CacheStatistics;

/// In-memory store for rendered component markup
///
/// Clones share the same store and counters, so one cache can be handed to
/// many render calls (and threads) at once.
#[derive(Clone, Debug)]
pub struct InMemoryCache {
	store: Arc<RwLock<HashMap<String, CacheEntry>>>,
	default_ttl: Option<Duration>,
	max_entries: Option<usize>,
	clock: Arc<AtomicU64>,
	hits: Arc<AtomicU64>,
	misses: Arc<AtomicU64>,
}

impl InMemoryCache {
	/// Create a new in-memory cache with no capacity limit and no TTL
	///
	/// # Examples
	///
	/// ```
	/// use prerender_cache::InMemoryCache;
	///
	/// let cache = InMemoryCache::new();
	/// assert!(cache.is_empty());
	/// ```
	pub fn new() -> Self {
		Self {
			store: Arc::new(RwLock::new(HashMap::new())),
			default_ttl: None,
			max_entries: None,
			clock: Arc::new(AtomicU64::new(0)),
			hits: Arc::new(AtomicU64::new(0)),
			misses: Arc::new(AtomicU64::new(0)),
		}
	}

	/// Limit the number of entries
	///
	/// When full, storing a new key evicts the least recently used entry.
	/// A limit of zero stores nothing.
	///
	/// # Examples
	///
	/// ```
	/// use prerender_cache::InMemoryCache;
	/// use prerender_ssr::RenderCache;
	///
	/// let cache = InMemoryCache::new().with_max_entries(2);
	/// cache.set("a", "<a></a>".to_string());
	/// cache.set("b", "<b></b>".to_string());
	/// let _ = cache.get("a");
	/// cache.set("c", "<i></i>".to_string());
	///
	/// assert!(cache.has("a"));
	/// assert!(!cache.has("b"));
	/// assert!(cache.has("c"));
	/// ```
	pub fn with_max_entries(mut self, max_entries: usize) -> Self {
		self.max_entries = Some(max_entries);
		self
	}

	/// Set a TTL for every entry
	///
	/// Expired entries are invisible to lookups and purged when the cache
	/// needs room or on [`cleanup_expired`](Self::cleanup_expired).
	pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
		self.default_ttl = Some(ttl);
		self
	}

	/// Number of live entries
	pub fn len(&self) -> usize {
		self.store
			.read()
			.values()
			.filter(|entry| !entry.is_expired())
			.count()
	}

	/// Whether no live entry exists
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Keys of live entries, most recently used first
	pub fn keys(&self) -> Vec<String> {
		self.live_entries(|key, _| key.to_string())
	}

	/// Markup of live entries, most recently used first
	pub fn values(&self) -> Vec<String> {
		self.live_entries(|_, entry| entry.html.clone())
	}

	/// Remove every entry
	pub fn clear(&self) {
		self.store.write().clear();
	}

	/// Remove expired entries
	pub fn cleanup_expired(&self) {
		let mut store = self.store.write();
		let before = store.len();
		store.retain(|_, entry| !entry.is_expired());
		let removed = before - store.len();
		if removed > 0 {
			tracing::debug!(removed, "purged expired render cache entries");
		}
	}

	/// Get cache statistics
	///
	/// Only [`get`](RenderCache::get) counts as a request.
	///
	/// # Examples
	///
	/// ```
	/// use prerender_cache::InMemoryCache;
	/// use prerender_ssr::RenderCache;
	///
	/// let cache = InMemoryCache::new();
	/// cache.set("key1", "<p>1</p>".to_string());
	///
	/// let _ = cache.get("key1"); // Hit
	/// let _ = cache.get("key2"); // Miss
	///
	/// let stats = cache.statistics();
	/// assert_eq!(stats.hits, 1);
	/// assert_eq!(stats.misses, 1);
	/// assert_eq!(stats.total_requests, 2);
	/// assert_eq!(stats.entry_count, 1);
	/// assert_eq!(stats.memory_usage, 8);
	/// ```
	pub fn statistics(&self) -> CacheStatistics {
		let store = self.store.read();
		let hits = self.hits.load(Ordering::Relaxed);
		let misses = self.misses.load(Ordering::Relaxed);
		let live = store.values().filter(|entry| !entry.is_expired());
		let (entry_count, memory_usage) = live.fold((0u64, 0u64), |(count, bytes), entry| {
			(count + 1, bytes + entry.html.len() as u64)
		});

		CacheStatistics {
			hits,
			misses,
			total_requests: hits + misses,
			entry_count,
			memory_usage,
		}
	}

	fn next_tick(&self) -> u64 {
		self.clock.fetch_add(1, Ordering::Relaxed) + 1
	}

	fn live_entries<T>(&self, project: impl Fn(&str, &CacheEntry) -> T) -> Vec<T> {
		let store = self.store.read();
		let mut live: Vec<_> = store
			.iter()
			.filter(|(_, entry)| !entry.is_expired())
			.collect();
		live.sort_by_key(|(_, entry)| std::cmp::Reverse(entry.last_access()));
		live.into_iter()
			.map(|(key, entry)| project(key, entry))
			.collect()
	}

	fn evict_least_recently_used(store: &mut HashMap<String, CacheEntry>) {
		let oldest = store
			.iter()
			.min_by_key(|(_, entry)| entry.last_access())
			.map(|(key, _)| key.clone());
		if let Some(key) = oldest {
			store.remove(&key);
			tracing::debug!(key = %key, "evicted render cache entry");
		}
	}
}

impl Default for InMemoryCache {
	fn default() -> Self {
		Self::new()
	}
}

impl RenderCache for InMemoryCache {
	fn has(&self, key: &str) -> bool {
		self.store
			.read()
			.get(key)
			.is_some_and(|entry| !entry.is_expired())
	}

	fn get(&self, key: &str) -> Option<String> {
		let store = self.store.read();
		match store.get(key).filter(|entry| !entry.is_expired()) {
			Some(entry) => {
				entry.touch(self.next_tick());
				self.hits.fetch_add(1, Ordering::Relaxed);
				Some(entry.html.clone())
			}
			None => {
				self.misses.fetch_add(1, Ordering::Relaxed);
				tracing::debug!(key, "render cache miss");
				None
			}
		}
	}

	fn set(&self, key: &str, html: String) {
		if self.max_entries == Some(0) {
			return;
		}

		let entry = CacheEntry::new(html, self.default_ttl, self.next_tick());
		let mut store = self.store.write();
		if let Some(max) = self.max_entries
			&& !store.contains_key(key)
			&& store.len() >= max
		{
			store.retain(|_, entry| !entry.is_expired());
			while store.len() >= max {
				Self::evict_least_recently_used(&mut store);
			}
		}
		store.insert(key.to_string(), entry);
	}
}
