//! # Prerender Cache
//!
//! An in-memory [`RenderCache`](prerender_ssr::RenderCache) with optional
//! least-recently-used eviction and a default time-to-live.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use prerender_cache::InMemoryCache;
//! use prerender_ssr::RenderOptions;
//!
//! let cache = InMemoryCache::new()
//!     .with_max_entries(500)
//!     .with_default_ttl(Duration::from_secs(60 * 60));
//! let options = RenderOptions::new().with_cache(Arc::new(cache.clone()));
//!
//! assert!(options.cache().is_some());
//! assert!(cache.is_empty());
//! ```

mod entry;
pub mod in_memory;
pub mod statistics;

pub use in_memory::InMemoryCache;
pub use statistics::CacheStatistics;
