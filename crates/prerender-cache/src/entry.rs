//! Internal cache entry structure

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Cached markup with expiration and recency
#[derive(Debug)]
pub(crate) struct CacheEntry {
	pub(crate) html: String,
	pub(crate) expires_at: Option<Instant>,
	last_access: AtomicU64,
}

impl CacheEntry {
	pub(crate) fn new(html: String, ttl: Option<Duration>, tick: u64) -> Self {
		let expires_at = ttl.map(|d| Instant::now() + d);
		Self {
			html,
			expires_at,
			last_access: AtomicU64::new(tick),
		}
	}

	pub(crate) fn is_expired(&self) -> bool {
		if let Some(expires_at) = self.expires_at {
			Instant::now() >= expires_at
		} else {
			false
		}
	}

	pub(crate) fn touch(&self, tick: u64) {
		self.last_access.fetch_max(tick, Ordering::Relaxed);
	}

	pub(crate) fn last_access(&self) -> u64 {
		self.last_access.load(Ordering::Relaxed)
	}
}
