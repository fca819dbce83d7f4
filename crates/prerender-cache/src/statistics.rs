//! Cache statistics

/// Cache statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStatistics {
	/// Number of cache hits
	pub hits: u64,
	/// Number of cache misses
	pub misses: u64,
	/// Total number of lookups
	pub total_requests: u64,
	/// Current number of live entries
	pub entry_count: u64,
	/// Approximate memory usage of the stored markup in bytes
	pub memory_usage: u64,
}

impl CacheStatistics {
	/// Calculate hit rate (0.0 to 1.0)
	///
	/// # Examples
	///
	/// ```
	/// use prerender_cache::CacheStatistics;
	///
	/// let stats = CacheStatistics {
	///     hits: 75,
	///     misses: 25,
	///     total_requests: 100,
	///     ..Default::default()
	/// };
	///
	/// assert_eq!(stats.hit_rate(), 0.75);
	/// ```
	pub fn hit_rate(&self) -> f64 {
		if self.total_requests == 0 {
			0.0
		} else {
			self.hits as f64 / self.total_requests as f64
		}
	}

	/// Calculate miss rate (0.0 to 1.0)
	pub fn miss_rate(&self) -> f64 {
		if self.total_requests == 0 {
			0.0
		} else {
			self.misses as f64 / self.total_requests as f64
		}
	}
}
