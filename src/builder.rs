//! Cache builder.
//!
//! Collects construction options and validates them in one place. The
//! builder is the configuration surface for callers that want more than
//! [`TwoQueueCache::new`]; both paths share the same capacity check.
//!
//! ## Example
//!
//! ```rust
//! use lrufreq::builder::CacheBuilder;
//!
//! let mut cache = CacheBuilder::new(100)
//!     .preallocate(true)
//!     .build::<u64, String>()
//!     .unwrap();
//! cache.put(1, "hello".to_string()).unwrap();
//! assert!(cache.lookup(&1));
//! assert_eq!(cache.fetch(&1).unwrap(), "hello");
//! ```

use std::hash::Hash;

use crate::error::CacheError;
use crate::policy::two_queue::TwoQueueCache;

/// Builder for [`TwoQueueCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheBuilder {
    capacity: usize,
    preallocate: bool,
}

impl CacheBuilder {
    /// Starts a builder for a cache whose queues each hold `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            preallocate: false,
        }
    }

    /// Reserve index and arena space for a full cache (`2 × capacity`
    /// entries) at build time instead of growing on demand.
    pub fn preallocate(mut self, preallocate: bool) -> Self {
        self.preallocate = preallocate;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Builds the cache.
    ///
    /// # Errors
    ///
    /// [`CacheError::InvalidConfiguration`] if the capacity is zero.
    pub fn build<K, V>(self) -> Result<TwoQueueCache<K, V>, CacheError>
    where
        K: Clone + Eq + Hash,
    {
        let reserve = if self.preallocate {
            self.capacity.saturating_mul(2)
        } else {
            0
        };
        TwoQueueCache::with_reserve(self.capacity, reserve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_requested_capacity() {
        let cache = CacheBuilder::new(16).build::<u32, u32>().unwrap();
        assert_eq!(cache.capacity(), 16);
        assert!(cache.is_empty());
    }

    #[test]
    fn preallocated_cache_behaves_the_same() {
        let mut cache = CacheBuilder::new(2)
            .preallocate(true)
            .build::<u32, &str>()
            .unwrap();
        for k in 0..3 {
            cache.put(k, "v").unwrap();
        }
        assert!(!cache.contains(&0));
        assert_eq!(cache.admission_len(), 2);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn zero_capacity_fails_at_build() {
        let builder = CacheBuilder::new(0).preallocate(true);
        assert_eq!(builder.capacity(), 0);
        assert!(matches!(
            builder.build::<u32, u32>(),
            Err(CacheError::InvalidConfiguration(_))
        ));
    }
}
