//! # Cache Interface
//!
//! [`ProbeCache`] is the surface a collaborator (CLI, service layer, test
//! harness) uses. Presence and retrieval are split: [`ProbeCache::lookup`]
//! answers "is it there?" and updates recency/promotion state, while
//! [`ProbeCache::fetch`] hands out the value afterwards. Values therefore
//! need no sentinel "absent" state.
//!
//! ```text
//!   caller                         ProbeCache
//!   ──────                         ──────────
//!   lookup(&k) ───────────────────► bool   (may promote / reorder)
//!      │ true                            │ false
//!      ▼                                 ▼
//!   fetch(&k) ──► Ok(&v)            put(k, v) ──► Ok(()) | Err(DuplicateKey)
//! ```
//!
//! [`ProbeCache::lookup_or_put`] bundles the common "probe, insert on miss"
//! loop.

use crate::error::CacheError;

/// Outcome of [`ProbeCache::lookup_or_put`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// The key was resident; recency state was updated.
    Hit,
    /// The key was absent and has been inserted.
    Miss,
}

impl Probe {
    pub fn is_hit(self) -> bool {
        matches!(self, Probe::Hit)
    }
}

/// Probe / fetch / put cache interface.
///
/// # Example
///
/// ```
/// use lrufreq::policy::two_queue::TwoQueueCache;
/// use lrufreq::traits::{Probe, ProbeCache};
///
/// fn serve<C: ProbeCache<u64, String>>(cache: &mut C, key: u64, line: &str) -> Probe {
///     cache.lookup_or_put(key, || line.to_string()).unwrap()
/// }
///
/// let mut cache = TwoQueueCache::new(2).unwrap();
/// assert_eq!(serve(&mut cache, 7, "seven"), Probe::Miss);
/// assert_eq!(serve(&mut cache, 7, "seven"), Probe::Hit);
/// assert_eq!(cache.fetch(&7).unwrap(), "seven");
/// ```
pub trait ProbeCache<K, V> {
    /// Returns `true` if `key` is resident. May reorder or promote it.
    fn lookup(&mut self, key: &K) -> bool;

    /// Returns the value of a resident key.
    ///
    /// # Errors
    ///
    /// [`CacheError::KeyNotFound`] if `key` is not resident.
    fn fetch(&self, key: &K) -> Result<&V, CacheError>;

    /// Inserts a key that is not yet resident.
    ///
    /// # Errors
    ///
    /// [`CacheError::DuplicateKey`] if `key` is already resident.
    fn put(&mut self, key: K, value: V) -> Result<(), CacheError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn capacity(&self) -> usize;

    /// Probes `key`; on a miss inserts the value built by `make_value`.
    fn lookup_or_put<F>(&mut self, key: K, make_value: F) -> Result<Probe, CacheError>
    where
        F: FnOnce() -> V,
    {
        if self.lookup(&key) {
            return Ok(Probe::Hit);
        }
        self.put(key, make_value())?;
        Ok(Probe::Miss)
    }
}
