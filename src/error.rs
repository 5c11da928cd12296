//! Error types for the lrufreq library.
//!
//! ## Key Components
//!
//! - [`CacheError`]: Returned by the cache operations (`new`, `put`, `fetch`).
//! - [`ConfigError`]: Carried by [`CacheError::InvalidConfiguration`] when a
//!   construction parameter is out of range (e.g. zero capacity).
//! - [`InvariantError`]: Returned by
//!   [`TwoQueueCache::check_invariants`](crate::policy::two_queue::TwoQueueCache::check_invariants)
//!   when the queues and the value store disagree.
//!
//! ## Example Usage
//!
//! ```
//! use lrufreq::error::CacheError;
//! use lrufreq::policy::two_queue::TwoQueueCache;
//!
//! let bad = TwoQueueCache::<u64, String>::new(0);
//! assert!(matches!(bad, Err(CacheError::InvalidConfiguration(_))));
//!
//! let mut cache = TwoQueueCache::new(3).unwrap();
//! cache.put(1u64, "one").unwrap();
//! assert_eq!(cache.put(1, "uno"), Err(CacheError::DuplicateKey));
//! assert_eq!(cache.fetch(&2), Err(CacheError::KeyNotFound));
//! ```

use std::error::Error;
use std::fmt;

// ---------------------------------------------------------------------------
// CacheError
// ---------------------------------------------------------------------------

/// Errors produced by the cache operations.
///
/// All variants are caller errors: the engine never raises them on its own
/// and never swallows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Construction parameters were rejected.
    InvalidConfiguration(ConfigError),
    /// `put` was called for a key that is already resident.
    DuplicateKey,
    /// `fetch` was called for a key that is not resident.
    KeyNotFound,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::InvalidConfiguration(err) => write!(f, "invalid configuration: {}", err),
            CacheError::DuplicateKey => f.write_str("key is already resident in the cache"),
            CacheError::KeyNotFound => f.write_str("key is not resident in the cache"),
        }
    }
}

impl Error for CacheError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CacheError::InvalidConfiguration(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for CacheError {
    fn from(err: ConfigError) -> Self {
        CacheError::InvalidConfiguration(err)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`TwoQueueCache::new`](crate::policy::two_queue::TwoQueueCache::new)
/// and [`CacheBuilder::build`](crate::builder::CacheBuilder::build), wrapped in
/// [`CacheError::InvalidConfiguration`].
///
/// # Example
///
/// ```
/// use lrufreq::error::CacheError;
/// use lrufreq::policy::two_queue::TwoQueueCache;
///
/// let err = TwoQueueCache::<u64, u64>::new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
