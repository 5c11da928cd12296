//! lrufreq: a fixed-capacity two-queue cache.
//!
//! Keys are admitted into a probationary queue and promoted to a protected
//! queue only when looked up again. See [`policy::two_queue`] for the
//! algorithm and [`traits::ProbeCache`] for the lookup/fetch/put contract.

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod traits;

#[cfg(feature = "metrics")]
pub mod metrics;

pub use crate::error::CacheError;
pub use crate::policy::two_queue::{Segment, TwoQueueCache};
