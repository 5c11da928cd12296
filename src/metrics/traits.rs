//! # Metrics Traits
//!
//! Recording, snapshotting and exporting are kept apart so the cache policy
//! never depends on how its numbers are consumed.
//!
//! ```text
//!   ┌────────────────────────────────┐
//!   │    TwoQueueMetricsRecorder     │  written by TwoQueueCache (&mut self)
//!   │  lookup hit/miss, put, dup put │
//!   │  promotion/demotion/forget     │
//!   └───────────────┬────────────────┘
//!                   │
//!   ┌───────────────┴────────────────┐
//!   │  TwoQueueMetricsReadRecorder   │  written from &self paths (fetch/peek)
//!   └────────────────────────────────┘
//!
//!   Consumption:
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters recorded by mutating cache operations.
pub trait TwoQueueMetricsRecorder {
    fn record_lookup_hit(&mut self);
    fn record_lookup_miss(&mut self);
    fn record_put(&mut self);
    fn record_duplicate_put(&mut self);
    /// Key moved from the admission sequence to the protected sequence.
    fn record_promotion(&mut self);
    /// Key pushed out of the protected tail back into admission.
    fn record_demotion(&mut self);
    /// Key dropped from the admission tail and from the value store.
    fn record_forget(&mut self);
    fn record_clear(&mut self);
}

/// Counters recorded from `&self` operations (uses interior mutability).
pub trait TwoQueueMetricsReadRecorder {
    fn record_fetch_hit(&self);
    fn record_fetch_miss(&self);
}

/// Produces a point-in-time snapshot of metrics.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Publishes a snapshot to a monitoring backend.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
