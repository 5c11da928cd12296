//! Observability for the two-queue cache (feature `metrics`).
//!
//! Recording, snapshotting and exporting are split into separate traits so
//! the engine only ever writes counters:
//!
//! - [`traits::TwoQueueMetricsRecorder`]: counters written by the engine.
//! - [`traits::MetricsSnapshotProvider`]: point-in-time copy for tests/benches.
//! - [`traits::MetricsExporter`]: publishes a snapshot (see
//!   [`exporter::PrometheusTextExporter`]).

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::TwoQueueMetrics;
pub use snapshot::TwoQueueMetricsSnapshot;
pub use traits::{MetricsExporter, MetricsSnapshotProvider, TwoQueueMetricsRecorder};
