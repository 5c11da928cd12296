pub use crate::builder::CacheBuilder;
pub use crate::error::{CacheError, ConfigError, InvariantError};
pub use crate::policy::two_queue::{Segment, TwoQueueCache};
pub use crate::traits::{Probe, ProbeCache};

#[cfg(feature = "metrics")]
pub use crate::metrics::{
    MetricsExporter, MetricsSnapshotProvider, PrometheusTextExporter, TwoQueueMetricsSnapshot,
};
