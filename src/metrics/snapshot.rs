use crate::metrics::metrics_impl::TwoQueueMetrics;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TwoQueueMetricsSnapshot {
    pub lookup_calls: u64,
    pub lookup_hits: u64,
    pub lookup_misses: u64,

    pub put_calls: u64,
    pub put_new: u64,
    pub put_duplicates: u64,

    pub fetch_hits: u64,
    pub fetch_misses: u64,

    pub promotions: u64,
    pub demotions: u64,
    pub forgets: u64,
    pub clears: u64,

    // gauges captured at snapshot time
    pub admission_len: usize,
    pub protected_len: usize,
    pub capacity: usize,
}

impl TwoQueueMetricsSnapshot {
    /// Copies the counters and attaches the current queue gauges.
    pub fn from_metrics(
        metrics: &TwoQueueMetrics,
        admission_len: usize,
        protected_len: usize,
        capacity: usize,
    ) -> Self {
        Self {
            lookup_calls: metrics.lookup_calls,
            lookup_hits: metrics.lookup_hits,
            lookup_misses: metrics.lookup_misses,
            put_calls: metrics.put_calls,
            put_new: metrics.put_new,
            put_duplicates: metrics.put_duplicates,
            fetch_hits: metrics.fetch_hits.get(),
            fetch_misses: metrics.fetch_misses.get(),
            promotions: metrics.promotions,
            demotions: metrics.demotions,
            forgets: metrics.forgets,
            clears: metrics.clears,
            admission_len,
            protected_len,
            capacity,
        }
    }

    /// Total resident entries at snapshot time.
    pub fn resident(&self) -> usize {
        self.admission_len + self.protected_len
    }

    pub fn hit_ratio(&self) -> f64 {
        if self.lookup_calls == 0 {
            0.0
        } else {
            self.lookup_hits as f64 / self.lookup_calls as f64
        }
    }
}
