use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{TwoQueueMetricsReadRecorder, TwoQueueMetricsRecorder};

// ---------------------------------------------------------------------------
// TwoQueueMetrics
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct TwoQueueMetrics {
    pub lookup_calls: u64,
    pub lookup_hits: u64,
    pub lookup_misses: u64,
    pub put_calls: u64,
    pub put_new: u64,
    pub put_duplicates: u64,
    pub promotions: u64,
    pub demotions: u64,
    pub forgets: u64,
    pub clears: u64,
    pub fetch_hits: MetricsCell,
    pub fetch_misses: MetricsCell,
}

impl TwoQueueMetrics {
    /// Fraction of lookups that found the key, or `0.0` before any lookup.
    pub fn hit_ratio(&self) -> f64 {
        if self.lookup_calls == 0 {
            0.0
        } else {
            self.lookup_hits as f64 / self.lookup_calls as f64
        }
    }
}

impl TwoQueueMetricsRecorder for TwoQueueMetrics {
    fn record_lookup_hit(&mut self) {
        self.lookup_calls += 1;
        self.lookup_hits += 1;
    }
    fn record_lookup_miss(&mut self) {
        self.lookup_calls += 1;
        self.lookup_misses += 1;
    }
    fn record_put(&mut self) {
        self.put_calls += 1;
        self.put_new += 1;
    }
    fn record_duplicate_put(&mut self) {
        self.put_calls += 1;
        self.put_duplicates += 1;
    }
    fn record_promotion(&mut self) {
        self.promotions += 1;
    }
    fn record_demotion(&mut self) {
        self.demotions += 1;
    }
    fn record_forget(&mut self) {
        self.forgets += 1;
    }
    fn record_clear(&mut self) {
        self.clears += 1;
    }
}

impl TwoQueueMetricsReadRecorder for TwoQueueMetrics {
    fn record_fetch_hit(&self) {
        self.fetch_hits.incr();
    }
    fn record_fetch_miss(&self) {
        self.fetch_misses.incr();
    }
}
