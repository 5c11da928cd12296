use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::TwoQueueMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for cache metrics snapshots.
///
/// Writes the Prometheus text exposition format, so the output can be served
/// on a scrape endpoint or forwarded to a collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // write errors are dropped
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", suffix, value);
    }

    fn write_gauge(&self, suffix: &str, value: u64) {
        self.write_metric("gauge", suffix, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<TwoQueueMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &TwoQueueMetricsSnapshot) {
        self.write_counter("lookup_calls_total", snapshot.lookup_calls);
        self.write_counter("lookup_hits_total", snapshot.lookup_hits);
        self.write_counter("lookup_misses_total", snapshot.lookup_misses);
        self.write_counter("put_calls_total", snapshot.put_calls);
        self.write_counter("put_new_total", snapshot.put_new);
        self.write_counter("put_duplicates_total", snapshot.put_duplicates);
        self.write_counter("fetch_hits_total", snapshot.fetch_hits);
        self.write_counter("fetch_misses_total", snapshot.fetch_misses);
        self.write_counter("promotions_total", snapshot.promotions);
        self.write_counter("demotions_total", snapshot.demotions);
        self.write_counter("forgets_total", snapshot.forgets);
        self.write_counter("clears_total", snapshot.clears);
        self.write_gauge("admission_len", snapshot.admission_len as u64);
        self.write_gauge("protected_len", snapshot.protected_len as u64);
        self.write_gauge("capacity", snapshot.capacity as u64);
    }
}
