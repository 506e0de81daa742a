use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::domain::Outcome;

/// Evaluation counters, safe to share across threads.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Documents evaluated against a rule set
    pub documents_total: AtomicU64,

    /// Inputs that could not be parsed as JSON
    pub documents_invalid: AtomicU64,

    /// Rule evaluation counts
    pub rules_evaluated_total: AtomicU64,
    pub rules_matched_total: AtomicU64,

    /// Per-document evaluation latency buckets
    pub latency_under_10us: AtomicU64,
    pub latency_10_100us: AtomicU64,
    pub latency_100us_1ms: AtomicU64,
    pub latency_over_1ms: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        MetricsRegistry::default()
    }

    /// Record the outcome of evaluating one document.
    pub fn record_outcome(&self, outcome: &Outcome) {
        self.documents_total.fetch_add(1, Ordering::Relaxed);
        self.rules_evaluated_total
            .fetch_add(outcome.len() as u64, Ordering::Relaxed);
        self.rules_matched_total
            .fetch_add(outcome.matched.len() as u64, Ordering::Relaxed);
    }

    /// Record an input that failed to parse.
    pub fn record_invalid_document(&self) {
        self.documents_invalid.fetch_add(1, Ordering::Relaxed);
    }

    /// Record evaluation latency.
    pub fn record_latency(&self, start: Instant) {
        let micros = start.elapsed().as_micros() as u64;

        let bucket = if micros < 10 {
            &self.latency_under_10us
        } else if micros < 100 {
            &self.latency_10_100us
        } else if micros < 1000 {
            &self.latency_100us_1ms
        } else {
            &self.latency_over_1ms
        };
        bucket.fetch_add(1, Ordering::Relaxed);
    }

    /// Export metrics in Prometheus format.
    pub fn to_prometheus(&self) -> String {
        format!(
            r#"# HELP valmatch_documents_total Documents evaluated
# TYPE valmatch_documents_total counter
valmatch_documents_total {}

# HELP valmatch_documents_invalid_total Inputs rejected as malformed JSON
# TYPE valmatch_documents_invalid_total counter
valmatch_documents_invalid_total {}

# HELP valmatch_rules_evaluated_total Total rule evaluations
# TYPE valmatch_rules_evaluated_total counter
valmatch_rules_evaluated_total {}

# HELP valmatch_rules_matched_total Rule evaluations that matched
# TYPE valmatch_rules_matched_total counter
valmatch_rules_matched_total {}

# HELP valmatch_evaluation_latency_bucket Per-document evaluation latency
# TYPE valmatch_evaluation_latency_bucket counter
valmatch_evaluation_latency_bucket{{le="0.00001"}} {}
valmatch_evaluation_latency_bucket{{le="0.0001"}} {}
valmatch_evaluation_latency_bucket{{le="0.001"}} {}
valmatch_evaluation_latency_bucket{{le="+Inf"}} {}
"#,
            self.documents_total.load(Ordering::Relaxed),
            self.documents_invalid.load(Ordering::Relaxed),
            self.rules_evaluated_total.load(Ordering::Relaxed),
            self.rules_matched_total.load(Ordering::Relaxed),
            self.latency_under_10us.load(Ordering::Relaxed),
            self.latency_10_100us.load(Ordering::Relaxed),
            self.latency_100us_1ms.load(Ordering::Relaxed),
            self.latency_over_1ms.load(Ordering::Relaxed),
        )
    }
}

/// Records evaluation latency when dropped.
pub struct TimingGuard<'a> {
    registry: &'a MetricsRegistry,
    start: Instant,
}

impl<'a> TimingGuard<'a> {
    pub fn new(registry: &'a MetricsRegistry) -> Self {
        TimingGuard {
            registry,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for TimingGuard<'a> {
    fn drop(&mut self) {
        self.registry.record_latency(self.start);
    }
}
