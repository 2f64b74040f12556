//! Agent counters

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics handle for recording loop activity
#[derive(Debug, Default)]
pub struct Metrics {
    cycles: AtomicU64,
    fetch_failures: AtomicU64,
    probes_up: AtomicU64,
    probes_down: AtomicU64,
    reports_failed: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cycle(&self) {
        self.cycles.fetch_add(1, Ordering::Relaxed);
    }

    pub fn fetch_failed(&self) {
        self.fetch_failures.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "fetch_failures", "Metric incremented");
    }

    pub fn probe_up(&self) {
        self.probes_up.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "probes_up", "Metric incremented");
    }

    pub fn probe_down(&self) {
        self.probes_down.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "probes_down", "Metric incremented");
    }

    pub fn report_failed(&self) {
        self.reports_failed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "reports_failed", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            cycles: self.cycles.load(Ordering::Relaxed),
            fetch_failures: self.fetch_failures.load(Ordering::Relaxed),
            probes_up: self.probes_up.load(Ordering::Relaxed),
            probes_down: self.probes_down.load(Ordering::Relaxed),
            reports_failed: self.reports_failed.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub cycles: u64,
    pub fetch_failures: u64,
    pub probes_up: u64,
    pub probes_down: u64,
    pub reports_failed: u64,
}
