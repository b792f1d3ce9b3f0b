use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::state::SharedState;

pub const REPORT_INTERVAL: std::time::Duration = std::time::Duration::from_secs(3600);

/// In-memory run counters, reset on restart. Terminal-state totals remain
/// recomputable from the queue table.
#[derive(Debug, Default)]
pub struct Stats {
    processed: AtomicU64,
    succeeded: AtomicU64,
    failed: AtomicU64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_processed(&self) {
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_success(&self) {
        self.succeeded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            processed: self.processed.load(Ordering::Relaxed),
            succeeded: self.succeeded.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }

    pub fn report(&self) {
        let s = self.snapshot();
        tracing::info!(
            processed = s.processed,
            succeeded = s.succeeded,
            failed = s.failed,
            "scheduler statistics ({:.1}% success)",
            s.success_rate() * 100.0
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub processed: u64,
    pub succeeded: u64,
    pub failed: u64,
}

impl StatsSnapshot {
    pub fn success_rate(&self) -> f64 {
        if self.processed == 0 {
            0.0
        } else {
            self.succeeded as f64 / self.processed as f64
        }
    }
}

/// Emits the summary on a fixed cadence until shutdown. The final summary
/// is emitted by main after the dispatcher drains.
pub async fn run_reporter(state: SharedState, mut shutdown: watch::Receiver<bool>) {
    loop {
        tokio::select! {
            _ = tokio::time::sleep(REPORT_INTERVAL) => state.stats.report(),
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let stats = Stats::new();
        stats.record_processed();
        stats.record_processed();
        stats.record_success();
        stats.record_failure();

        let s = stats.snapshot();
        assert_eq!(s.processed, 2);
        assert_eq!(s.succeeded, 1);
        assert_eq!(s.failed, 1);
        assert!((s.success_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn success_rate_is_zero_before_any_work() {
        let s = Stats::new().snapshot();
        assert_eq!(s.success_rate(), 0.0);
    }
}
