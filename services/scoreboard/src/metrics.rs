//! Operation counters for a scoreboard
//!
//! Counters only ever grow. Rejected calls are counted separately from
//! successful ones, so `matches_started` always equals the number of ids
//! this board has handed out.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Live counters, updated without taking the board lock.
#[derive(Debug, Default)]
pub struct BoardMetrics {
    matches_started: AtomicU64,
    scores_updated: AtomicU64,
    matches_terminated: AtomicU64,
    summaries_rendered: AtomicU64,
    rejected_operations: AtomicU64,
}

/// Plain copy of the counters at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub matches_started: u64,
    pub scores_updated: u64,
    pub matches_terminated: u64,
    pub summaries_rendered: u64,
    pub rejected_operations: u64,
}

impl BoardMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_start(&self) {
        self.matches_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_update(&self) {
        self.scores_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_termination(&self) {
        self.matches_terminated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_summary(&self) {
        self.summaries_rendered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejection(&self) {
        self.rejected_operations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            matches_started: self.matches_started.load(Ordering::Relaxed),
            scores_updated: self.scores_updated.load(Ordering::Relaxed),
            matches_terminated: self.matches_terminated.load(Ordering::Relaxed),
            summaries_rendered: self.summaries_rendered.load(Ordering::Relaxed),
            rejected_operations: self.rejected_operations.load(Ordering::Relaxed),
        }
    }
}

impl MetricsSnapshot {
    /// Matches started and not yet terminated.
    pub fn live_matches(&self) -> u64 {
        self.matches_started.saturating_sub(self.matches_terminated)
    }
}
