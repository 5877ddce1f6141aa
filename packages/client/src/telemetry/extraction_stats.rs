//! Extraction statistics

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;

/// Counters for a shared extractor
#[derive(Debug)]
pub struct ExtractionStats {
    /// Number of extractions attempted
    pub extractions: AtomicU64,
    /// Number of extractions that found a value (null included)
    pub hits: AtomicU64,
    /// Number of extractions that resolved to absent
    pub absences: AtomicU64,
    /// Number of paths that failed to parse
    pub parse_failures: AtomicU64,
    /// Number of paths rejected by a configured limit
    pub limit_rejections: AtomicU64,
    /// Collection start time
    pub start_time: Instant,
}

/// Point-in-time copy of [`ExtractionStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub extractions: u64,
    pub hits: u64,
    pub absences: u64,
    pub parse_failures: u64,
    pub limit_rejections: u64,
}

impl Default for ExtractionStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStats {
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractions: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            absences: AtomicU64::new(0),
            parse_failures: AtomicU64::new(0),
            limit_rejections: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_hit(&self) {
        self.extractions.fetch_add(1, Ordering::Relaxed);
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_absence(&self) {
        self.extractions.fetch_add(1, Ordering::Relaxed);
        self.absences.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a parse failure; also counted as an absent extraction
    pub fn record_parse_failure(&self) {
        self.parse_failures.fetch_add(1, Ordering::Relaxed);
        self.record_absence();
    }

    /// Record a limit rejection; also counted as an absent extraction
    pub fn record_limit_rejection(&self) {
        self.limit_rejections.fetch_add(1, Ordering::Relaxed);
        self.record_absence();
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            extractions: self.extractions.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            absences: self.absences.load(Ordering::Relaxed),
            parse_failures: self.parse_failures.load(Ordering::Relaxed),
            limit_rejections: self.limit_rejections.load(Ordering::Relaxed),
        }
    }

    /// Fraction of extractions that found a value, 0.0 before the first one
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let snapshot = self.snapshot();
        if snapshot.extractions == 0 {
            0.0
        } else {
            snapshot.hits as f64 / snapshot.extractions as f64
        }
    }

    /// Time since collection started
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.start_time.elapsed()
    }
}
