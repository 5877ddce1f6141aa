//! Extraction telemetry

mod extraction_stats;

pub use extraction_stats::{ExtractionStats, StatsSnapshot};
