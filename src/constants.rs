//! Tuning constants shared across the engine.

/// Maximum files read and analyzed per detected language in one run.
pub const DEFAULT_SAMPLE_SIZE: usize = 50;

/// Maximum project modules admitted into the dependency graph.
pub const DEFAULT_MAX_GRAPH_MODULES: usize = 200;

/// Maximum file size read during extraction (1MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

/// A pattern scorer must exceed this confidence to emit a candidate.
pub const REPORT_THRESHOLD: u8 = 60;

/// Confidence boost applied when independent detectors agree on a pattern.
pub const RECONCILE_BOOST: u8 = 10;

/// Minimum share a convention must cover to count as dominant.
pub const DOMINANT_SHARE_MIN: f64 = 0.6;

/// Minimum fraction of edges that must conform to an inferred layering for
/// the layering to be kept.
pub const LAYER_CONFORMANCE_MIN: f64 = 0.8;
