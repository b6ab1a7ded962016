//! Tempo estimation modules
//!
//! Converts onset positions into inter-onset-interval statistics and
//! produces a BPM estimate with a confidence score.

pub mod interval_stats;

pub use interval_stats::estimate_tempo;

/// Tempo estimate with confidence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempoEstimate {
    /// BPM estimate
    pub bpm: f32,

    /// Confidence score (0.0-1.0); 1.0 means perfectly regular onsets
    pub confidence: f32,
}
