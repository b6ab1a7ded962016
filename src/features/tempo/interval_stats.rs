//! Inter-onset-interval tempo estimation
//!
//! Each consecutive onset pair yields one interval in seconds and therefore
//! one raw BPM estimate (`60 / interval`). The reported tempo is the median
//! of the estimates inside the plausible song range; the confidence score
//! reflects how tightly the raw estimates cluster.

use super::TempoEstimate;
use crate::config::AnalysisConfig;

/// Estimate tempo from onset positions
///
/// # Arguments
///
/// * `onsets` - Strictly increasing energy-envelope indices from
///   [`detect_onsets`](crate::features::onset::detect_onsets)
/// * `sample_rate` - Sample rate in Hz
/// * `config` - Analysis configuration (`hop_size`, BPM range, fallbacks)
///
/// # Returns
///
/// BPM and confidence. With fewer than two onsets there are no intervals and
/// the configured fallback (default `120.0` at confidence `0.3`) is returned;
/// that is a deliberate "no signal" default, not an error. Raw estimates
/// outside `[min_bpm, max_bpm]` are discarded unless doing so would empty the
/// set, in which case the unfiltered mean is used instead of the median.
/// Confidence is `1 - stddev/bpm` over the unfiltered estimates, clamped to
/// `[0, 1]`.
pub fn estimate_tempo(onsets: &[usize], sample_rate: u32, config: &AnalysisConfig) -> TempoEstimate {
    let fallback = TempoEstimate {
        bpm: config.fallback_bpm,
        confidence: config.fallback_confidence,
    };

    if sample_rate == 0 {
        log::warn!("Sample rate is zero, returning fallback tempo");
        return fallback;
    }

    let seconds_per_frame = config.hop_size as f32 / sample_rate as f32;
    let intervals: Vec<f32> = onsets
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) as f32 * seconds_per_frame)
        .collect();

    if intervals.is_empty() {
        log::debug!(
            "No inter-onset intervals ({} onsets), falling back to {:.1} BPM",
            onsets.len(),
            config.fallback_bpm
        );
        return fallback;
    }

    let raw_estimates: Vec<f32> = intervals.iter().map(|&s| 60.0 / s).collect();

    let in_range: Vec<f32> = raw_estimates
        .iter()
        .copied()
        .filter(|&bpm| bpm >= config.min_bpm && bpm <= config.max_bpm)
        .collect();

    let bpm = if in_range.is_empty() {
        // Nothing in the typical song range; the unfiltered mean is the best
        // remaining summary.
        raw_estimates.iter().sum::<f32>() / raw_estimates.len() as f32
    } else {
        median(&in_range)
    };

    // Spread of the unfiltered estimates drives the confidence: consistent
    // intervals push it towards 1.0, erratic ones towards 0.0.
    let mean = raw_estimates.iter().sum::<f32>() / raw_estimates.len() as f32;
    let variance = raw_estimates
        .iter()
        .map(|&b| (b - mean) * (b - mean))
        .sum::<f32>()
        / raw_estimates.len() as f32;
    let stddev = variance.sqrt();
    let confidence = (1.0 - stddev / bpm).clamp(0.0, 1.0);

    log::debug!(
        "Tempo from {} intervals: {:.2} BPM (stddev {:.2}, confidence {:.2})",
        intervals.len(),
        bpm,
        stddev,
        confidence
    );

    TempoEstimate { bpm, confidence }
}

/// Median of a non-empty slice
fn median(values: &[f32]) -> f32 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) * 0.5
    } else {
        sorted[mid]
    }
}
