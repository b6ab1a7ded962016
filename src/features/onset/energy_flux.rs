//! Energy flux onset detection
//!
//! Detects onsets by finding peaks in the frame-by-frame energy derivative.
//!
//! Algorithm:
//! 1. Divide audio into overlapping windows (window_size, hop_size)
//! 2. Compute RMS energy per window
//! 3. Compute energy derivative (flux): `flux[n] = max(0, E[n] - E[n-1])`,
//!    with `flux[0] = 0` so the flux sequence lines up with the envelope
//! 4. Keep strict local maxima above an adaptive threshold derived from the
//!    mean flux
//!
//! # Reference
//!
//! Bello, J. P., Daudet, L., Abdallah, S., Duxbury, C., Davies, M., &
//! Sandler, M. B. (2005). A Tutorial on Onset Detection in Music Signals.
//! *IEEE Transactions on Speech and Audio Processing*, 13(5), 1035-1047.

use crate::config::AnalysisConfig;

/// Detect onsets using the energy flux method
///
/// A position `i` is an onset iff its flux exceeds the adaptive threshold
/// (`mean(flux) * flux_threshold_ratio`) and is a strict local maximum:
/// `flux[i] > flux[i-1]` and `flux[i] > flux[i+1]`. Pure function of the
/// buffer; no side effects.
///
/// # Arguments
///
/// * `samples` - Audio samples (mono, normalized to [-1.0, 1.0])
/// * `config` - Analysis configuration (`window_size`, `hop_size`,
///   `flux_threshold_ratio`)
///
/// # Returns
///
/// Strictly increasing indices into the energy envelope. Multiply by
/// `config.hop_size` to convert an index to a sample position. Degenerate
/// inputs (empty or too-short buffers, silence) yield an empty list rather
/// than an error; the tempo estimator absorbs that case with its fallback.
pub fn detect_onsets(samples: &[f32], config: &AnalysisConfig) -> Vec<usize> {
    let window_size = config.window_size;
    let hop_size = config.hop_size;

    if window_size == 0 || hop_size == 0 {
        log::warn!(
            "Degenerate onset windowing (window={}, hop={}), returning no onsets",
            window_size,
            hop_size
        );
        return Vec::new();
    }

    if samples.len() < window_size {
        log::debug!(
            "Buffer shorter than one window ({} < {}), returning no onsets",
            samples.len(),
            window_size
        );
        return Vec::new();
    }

    let num_windows = (samples.len() - window_size) / hop_size + 1;

    // The peak scan needs an interior position, so anything under three
    // windows cannot produce an onset.
    if num_windows < 3 {
        return Vec::new();
    }

    // Step 1: RMS energy per window
    let mut energy = Vec::with_capacity(num_windows);
    for i in 0..num_windows {
        let start = i * hop_size;
        let window = &samples[start..start + window_size];
        let sum_sq: f32 = window.iter().map(|&x| x * x).sum();
        energy.push((sum_sq / window_size as f32).sqrt());
    }

    // Step 2: positive energy derivative, aligned with the envelope
    let mut flux = Vec::with_capacity(num_windows);
    flux.push(0.0f32);
    for i in 1..num_windows {
        flux.push((energy[i] - energy[i - 1]).max(0.0));
    }

    // Step 3: adaptive threshold from the mean flux
    let mean_flux = flux.iter().sum::<f32>() / flux.len() as f32;
    let threshold = mean_flux * config.flux_threshold_ratio;

    log::debug!(
        "Energy flux over {} windows: mean={:.6}, threshold={:.6}",
        num_windows,
        mean_flux,
        threshold
    );

    // Step 4: strict local maxima above threshold
    let mut onsets = Vec::new();
    for i in 1..flux.len() - 1 {
        if flux[i] > threshold && flux[i] > flux[i - 1] && flux[i] > flux[i + 1] {
            onsets.push(i);
        }
    }

    log::debug!("Detected {} onsets", onsets.len());

    onsets
}
