//! Chromagram extraction
//!
//! Aggregates FFT magnitude spectra across overlapping Hann-windowed frames
//! into a 12-bin pitch-class energy profile.
//!
//! Algorithm:
//! 1. Iterate the buffer in frames of `chroma_frame_size` with 50% overlap
//! 2. Apply a Hann window and run a forward FFT per frame
//! 3. Map each bin below Nyquist inside the pitched band (20-5000 Hz) to a
//!    pitch class relative to A4 and accumulate its magnitude
//! 4. L1-normalize the 12-bin accumulator
//!
//! The FFT loop dominates analysis cost for long buffers, so this is where
//! cancellation is polled most frequently.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::cancel::CancelToken;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;

/// Frames between cancellation polls inside the FFT loop
const CANCEL_CHECK_INTERVAL: usize = 64;

/// Compute a normalized chromagram for the whole buffer
///
/// # Arguments
///
/// * `samples` - Audio samples (mono, normalized to [-1.0, 1.0])
/// * `sample_rate` - Sample rate in Hz
/// * `config` - Analysis configuration (`chroma_frame_size`, tuning
///   reference, pitched band)
///
/// # Returns
///
/// Twelve non-negative values indexed by pitch class (0 = C), summing to 1.
/// A silent or too-short buffer leaves every bin at zero; the key classifier
/// degrades gracefully to its deterministic tie-break in that case.
pub fn compute_chromagram(samples: &[f32], sample_rate: u32, config: &AnalysisConfig) -> [f32; 12] {
    // Without a token the accumulator always runs to completion
    accumulate_chroma(samples, sample_rate, config, None).unwrap_or([0.0; 12])
}

/// Compute a normalized chromagram, aborting early if `cancel` is tripped
///
/// Identical to [`compute_chromagram`] except that the frame loop polls the
/// token and returns [`AnalysisError::Cancelled`] instead of a partially
/// accumulated profile.
pub fn compute_chromagram_with_cancel(
    samples: &[f32],
    sample_rate: u32,
    config: &AnalysisConfig,
    cancel: &CancelToken,
) -> Result<[f32; 12], AnalysisError> {
    accumulate_chroma(samples, sample_rate, config, Some(cancel)).ok_or(AnalysisError::Cancelled)
}

/// Shared accumulator; `None` means the run was cancelled
fn accumulate_chroma(
    samples: &[f32],
    sample_rate: u32,
    config: &AnalysisConfig,
    cancel: Option<&CancelToken>,
) -> Option<[f32; 12]> {
    let frame_size = config.chroma_frame_size;
    let hop_size = frame_size / 2;
    let mut chromagram = [0.0f32; 12];

    if frame_size == 0 || hop_size == 0 {
        log::warn!(
            "Degenerate chroma frame size ({}), returning empty chromagram",
            frame_size
        );
        return Some(chromagram);
    }

    if samples.len() < frame_size || sample_rate == 0 {
        log::debug!(
            "Buffer shorter than one chroma frame ({} < {}), returning empty chromagram",
            samples.len(),
            frame_size
        );
        return Some(chromagram);
    }

    let num_frames = (samples.len() - frame_size) / hop_size + 1;

    log::debug!(
        "Extracting chroma: {} samples at {} Hz, {} frames of {}",
        samples.len(),
        sample_rate,
        num_frames,
        frame_size
    );

    // Plan once, reuse across every frame
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(frame_size);
    let mut buffer: Vec<Complex<f32>> = vec![Complex::new(0.0, 0.0); frame_size];

    // Hann window: w[i] = 0.5 * (1 - cos(2π·i / (n-1)))
    let window: Vec<f32> = (0..frame_size)
        .map(|i| {
            let t = 2.0 * std::f32::consts::PI * i as f32 / (frame_size - 1) as f32;
            0.5 * (1.0 - t.cos())
        })
        .collect();

    let bin_hz = sample_rate as f32 / frame_size as f32;

    for frame_idx in 0..num_frames {
        if let Some(token) = cancel {
            if frame_idx % CANCEL_CHECK_INTERVAL == 0 && token.is_cancelled() {
                log::debug!("Chroma extraction cancelled at frame {}", frame_idx);
                return None;
            }
        }

        let start = frame_idx * hop_size;
        for (i, slot) in buffer.iter_mut().enumerate() {
            *slot = Complex::new(samples[start + i] * window[i], 0.0);
        }

        fft.process(&mut buffer);

        // Only the first half of the spectrum is unique for a real signal
        for (bin, value) in buffer.iter().take(frame_size / 2).enumerate() {
            let freq = bin as f32 * bin_hz;
            if freq <= config.min_pitch_hz || freq >= config.max_pitch_hz {
                continue;
            }

            let magnitude = (value.re * value.re + value.im * value.im).sqrt();

            // Semitone distance from A4, shifted so 0 = C
            let semitones = (12.0 * (freq / config.tuning_a4_hz).log2()).round() as i32;
            let pitch_class = (semitones + 9).rem_euclid(12) as usize;
            chromagram[pitch_class] += magnitude;
        }
    }

    // L1 normalization; silence leaves the bins at zero
    let total: f32 = chromagram.iter().sum();
    if total > 0.0 {
        for value in chromagram.iter_mut() {
            *value /= total;
        }
    }

    Some(chromagram)
}
