//! # Lyrebird DSP
//!
//! Audio analysis engine for the Lyrebird songwriting tool: estimates tempo
//! (BPM), classifies key and scale, and suggests a diatonic chord palette,
//! all from a raw PCM buffer.
//!
//! ## Features
//!
//! - **Tempo**: energy-flux onset detection with inter-onset-interval statistics
//! - **Key**: chromagram extraction with Krumhansl-Schmuckler profile matching
//! - **Chords**: deterministic diatonic palette for the detected key
//!
//! ## Quick Start
//!
//! ```no_run
//! use lyrebird_dsp::{analyze_audio, AnalysisConfig};
//!
//! // Mono samples, normalized to [-1.0, 1.0]
//! let samples = vec![0.0f32; 44100 * 30];
//! let result = analyze_audio(&samples, 44100, AnalysisConfig::default())?;
//!
//! println!("BPM: {:.1} (confidence: {:.2})", result.bpm, result.confidence);
//! println!("Key: {} {:?}", result.key.name(), result.scale);
//! for chord in &result.chords {
//!     println!("  {}", chord.name());
//! }
//! # Ok::<(), lyrebird_dsp::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! Two independent paths consume the same buffer and merge into one result:
//!
//! ```text
//! samples ─┬─ OnsetDetector ── TempoEstimator ──┐
//!          │                                    ├── AnalysisResult
//!          └─ ChromagramBuilder ── KeyClassifier ── ChordAdvisor
//! ```
//!
//! Decoding files into PCM is deliberately outside this crate; the library
//! is sample-based and the demo binaries show one way to feed it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod cancel;
pub mod config;
pub mod error;
pub mod features;

// Re-export main types
pub use analysis::result::{
    AnalysisMetadata, AnalysisResult, Chord, ChordQuality, MusicalKey, Scale,
};
pub use cancel::CancelToken;
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use features::chords::suggest_chords;
pub use features::chroma::{compute_chromagram, compute_chromagram_with_cancel};
pub use features::key::{classify_key, KeyClassification};
pub use features::onset::detect_onsets;
pub use features::tempo::{estimate_tempo, TempoEstimate};

/// Main analysis function
///
/// Analyzes a fully decoded audio buffer and returns tempo, key, scale, and
/// a diatonic chord palette. One-shot and stateless: the same buffer always
/// produces the same result, and concurrent calls on different buffers need
/// no coordination.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz (typically 44100 or 48000)
/// * `config` - Analysis configuration parameters
///
/// # Returns
///
/// A complete [`AnalysisResult`]. Degenerate but valid buffers (silence, no
/// clear onsets) resolve to documented fallbacks (120 BPM at confidence
/// 0.3, C major from the classifier tie-break) rather than errors.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidAudioData`] when the buffer is empty or
/// the sample rate is zero.
///
/// # Example
///
/// ```no_run
/// use lyrebird_dsp::{analyze_audio, AnalysisConfig};
///
/// let samples = vec![0.0f32; 44100 * 30]; // 30 seconds of silence
/// let result = analyze_audio(&samples, 44100, AnalysisConfig::default())?;
/// # Ok::<(), lyrebird_dsp::AnalysisError>(())
/// ```
pub fn analyze_audio(
    samples: &[f32],
    sample_rate: u32,
    config: AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    let token = CancelToken::new();
    analyze_audio_with_cancel(samples, sample_rate, config, &token)
}

/// Cancellable variant of [`analyze_audio`]
///
/// Intended for background tasks: run the analysis on a worker thread, keep
/// a clone of the token, and call [`CancelToken::cancel`] to abandon the
/// work. The engine polls the token at stage boundaries and inside the FFT
/// frame loop; a cancelled call discards every intermediate buffer and
/// returns [`AnalysisError::Cancelled`], never a partial result.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidAudioData`] for an empty buffer or zero
/// sample rate, and [`AnalysisError::Cancelled`] when the token trips before
/// the result is assembled.
pub fn analyze_audio_with_cancel(
    samples: &[f32],
    sample_rate: u32,
    config: AnalysisConfig,
    cancel: &CancelToken,
) -> Result<AnalysisResult, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting audio analysis: {} samples at {} Hz",
        samples.len(),
        sample_rate
    );

    if samples.is_empty() {
        return Err(AnalysisError::InvalidAudioData(
            "Empty sample buffer".to_string(),
        ));
    }

    if sample_rate == 0 {
        return Err(AnalysisError::InvalidAudioData(
            "Sample rate is zero".to_string(),
        ));
    }

    if cancel.is_cancelled() {
        return Err(AnalysisError::Cancelled);
    }

    // The tempo path and the key path share the buffer but have no data
    // dependency on each other, so they run concurrently. Both must finish
    // before the result is assembled.
    let (tempo, chroma) = rayon::join(
        || {
            if cancel.is_cancelled() {
                return None;
            }
            let onsets = features::onset::detect_onsets(samples, &config);
            if cancel.is_cancelled() {
                return None;
            }
            Some(features::tempo::estimate_tempo(&onsets, sample_rate, &config))
        },
        || features::chroma::compute_chromagram_with_cancel(samples, sample_rate, &config, cancel),
    );

    let tempo = tempo.ok_or(AnalysisError::Cancelled)?;
    let chroma = chroma?;

    if cancel.is_cancelled() {
        return Err(AnalysisError::Cancelled);
    }

    let classification = features::key::classify_key(&chroma);
    let chords = features::chords::suggest_chords(&classification.key, classification.scale);

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    log::debug!(
        "Analysis complete: {:.1} BPM (confidence {:.2}), key {} {:?}, {:.2} ms",
        tempo.bpm,
        tempo.confidence,
        classification.key.name(),
        classification.scale,
        processing_time_ms
    );

    Ok(AnalysisResult {
        bpm: tempo.bpm,
        confidence: tempo.confidence,
        key: classification.key,
        scale: classification.scale,
        chords,
        metadata: AnalysisMetadata {
            duration_seconds: samples.len() as f32 / sample_rate as f32,
            sample_rate,
            processing_time_ms,
        },
    })
}
