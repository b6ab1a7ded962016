//! Configuration parameters for audio analysis

/// Analysis configuration parameters
///
/// The defaults match the constants the engine was tuned with; overriding
/// them is mainly useful for experimentation and tests.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Onset detection
    /// Window size for the energy envelope (default: 2048)
    pub window_size: usize,

    /// Hop size between energy windows (default: 512)
    pub hop_size: usize,

    /// Onset threshold as a fraction of the mean spectral flux (default: 0.3)
    pub flux_threshold_ratio: f32,

    // Tempo estimation
    /// Minimum BPM considered a plausible song tempo (default: 60.0)
    pub min_bpm: f32,

    /// Maximum BPM considered a plausible song tempo (default: 180.0)
    pub max_bpm: f32,

    /// BPM reported when no usable onset intervals exist (default: 120.0)
    ///
    /// This is a deliberate "no signal" default, not an error.
    pub fallback_bpm: f32,

    /// Confidence reported alongside the fallback BPM (default: 0.3)
    pub fallback_confidence: f32,

    // Chromagram
    /// FFT frame size for chroma extraction (default: 4096)
    ///
    /// Frames overlap by 50%, so the chroma hop is half this value.
    pub chroma_frame_size: usize,

    /// Tuning reference for A4 in Hz (default: 440.0)
    pub tuning_a4_hz: f32,

    /// Lower bound of the pitched band in Hz, exclusive (default: 20.0)
    ///
    /// Rejects sub-bass rumble below the audible pitched range.
    pub min_pitch_hz: f32,

    /// Upper bound of the pitched band in Hz, exclusive (default: 5000.0)
    pub max_pitch_hz: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_size: 2048,
            hop_size: 512,
            flux_threshold_ratio: 0.3,
            min_bpm: 60.0,
            max_bpm: 180.0,
            fallback_bpm: 120.0,
            fallback_confidence: 0.3,
            chroma_frame_size: 4096,
            tuning_a4_hz: 440.0,
            min_pitch_hz: 20.0,
            max_pitch_hz: 5000.0,
        }
    }
}
