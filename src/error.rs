//! Error types for the audio analysis engine

use std::fmt;

/// Errors that can occur during audio analysis
///
/// Degenerate but readable inputs (silence, too-short buffers, no detected
/// onsets) are not errors; they resolve to documented fallback values so the
/// engine always returns a result for a valid, non-empty buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A sample buffer of the requested capacity or format could not be
    /// materialized by the decoding side
    BufferCreation(String),

    /// Decoded samples are absent, channel data is unreadable, or the buffer
    /// length is zero
    InvalidAudioData(String),

    /// Reserved for a caller-enforced upper time bound
    ///
    /// The engine never raises this itself; a caller-side watchdog may use it
    /// to report that an analysis task was abandoned.
    Timeout(String),

    /// Analysis was cancelled through a [`CancelToken`](crate::cancel::CancelToken)
    Cancelled,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::BufferCreation(msg) => write!(f, "Buffer creation failed: {}", msg),
            AnalysisError::InvalidAudioData(msg) => write!(f, "Invalid audio data: {}", msg),
            AnalysisError::Timeout(msg) => write!(f, "Analysis timed out: {}", msg),
            AnalysisError::Cancelled => write!(f, "Analysis cancelled"),
        }
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AnalysisError::InvalidAudioData("buffer length is zero".to_string());
        assert_eq!(err.to_string(), "Invalid audio data: buffer length is zero");

        let err = AnalysisError::Cancelled;
        assert_eq!(err.to_string(), "Analysis cancelled");
    }
}
