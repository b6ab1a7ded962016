//! Cooperative cancellation for long-running analysis calls
//!
//! A full analysis is CPU-bound and can take on the order of seconds for
//! multi-minute audio, so the caller typically runs it on a background
//! thread. [`CancelToken`] lets the caller abandon an in-flight call: the
//! engine polls the token at stage boundaries and inside the FFT frame loop,
//! discards all intermediate buffers, and returns
//! [`AnalysisError::Cancelled`](crate::error::AnalysisError::Cancelled)
//! instead of a partial result.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag used to abort an in-flight analysis
///
/// Cloning is cheap; all clones observe the same flag. Once cancelled, a
/// token stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; takes effect at the engine's next check point
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// True once [`cancel`](Self::cancel) has been called on any clone
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
