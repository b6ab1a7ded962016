//! Chromagram extraction modules
//!
//! Windows the signal into overlapping spectral frames and folds their
//! magnitude spectra into a 12-bin pitch-class energy profile.

pub mod extractor;

pub use extractor::{compute_chromagram, compute_chromagram_with_cancel};
