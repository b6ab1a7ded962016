//! Onset detection modules
//!
//! Converts raw samples into a coarse energy envelope and picks discrete
//! onset positions from the envelope's flux.

pub mod energy_flux;

pub use energy_flux::detect_onsets;
