//! Key classification modules
//!
//! Correlates the chromagram against reference major/minor key profiles and
//! selects the best-fitting key and scale.

pub mod classifier;
pub mod profiles;

pub use classifier::{classify_key, KeyClassification};
