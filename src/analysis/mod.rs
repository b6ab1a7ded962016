//! Analysis result aggregation modules
//!
//! Result and metadata types assembled from the feature extraction stages.

pub mod result;
