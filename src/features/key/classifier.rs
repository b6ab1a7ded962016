//! Key classification
//!
//! Correlates a normalized chromagram against rotated major and minor
//! reference profiles and selects the best-fitting key and scale.
//!
//! All 24 candidates (12 rotations × 2 scales) are scored with the Pearson
//! correlation coefficient. Candidates are scanned majors-first in rotation
//! order with a strict comparison, so ties resolve to the earliest
//! candidate; that ordering is an implementation tie-break, not a musical
//! preference.

use super::profiles::{rotate_profile, MAJOR_PROFILE, MINOR_PROFILE};
use crate::analysis::result::{MusicalKey, Scale};

/// Outcome of key classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyClassification {
    /// Detected tonal center
    pub key: MusicalKey,

    /// Detected scale
    pub scale: Scale,

    /// Pearson correlation of the winning profile
    ///
    /// Near 1.0 for strongly tonal material; exactly 0.0 when the chromagram
    /// carries no usable signal (e.g. silence).
    pub correlation: f32,
}

/// Classify the key of a normalized chromagram
///
/// # Arguments
///
/// * `chromagram` - 12-bin pitch-class profile (0 = C), L1-normalized
///
/// # Returns
///
/// The winning key, scale, and its correlation. A degenerate chromagram
/// (all-zero or constant) correlates at 0.0 with every candidate and falls
/// through to the first candidate, C major, keeping the result
/// deterministic.
///
/// # Example
///
/// ```
/// use lyrebird_dsp::{classify_key, Scale};
///
/// let mut chromagram = [0.0f32; 12];
/// chromagram[0] = 0.4; // C
/// chromagram[4] = 0.3; // E
/// chromagram[7] = 0.3; // G
///
/// let classification = classify_key(&chromagram);
/// assert_eq!(classification.key.pitch_class, 0);
/// assert_eq!(classification.scale, Scale::Major);
/// ```
pub fn classify_key(chromagram: &[f32; 12]) -> KeyClassification {
    let mut best_pitch_class = 0usize;
    let mut best_scale = Scale::Major;
    let mut best_correlation = f32::NEG_INFINITY;

    // Majors first, rotation ascending, then minors; strict `>` keeps the
    // earliest candidate on ties.
    for rotation in 0..12 {
        let correlation = pearson(chromagram, &rotate_profile(&MAJOR_PROFILE, rotation));
        if correlation > best_correlation {
            best_correlation = correlation;
            best_pitch_class = rotation;
            best_scale = Scale::Major;
        }
    }

    for rotation in 0..12 {
        let correlation = pearson(chromagram, &rotate_profile(&MINOR_PROFILE, rotation));
        if correlation > best_correlation {
            best_correlation = correlation;
            best_pitch_class = rotation;
            best_scale = Scale::Minor;
        }
    }

    let key = MusicalKey::new(best_pitch_class as u8);

    log::debug!(
        "Classified key: {} {:?} (correlation {:.4})",
        key.name(),
        best_scale,
        best_correlation
    );

    KeyClassification {
        key,
        scale: best_scale,
        correlation: best_correlation,
    }
}

/// Pearson correlation between two 12-element vectors
///
/// Uses the sum form `(nΣxy - ΣxΣy) / sqrt((nΣx² - (Σx)²)(nΣy² - (Σy)²))`
/// and returns 0.0 when the denominator vanishes (either vector constant).
fn pearson(x: &[f32; 12], y: &[f32; 12]) -> f32 {
    let n = 12.0f32;
    let mut sum_x = 0.0f32;
    let mut sum_y = 0.0f32;
    let mut sum_xy = 0.0f32;
    let mut sum_xx = 0.0f32;
    let mut sum_yy = 0.0f32;

    for i in 0..12 {
        sum_x += x[i];
        sum_y += y[i];
        sum_xy += x[i] * y[i];
        sum_xx += x[i] * x[i];
        sum_yy += y[i] * y[i];
    }

    let var_x = n * sum_xx - sum_x * sum_x;
    let var_y = n * sum_yy - sum_y * sum_y;
    let denom_sq = var_x * var_y;

    if denom_sq <= 0.0 {
        return 0.0;
    }

    (n * sum_xy - sum_x * sum_y) / denom_sq.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_major_profile_is_c_major() {
        let classification = classify_key(&MAJOR_PROFILE);

        assert_eq!(classification.key.pitch_class, 0);
        assert_eq!(classification.scale, Scale::Major);
        assert!(
            classification.correlation > 0.999,
            "Self-correlation should be ~1.0, got {:.4}",
            classification.correlation
        );
    }

    #[test]
    fn test_rotated_major_profile_finds_tonic() {
        for tonic in 0..12 {
            let chromagram = rotate_profile(&MAJOR_PROFILE, tonic);
            let classification = classify_key(&chromagram);

            assert_eq!(classification.key.pitch_class, tonic as u8);
            assert_eq!(classification.scale, Scale::Major);
        }
    }

    #[test]
    fn test_rotated_minor_profile_finds_tonic() {
        for tonic in 0..12 {
            let chromagram = rotate_profile(&MINOR_PROFILE, tonic);
            let classification = classify_key(&chromagram);

            assert_eq!(classification.key.pitch_class, tonic as u8);
            assert_eq!(classification.scale, Scale::Minor);
        }
    }

    #[test]
    fn test_zero_chromagram_breaks_tie_to_c_major() {
        let chromagram = [0.0f32; 12];
        let classification = classify_key(&chromagram);

        assert_eq!(classification.key.pitch_class, 0);
        assert_eq!(classification.scale, Scale::Major);
        assert_eq!(classification.correlation, 0.0);
    }

    #[test]
    fn test_constant_chromagram_breaks_tie_to_c_major() {
        // A flat profile has zero variance, so every correlation is 0.0
        let chromagram = [1.0 / 12.0; 12];
        let classification = classify_key(&chromagram);

        assert_eq!(classification.key.pitch_class, 0);
        assert_eq!(classification.scale, Scale::Major);
        assert_eq!(classification.correlation, 0.0);
    }

    #[test]
    fn test_correlation_scale_invariant() {
        // Pearson correlation ignores positive scaling, so an unnormalized
        // chromagram classifies identically
        let mut scaled = MINOR_PROFILE;
        for value in scaled.iter_mut() {
            *value *= 37.5;
        }

        let classification = classify_key(&scaled);
        assert_eq!(classification.key.pitch_class, 0);
        assert_eq!(classification.scale, Scale::Minor);
        assert!(classification.correlation > 0.999);
    }

    #[test]
    fn test_pearson_perfect_and_inverse() {
        let up: [f32; 12] = core::array::from_fn(|i| i as f32);
        let down: [f32; 12] = core::array::from_fn(|i| 11.0 - i as f32);

        assert!((pearson(&up, &up) - 1.0).abs() < 1e-5);
        assert!((pearson(&up, &down) + 1.0).abs() < 1e-5);
    }
}
