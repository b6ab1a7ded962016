//! Krumhansl-Schmuckler key profiles
//!
//! Empirical tonal-hierarchy weights from probe-tone listening studies;
//! index 0 is the tonic. Rotating a profile re-tonicizes it, giving the 24
//! reference vectors the classifier correlates against.
//!
//! # Reference
//!
//! Krumhansl, C. L., & Kessler, E. J. (1982). Tracing the Dynamic Changes in
//! Perceived Tonal Organization in a Spatial Representation of Musical Keys.
//! *Psychological Review*, 89(4), 334-368.

/// Major key profile (C major when unrotated)
pub const MAJOR_PROFILE: [f32; 12] = [
    6.35, 2.23, 3.48, 2.33, 4.38, 4.09, 2.52, 5.19, 2.39, 3.66, 2.29, 2.88,
];

/// Minor key profile (C minor when unrotated)
pub const MINOR_PROFILE: [f32; 12] = [
    6.33, 2.68, 3.52, 5.38, 2.60, 3.53, 2.54, 4.75, 3.98, 2.69, 3.34, 3.17,
];

/// Rotate `profile` right by `semitones`, making that index the tonic
pub fn rotate_profile(profile: &[f32; 12], semitones: usize) -> [f32; 12] {
    let mut rotated = [0.0f32; 12];
    for (i, &value) in profile.iter().enumerate() {
        rotated[(i + semitones) % 12] = value;
    }
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_by_zero_is_identity() {
        assert_eq!(rotate_profile(&MAJOR_PROFILE, 0), MAJOR_PROFILE);
    }

    #[test]
    fn test_rotation_wraps_after_full_circle() {
        assert_eq!(rotate_profile(&MAJOR_PROFILE, 12), MAJOR_PROFILE);
        assert_eq!(rotate_profile(&MINOR_PROFILE, 12), MINOR_PROFILE);
    }

    #[test]
    fn test_rotation_moves_tonic_weight() {
        for semitones in 0..12 {
            let rotated = rotate_profile(&MAJOR_PROFILE, semitones);
            assert_eq!(
                rotated[semitones], MAJOR_PROFILE[0],
                "Tonic weight should land on index {}",
                semitones
            );
        }
    }

    #[test]
    fn test_rotations_compose() {
        let once = rotate_profile(&MINOR_PROFILE, 7);
        let twice = rotate_profile(&once, 5);
        assert_eq!(twice, MINOR_PROFILE);
    }
}
