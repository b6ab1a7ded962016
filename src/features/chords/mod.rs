//! Diatonic chord suggestion
//!
//! Maps a (key, scale) pair to a fixed, ordered chord palette. Pure lookup;
//! no randomness and no audio involved.

use crate::analysis::result::{Chord, ChordQuality, MusicalKey, Scale};

/// Scale-degree offsets and qualities for a major key: I, IV, V, vi, ii, iii
const MAJOR_PALETTE: [(u8, ChordQuality); 6] = [
    (0, ChordQuality::Major),
    (5, ChordQuality::Major),
    (7, ChordQuality::Major),
    (9, ChordQuality::Minor),
    (2, ChordQuality::Minor),
    (4, ChordQuality::Minor),
];

/// Scale-degree offsets and qualities for a minor key: i, iv, V, VI, III, VII
const MINOR_PALETTE: [(u8, ChordQuality); 6] = [
    (0, ChordQuality::Minor),
    (5, ChordQuality::Minor),
    (7, ChordQuality::Major),
    (8, ChordQuality::Major),
    (3, ChordQuality::Major),
    (10, ChordQuality::Major),
];

/// Suggest the diatonic chord palette for a key
///
/// Returns exactly six chords in a fixed role order, or an empty vector when
/// the scale is [`Scale::Unknown`]. The order is significant: callers show a
/// "top" subset by taking a prefix.
///
/// # Example
///
/// ```
/// use lyrebird_dsp::{suggest_chords, MusicalKey, Scale};
///
/// let chords = suggest_chords(&MusicalKey::new(0), Scale::Major);
/// let names: Vec<String> = chords.iter().map(|c| c.name()).collect();
/// assert_eq!(names, ["C", "F", "G", "Am", "Dm", "Em"]);
/// ```
pub fn suggest_chords(key: &MusicalKey, scale: Scale) -> Vec<Chord> {
    let palette = match scale {
        Scale::Major => &MAJOR_PALETTE,
        Scale::Minor => &MINOR_PALETTE,
        Scale::Unknown => return Vec::new(),
    };

    palette
        .iter()
        .map(|&(offset, quality)| Chord::new((key.pitch_class + offset) % 12, quality))
        .collect()
}
