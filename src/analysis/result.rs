//! Analysis result types

use serde::{Deserialize, Serialize};

const NOTE_NAMES_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const NOTE_NAMES_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Pitch classes conventionally spelled with flats (Db, Eb, Gb, Ab, Bb)
const FLAT_PITCH_CLASSES: [u8; 5] = [1, 3, 6, 8, 10];

/// Scale quality of a detected key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scale {
    /// Major (Ionian) scale
    Major,
    /// Natural minor (Aeolian) scale
    Minor,
    /// Scale could not be determined; no chord palette is available
    Unknown,
}

/// Detected tonal center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MusicalKey {
    /// Pitch class of the tonic (0 = C, 1 = C#/Db, ..., 11 = B)
    pub pitch_class: u8,

    /// True when the conventional spelling of the tonic uses a flat
    pub prefer_flat: bool,
}

impl MusicalKey {
    /// Build a key for `pitch_class`, deriving the conventional spelling
    ///
    /// # Example
    ///
    /// ```
    /// use lyrebird_dsp::MusicalKey;
    ///
    /// assert_eq!(MusicalKey::new(0).name(), "C");
    /// assert_eq!(MusicalKey::new(3).name(), "Eb");
    /// assert_eq!(MusicalKey::new(6).name(), "Gb");
    /// ```
    pub fn new(pitch_class: u8) -> Self {
        let pc = pitch_class % 12;
        Self {
            pitch_class: pc,
            prefer_flat: FLAT_PITCH_CLASSES.contains(&pc),
        }
    }

    /// Note name of the tonic ("C", "Eb", "F#", ...)
    pub fn name(&self) -> &'static str {
        let idx = self.pitch_class as usize % 12;
        if self.prefer_flat {
            NOTE_NAMES_FLAT[idx]
        } else {
            NOTE_NAMES_SHARP[idx]
        }
    }
}

/// Chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    /// Major triad
    Major,
    /// Minor triad
    Minor,
    /// Diminished triad
    Diminished,
    /// Augmented triad
    Augmented,
    /// Dominant seventh
    Dominant7,
    /// Major seventh
    Major7,
    /// Minor seventh
    Minor7,
}

/// A chord drawn from the diatonic palette of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chord {
    /// Pitch class of the chord root (0 = C, ..., 11 = B)
    pub root: u8,

    /// Chord quality
    pub quality: ChordQuality,
}

impl Chord {
    /// Build a chord, wrapping the root into pitch-class range
    pub fn new(root: u8, quality: ChordQuality) -> Self {
        Self {
            root: root % 12,
            quality,
        }
    }

    /// Conventional chord symbol ("C", "Am", "Bdim", "G7", "Cmaj7")
    ///
    /// Root spelling follows the same flat convention as key names.
    pub fn name(&self) -> String {
        let idx = self.root as usize % 12;
        let root_name = if FLAT_PITCH_CLASSES.contains(&self.root) {
            NOTE_NAMES_FLAT[idx]
        } else {
            NOTE_NAMES_SHARP[idx]
        };
        let suffix = match self.quality {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Major7 => "maj7",
            ChordQuality::Minor7 => "m7",
        };
        format!("{}{}", root_name, suffix)
    }
}

/// Complete analysis result
///
/// Assembled once per call after both the tempo path and the key path have
/// finished; never partially populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Tempo estimate in beats per minute
    pub bpm: f32,

    /// Tempo confidence (0.0-1.0)
    ///
    /// Driven by inter-onset interval consistency: regular onsets score near
    /// 1.0, erratic onsets approach 0.0. Callers should derive "low
    /// confidence" messaging from this field rather than from errors.
    pub confidence: f32,

    /// Detected key
    pub key: MusicalKey,

    /// Detected scale
    pub scale: Scale,

    /// Diatonic chord palette for the key
    ///
    /// Either empty (unknown scale) or exactly six chords in a fixed role
    /// order: I, IV, V, vi, ii, iii for major keys and i, iv, V, VI, III,
    /// VII for minor keys. The order is significant; callers display a "top"
    /// subset by taking a prefix.
    pub chords: Vec<Chord>,

    /// Analysis metadata
    pub metadata: AnalysisMetadata,
}

/// Analysis metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Audio duration in seconds
    pub duration_seconds: f32,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,
}
