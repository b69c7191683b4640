//! # Tab Document Types
//!
//! This module defines the value types produced by the generator.
//!
//! ## Type Hierarchy
//! ```text
//! TabDocument
//!   ├── TabMeta (settings + string_count = 6)
//!   └── Vec<Measure>
//!         └── Vec<Note>
//!               ├── string: 1-6 (1 = high e, 6 = low E)
//!               ├── fret: 0-15 (0 = open string)
//!               ├── duration: Duration (whole .. sixteenth)
//!               └── technique: Technique (always None for now)
//! ```
//!
//! ## Key Concepts
//!
//! ### Durations
//! Durations are fractions of a 4/4 bar: whole = 1.0, half = 0.5, quarter = 0.25,
//! eighth = 0.125, sixteenth = 0.0625. Internally bars are counted in whole
//! sixteenths, which keeps bar-filling arithmetic exact.
//!
//! ### Immutability
//! A `Note` is `Copy` and never mutated once it is placed in a measure. Shrinking
//! an overflowing note builds a new one with [`Note::with_duration`].
//!
//! ## Related Modules
//! - `settings` - The configuration echoed into `TabMeta`
//! - `generator` - Produces these types
//! - `ascii`, `playback` - Read them without mutation

use crate::settings::Settings;
use serde::{Deserialize, Serialize};

/// Number of strings on the instrument. Fixed; only `string_range` varies.
pub const STRING_COUNT: u8 = 6;

/// Highest fret the generator will ever emit.
pub const MAX_FRET: u8 = 15;

/// Sixteenth notes in one 4/4 bar.
pub const SIXTEENTHS_PER_MEASURE: u32 = 16;

/// Note duration as a share of a 4/4 measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duration {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
}

impl Duration {
    /// Fraction of a measure (whole = 1.0).
    pub fn value(&self) -> f64 {
        match self {
            Duration::Whole => 1.0,
            Duration::Half => 0.5,
            Duration::Quarter => 0.25,
            Duration::Eighth => 0.125,
            Duration::Sixteenth => 0.0625,
        }
    }

    /// Length in sixteenth notes.
    pub fn sixteenths(&self) -> u32 {
        match self {
            Duration::Whole => 16,
            Duration::Half => 8,
            Duration::Quarter => 4,
            Duration::Eighth => 2,
            Duration::Sixteenth => 1,
        }
    }

    /// Length in quarter-note beats.
    pub fn beats(&self) -> f64 {
        self.value() * 4.0
    }

    /// Largest bucket used to close out a bar with `remaining` sixteenths left.
    ///
    /// Quarter if at least a quarter remains, else eighth if at least an eighth
    /// remains, else sixteenth. Half and whole are never used as fillers.
    pub fn largest_fitting(remaining: u32) -> Duration {
        if remaining >= Duration::Quarter.sixteenths() {
            Duration::Quarter
        } else if remaining >= Duration::Eighth.sixteenths() {
            Duration::Eighth
        } else {
            Duration::Sixteenth
        }
    }
}

/// Playing technique attached to a note
///
/// Reserved for future use; the generator always emits `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Technique {
    #[default]
    None,
    HammerOn,
    PullOff,
    Slide,
    Bend,
}

/// A single fretted (or open) note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub string: u8, // 1 = high e, 6 = low E
    pub fret: u8,   // 0 = open
    pub duration: Duration,
    pub technique: Technique,
}

impl Note {
    pub fn new(string: u8, fret: u8, duration: Duration) -> Self {
        Self {
            string,
            fret,
            duration,
            technique: Technique::None,
        }
    }

    /// Same note with a different duration.
    pub fn with_duration(self, duration: Duration) -> Self {
        Self { duration, ..self }
    }

    /// Same note on a different fret.
    pub fn with_fret(self, fret: u8) -> Self {
        Self { fret, ..self }
    }

    pub fn is_open(&self) -> bool {
        self.fret == 0
    }
}

/// One bar of 4/4, in playback order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Measure {
    pub notes: Vec<Note>,
}

impl Measure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of note durations as a fraction of a bar.
    pub fn total_duration(&self) -> f64 {
        self.notes.iter().map(|n| n.duration.value()).sum()
    }

    /// Sum of note durations in sixteenths.
    pub fn total_sixteenths(&self) -> u32 {
        self.notes.iter().map(|n| n.duration.sixteenths()).sum()
    }

    /// True once the bar holds at least a full 4/4 worth of notes.
    pub fn is_full(&self) -> bool {
        self.total_sixteenths() >= SIXTEENTHS_PER_MEASURE
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Document header: the generating settings plus the fixed string count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabMeta {
    #[serde(flatten)]
    pub settings: Settings,
    pub string_count: u8,
}

impl TabMeta {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            string_count: STRING_COUNT,
        }
    }
}

/// A complete generated tab
///
/// A plain value: created fresh on every generation call and never updated
/// in place. Regenerating replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabDocument {
    pub meta: TabMeta,
    pub measures: Vec<Measure>,
}

impl TabDocument {
    /// All notes in playback order, flattened across measure boundaries.
    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.measures.iter().flat_map(|m| m.notes.iter())
    }

    pub fn note_count(&self) -> usize {
        self.measures.iter().map(Measure::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_values_match_sixteenths() {
        for d in [
            Duration::Whole,
            Duration::Half,
            Duration::Quarter,
            Duration::Eighth,
            Duration::Sixteenth,
        ] {
            assert_eq!(d.value() * 16.0, d.sixteenths() as f64);
        }
    }

    #[test]
    fn test_largest_fitting() {
        assert_eq!(Duration::largest_fitting(12), Duration::Quarter);
        assert_eq!(Duration::largest_fitting(4), Duration::Quarter);
        assert_eq!(Duration::largest_fitting(3), Duration::Eighth);
        assert_eq!(Duration::largest_fitting(2), Duration::Eighth);
        assert_eq!(Duration::largest_fitting(1), Duration::Sixteenth);
        assert_eq!(Duration::largest_fitting(0), Duration::Sixteenth);
    }

    #[test]
    fn test_with_duration_leaves_original_untouched() {
        let note = Note::new(3, 7, Duration::Half);
        let shrunk = note.with_duration(Duration::Quarter);

        assert_eq!(note.duration, Duration::Half);
        assert_eq!(shrunk.duration, Duration::Quarter);
        assert_eq!(shrunk.string, 3);
        assert_eq!(shrunk.fret, 7);
    }

    #[test]
    fn test_measure_totals() {
        let measure = Measure {
            notes: vec![
                Note::new(6, 0, Duration::Half),
                Note::new(5, 2, Duration::Quarter),
                Note::new(4, 2, Duration::Eighth),
                Note::new(4, 4, Duration::Eighth),
            ],
        };
        assert_eq!(measure.total_sixteenths(), 16);
        assert_eq!(measure.total_duration(), 1.0);
        assert!(measure.is_full());
        assert!(!Measure::new().is_full());
    }

    #[test]
    fn test_note_serializes_camel_case() {
        let note = Note::new(2, 12, Duration::Sixteenth);
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(
            json,
            r#"{"string":2,"fret":12,"duration":"sixteenth","technique":"none"}"#
        );

        let hammer = Note {
            technique: Technique::HammerOn,
            ..note
        };
        assert!(serde_json::to_string(&hammer).unwrap().contains(r#""technique":"hammer-on""#));
    }

    #[test]
    fn test_meta_flattens_settings() {
        let meta = TabMeta::new(Settings::default());
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["stringCount"], 6);
        assert_eq!(value["measureCount"], 4);
        assert_eq!(value["complexity"], "medium");
        assert_eq!(value["maxStretch"], 4);
    }
}
