//! # Playback Timing
//!
//! Converts a generated tab into wall-clock timing for playback collaborators:
//! a playhead animation, a note highlighter and a metronome click track.
//! Nothing here produces audio; it only answers "when".
//!
//! ## Timing Model
//! - 4/4 time, quarter note = 1 beat, `tempo` in beats per minute
//! - Total length = `measure_count * 4` beats, independent of the notes
//! - Note onsets restart at every bar line, so a malformed bar cannot shift
//!   the bars after it
//!
//! ## Example
//! ```rust
//! use tabgen::playback::PlaybackTiming;
//! use tabgen::{generate_seeded, Settings};
//!
//! let settings = Settings { measure_count: 2, tempo: 120, ..Settings::default() };
//! let doc = generate_seeded(&settings, 1).unwrap();
//! let timing = PlaybackTiming::new(&doc.meta).unwrap();
//!
//! assert_eq!(timing.total_duration_ms(), 4000.0); // 8 beats at 120 BPM
//! assert_eq!(timing.playhead_position(1000.0), 0.25);
//! ```

use crate::error::TabError;
use crate::model::{Note, TabDocument, TabMeta};
use serde::Serialize;

pub const BEATS_PER_MEASURE: u32 = 4;

const ACCENT_FREQUENCY_HZ: f64 = 880.0; // A5
const BEAT_FREQUENCY_HZ: f64 = 440.0; // A4
const ACCENT_GAIN: f64 = 0.8;
const BEAT_GAIN: f64 = 0.5;

/// Tempo-derived clock for one document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackTiming {
    tempo: u16,
    measure_count: u8,
}

/// A note placed on the timeline
///
/// # Fields
/// - `note`: The note itself
/// - `measure_number`: Which measure this note is in (1-indexed)
/// - `start_beat`: Onset in beats from the start of the document
/// - `duration_beats`: Length in beats (quarter = 1.0)
/// - `start_ms` / `duration_ms`: The same in milliseconds at the document tempo
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteEvent {
    pub note: Note,
    pub measure_number: usize,
    pub start_beat: f64,
    pub duration_beats: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
}

/// One metronome tick
///
/// The first beat of every measure is accented: higher pitch, louder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Click {
    pub beat_index: u32,
    pub time_ms: f64,
    pub accent: bool,
    pub frequency_hz: f64,
    pub gain: f64,
}

impl PlaybackTiming {
    /// # Errors
    /// Returns [`TabError::InvalidSettings`] for a tempo of 0.
    pub fn new(meta: &TabMeta) -> Result<Self, TabError> {
        if meta.settings.tempo == 0 {
            return Err(TabError::InvalidSettings {
                field: "tempo",
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(Self {
            tempo: meta.settings.tempo,
            measure_count: meta.settings.measure_count,
        })
    }

    pub fn seconds_per_beat(&self) -> f64 {
        60.0 / f64::from(self.tempo)
    }

    pub fn beats_to_ms(&self, beats: f64) -> f64 {
        beats * self.seconds_per_beat() * 1000.0
    }

    pub fn total_beats(&self) -> u32 {
        u32::from(self.measure_count) * BEATS_PER_MEASURE
    }

    pub fn total_duration_ms(&self) -> f64 {
        f64::from(self.total_beats()) * 60_000.0 / f64::from(self.tempo)
    }

    /// Playhead position as a fraction of the whole piece, clamped to [0, 1].
    pub fn playhead_position(&self, elapsed_ms: f64) -> f64 {
        let total = self.total_duration_ms();
        if total <= 0.0 {
            return 0.0;
        }
        (elapsed_ms / total).clamp(0.0, 1.0)
    }
}

/// Place every note of the document on the timeline.
pub fn note_events(doc: &TabDocument) -> Result<Vec<NoteEvent>, TabError> {
    let timing = PlaybackTiming::new(&doc.meta)?;
    let mut events = Vec::with_capacity(doc.note_count());

    for (i, measure) in doc.measures.iter().enumerate() {
        let mut beat = (i as u32 * BEATS_PER_MEASURE) as f64;
        for note in &measure.notes {
            let duration_beats = note.duration.beats();
            events.push(NoteEvent {
                note: *note,
                measure_number: i + 1,
                start_beat: beat,
                duration_beats,
                start_ms: timing.beats_to_ms(beat),
                duration_ms: timing.beats_to_ms(duration_beats),
            });
            beat += duration_beats;
        }
    }

    Ok(events)
}

/// One click per beat across the whole piece.
pub fn click_track(meta: &TabMeta) -> Result<Vec<Click>, TabError> {
    let timing = PlaybackTiming::new(meta)?;

    let clicks = (0..timing.total_beats())
        .map(|beat_index| {
            let accent = beat_index % BEATS_PER_MEASURE == 0;
            Click {
                beat_index,
                time_ms: timing.beats_to_ms(f64::from(beat_index)),
                accent,
                frequency_hz: if accent { ACCENT_FREQUENCY_HZ } else { BEAT_FREQUENCY_HZ },
                gain: if accent { ACCENT_GAIN } else { BEAT_GAIN },
            }
        })
        .collect();

    Ok(clicks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Duration, Measure};
    use crate::settings::Settings;

    fn meta(measure_count: u8, tempo: u16) -> TabMeta {
        TabMeta::new(Settings {
            measure_count,
            tempo,
            ..Settings::default()
        })
    }

    #[test]
    fn test_total_duration() {
        let timing = PlaybackTiming::new(&meta(4, 120)).unwrap();
        assert_eq!(timing.total_beats(), 16);
        assert_eq!(timing.seconds_per_beat(), 0.5);
        assert_eq!(timing.total_duration_ms(), 8000.0);

        let timing = PlaybackTiming::new(&meta(1, 60)).unwrap();
        assert_eq!(timing.total_duration_ms(), 4000.0);
    }

    #[test]
    fn test_zero_tempo_rejected() {
        assert!(matches!(
            PlaybackTiming::new(&meta(4, 0)),
            Err(TabError::InvalidSettings { field: "tempo", .. })
        ));
    }

    #[test]
    fn test_playhead_clamps() {
        let timing = PlaybackTiming::new(&meta(2, 120)).unwrap();
        assert_eq!(timing.playhead_position(-5.0), 0.0);
        assert_eq!(timing.playhead_position(2000.0), 0.5);
        assert_eq!(timing.playhead_position(10_000.0), 1.0);
    }

    #[test]
    fn test_note_events_restart_at_bar_lines() {
        let doc = TabDocument {
            meta: meta(2, 120),
            measures: vec![
                Measure {
                    notes: vec![
                        Note::new(6, 0, Duration::Half),
                        Note::new(5, 2, Duration::Quarter),
                        Note::new(5, 3, Duration::Quarter),
                    ],
                },
                Measure {
                    notes: vec![
                        Note::new(4, 2, Duration::Eighth),
                        Note::new(4, 4, Duration::Eighth),
                    ],
                },
            ],
        };

        let events = note_events(&doc).unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0].start_beat, 0.0);
        assert_eq!(events[0].duration_beats, 2.0);
        assert_eq!(events[1].start_beat, 2.0);
        assert_eq!(events[2].start_beat, 3.0);
        assert_eq!(events[3].start_beat, 4.0);
        assert_eq!(events[3].measure_number, 2);
        assert_eq!(events[4].start_beat, 4.5);
        assert_eq!(events[4].start_ms, 2250.0);
        assert_eq!(events[4].duration_ms, 250.0);
    }

    #[test]
    fn test_click_track_accents_downbeats() {
        let clicks = click_track(&meta(2, 60)).unwrap();
        assert_eq!(clicks.len(), 8);
        assert!(clicks[0].accent);
        assert!(!clicks[1].accent);
        assert!(clicks[4].accent);
        assert_eq!(clicks[4].time_ms, 4000.0);
        assert_eq!(clicks[0].frequency_hz, 880.0);
        assert_eq!(clicks[1].frequency_hz, 440.0);
        assert_eq!(clicks[1].gain, 0.5);
    }
}
