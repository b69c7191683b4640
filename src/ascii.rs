//! # ASCII Tab Export
//!
//! Renders a [`TabDocument`] as plain-text guitar tablature.
//!
//! ## Layout
//! ```text
//! Tempo: 120 BPM
//!
//! e|------------------------------------------------|
//! B|------------------------------------------------|
//! G|------------------------------------------------|
//! D|------------------------5-----------------------|
//! A|------------3-----------------------------------|
//! E|0-----------------------------------7-----------|
//! ```
//!
//! - One block of six lines per measure, high e (string 1) first, low E last.
//! - Each line is `<label>|`, a body of 16 sixteenth slots, then `|`.
//! - A note is written at the slot matching its onset inside the bar, so the
//!   horizontal position is proportional to elapsed time.
//! - Blocks are separated by a blank line.

use crate::model::{Measure, TabDocument, SIXTEENTHS_PER_MEASURE, STRING_COUNT};

/// String labels from string 1 (highest pitch) to string 6 (lowest).
const STRING_LABELS: [char; STRING_COUNT as usize] = ['e', 'B', 'G', 'D', 'A', 'E'];

/// Narrowest slot that fits a two-digit fret plus a separating dash.
pub const MIN_COLUMNS_PER_SIXTEENTH: usize = 3;

/// Rendering options for [`to_ascii_with_options`]
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiOptions {
    /// Characters per sixteenth slot. Values below
    /// [`MIN_COLUMNS_PER_SIXTEENTH`] are raised to it.
    pub columns_per_sixteenth: usize,
    /// Emit the `Tempo: N BPM` header.
    pub include_header: bool,
}

impl Default for AsciiOptions {
    fn default() -> Self {
        Self {
            columns_per_sixteenth: MIN_COLUMNS_PER_SIXTEENTH,
            include_header: true,
        }
    }
}

/// Render a document with the default options.
pub fn to_ascii(doc: &TabDocument) -> String {
    to_ascii_with_options(doc, &AsciiOptions::default())
}

/// Render a document.
pub fn to_ascii_with_options(doc: &TabDocument, options: &AsciiOptions) -> String {
    let mut out = String::new();

    if options.include_header {
        out.push_str(&format!("Tempo: {} BPM\n\n", doc.meta.settings.tempo));
    }

    let columns = options.columns_per_sixteenth.max(MIN_COLUMNS_PER_SIXTEENTH);
    for measure in &doc.measures {
        for line in measure_lines(measure, columns) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

/// Six lines for one measure, string 1 first.
fn measure_lines(measure: &Measure, columns_per_sixteenth: usize) -> Vec<String> {
    let width = SIXTEENTHS_PER_MEASURE as usize * columns_per_sixteenth;
    let mut bodies: Vec<Vec<char>> = vec![vec!['-'; width]; STRING_COUNT as usize];

    let mut onset: usize = 0;
    for note in &measure.notes {
        let column = onset * columns_per_sixteenth;
        onset += note.duration.sixteenths() as usize;

        let Some(body) = string_index(note.string).and_then(|i| bodies.get_mut(i)) else {
            continue;
        };
        for (offset, digit) in note.fret.to_string().chars().enumerate() {
            if let Some(cell) = body.get_mut(column + offset) {
                *cell = digit;
            }
        }
    }

    STRING_LABELS
        .iter()
        .zip(bodies)
        .map(|(label, body)| {
            let mut line = String::with_capacity(width + 3);
            line.push(*label);
            line.push('|');
            line.extend(body);
            line.push('|');
            line
        })
        .collect()
}

/// Row index for a 1-based string number.
fn string_index(string: u8) -> Option<usize> {
    (1..=STRING_COUNT)
        .contains(&string)
        .then(|| usize::from(string - 1))
}
