//! Measure filling and document assembly
//!
//! Bars are counted in sixteenths so "is the bar full" is exact integer math.
//! The last accepted note is threaded through every call as an explicit value;
//! it survives bar lines because the fretting hand does.

use super::reach::enforce_reach;
use super::selector::propose_note;
use crate::error::TabError;
use crate::model::{Duration, Measure, Note, TabDocument, TabMeta, SIXTEENTHS_PER_MEASURE};
use crate::settings::Settings;
use rand::Rng;

/// Propose a note and run it through the reachability guard.
pub(crate) fn next_note<R: Rng>(prev: Option<&Note>, settings: &Settings, rng: &mut R) -> Note {
    let candidate = propose_note(prev, settings, rng);
    enforce_reach(prev, candidate, settings.max_stretch, rng)
}

/// Fill one 4/4 bar, starting from the hand position in `context`.
///
/// Notes are accepted until the bar reaches 1.0. A note that would overflow is
/// replaced by a copy with the largest duration that fits the remaining space
/// (see [`Duration::largest_fitting`]).
///
/// Returns the bar and the last accepted note, to be passed as `context` for
/// the next bar.
pub(crate) fn fill_measure<R: Rng>(
    context: Option<Note>,
    settings: &Settings,
    rng: &mut R,
) -> (Measure, Option<Note>) {
    let mut measure = Measure::new();
    let mut filled: u32 = 0;
    let mut last = context;

    while filled < SIXTEENTHS_PER_MEASURE {
        let note = fit_to_bar(next_note(last.as_ref(), settings, rng), filled);
        filled += note.duration.sixteenths();
        log::trace!(
            "Accepted string {} fret {} ({:?})",
            note.string,
            note.fret,
            note.duration
        );
        measure.notes.push(note);
        last = Some(note);
    }

    (measure, last)
}

/// Shrink `note` if it would run past the bar line with `filled` sixteenths
/// already used. Notes that fit are returned unchanged.
pub(crate) fn fit_to_bar(note: Note, filled: u32) -> Note {
    let remaining = SIXTEENTHS_PER_MEASURE.saturating_sub(filled);
    if note.duration.sixteenths() <= remaining {
        return note;
    }
    let fill = Duration::largest_fitting(remaining);
    log::trace!("Shrinking {:?} to {:?} to close the bar", note.duration, fill);
    note.with_duration(fill)
}

/// Generate a complete tab using the given random source.
///
/// # Errors
/// Returns [`TabError::InvalidSettings`] if any settings field is out of range.
pub fn generate_with_rng<R: Rng>(settings: &Settings, rng: &mut R) -> Result<TabDocument, TabError> {
    settings.validate()?;

    let mut measures = Vec::with_capacity(usize::from(settings.measure_count));
    let mut last: Option<Note> = None;

    for i in 0..settings.measure_count {
        let (measure, context) = fill_measure(last, settings, rng);
        log::debug!(
            "Measure {}: {} notes, {} sixteenths",
            i + 1,
            measure.len(),
            measure.total_sixteenths()
        );
        last = context;
        measures.push(measure);
    }

    Ok(TabDocument {
        meta: TabMeta::new(*settings),
        measures,
    })
}
