//! Candidate note selection
//!
//! Picks a duration, a string and a fret for the next note. Every value is in
//! range by construction; only the "position jump" branch may land out of the
//! hand's reach, which `reach` corrects afterwards.

use crate::model::{Duration, Note, MAX_FRET, STRING_COUNT};
use crate::settings::{Complexity, Settings};
use rand::Rng;

// Duplicated entries weight the uniform pick (easy: half is 1 in 3).
const EASY_DURATIONS: [Duration; 3] = [Duration::Quarter, Duration::Quarter, Duration::Half];
const MEDIUM_DURATIONS: [Duration; 3] = [Duration::Quarter, Duration::Eighth, Duration::Eighth];
const HARD_DURATIONS: [Duration; 3] = [Duration::Eighth, Duration::Sixteenth, Duration::Sixteenth];

/// Probability of staying within reach of the previous fret instead of jumping.
const STAY_IN_POSITION: f64 = 0.5;

/// Weighted duration multiset for a complexity level.
pub fn duration_pool(complexity: Complexity) -> &'static [Duration] {
    match complexity {
        Complexity::Easy => &EASY_DURATIONS,
        Complexity::Medium => &MEDIUM_DURATIONS,
        Complexity::Hard => &HARD_DURATIONS,
    }
}

/// Highest fret for a note with no hand position to respect.
pub fn opening_fret_max(complexity: Complexity) -> u8 {
    match complexity {
        Complexity::Easy => 5,
        Complexity::Medium | Complexity::Hard => 12,
    }
}

/// Propose the next note given the last accepted one.
///
/// # Fret choice
/// - No previous note, or the previous note was open: uniform in
///   `[0, opening_fret_max]`.
/// - Otherwise: half the time uniform within `prev.fret ± max_stretch`
///   (clamped to the neck), half the time anywhere on `[0, 15]`.
///
/// The technique is always `None`. `settings` must already be validated.
pub(crate) fn propose_note<R: Rng>(prev: Option<&Note>, settings: &Settings, rng: &mut R) -> Note {
    let pool = duration_pool(settings.complexity);
    let duration = pool[rng.gen_range(0..pool.len())];

    let string = rng.gen_range(settings.min_string()..=STRING_COUNT);

    let fret = match prev {
        Some(prev) if !prev.is_open() => {
            if rng.gen_bool(STAY_IN_POSITION) {
                let anchor = prev.fret.min(MAX_FRET);
                let low = anchor.saturating_sub(settings.max_stretch);
                let high = anchor.saturating_add(settings.max_stretch).min(MAX_FRET);
                rng.gen_range(low..=high)
            } else {
                rng.gen_range(0..=MAX_FRET)
            }
        }
        _ => rng.gen_range(0..=opening_fret_max(settings.complexity)),
    };

    Note::new(string, fret, duration)
}
