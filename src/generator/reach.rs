//! Hand-reachability guard
//!
//! A candidate is reachable from the previous note when no hand position
//! conflict exists between them: same string, either note open, or the fret
//! distance within `max_stretch`.

use crate::model::{Note, MAX_FRET};
use rand::Rng;

/// Whether `candidate` can be played right after `prev`.
pub fn is_reachable(prev: Option<&Note>, candidate: &Note, max_stretch: u8) -> bool {
    let Some(prev) = prev else {
        return true;
    };
    if prev.string == candidate.string || candidate.is_open() || prev.is_open() {
        return true;
    }
    prev.fret.abs_diff(candidate.fret) <= max_stretch
}

/// Return `candidate`, or a copy pulled back within reach of `prev`.
///
/// An unreachable candidate is moved to `prev.fret ± k` with `k` uniform in
/// `1..=max_stretch`, on the same side of `prev` it was on, then clamped to
/// the neck. One pass only: the moved fret is never re-checked.
///
/// The result is always reachable. An unreachable candidate implies
/// `prev.fret + max_stretch < 15` (above) or `prev.fret - max_stretch > 0`
/// (below), so the shifted fret is already on the neck. `max_stretch` must be
/// at least 1.
pub(crate) fn enforce_reach<R: Rng>(
    prev: Option<&Note>,
    candidate: Note,
    max_stretch: u8,
    rng: &mut R,
) -> Note {
    let prev = match prev {
        Some(prev) if !is_reachable(Some(prev), &candidate, max_stretch) => prev,
        _ => return candidate,
    };

    let shift = i16::from(rng.gen_range(1..=max_stretch));
    let target = if candidate.fret > prev.fret {
        i16::from(prev.fret) + shift
    } else {
        i16::from(prev.fret) - shift
    };
    let fret = target.clamp(0, i16::from(MAX_FRET)) as u8;

    log::debug!(
        "Out of reach: string {} fret {} after string {} fret {} (stretch {}), moved to fret {}",
        candidate.string,
        candidate.fret,
        prev.string,
        prev.fret,
        max_stretch,
        fret
    );

    candidate.with_fret(fret)
}
