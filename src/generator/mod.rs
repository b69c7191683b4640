//! # Generator Module
//!
//! Produces hand-reachable guitar tablature from a [`Settings`](crate::settings::Settings) record and an
//! injected random source.
//!
//! ## Purpose
//! Every generated note stream must be playable: two consecutive notes on
//! different strings may not sit further apart on the neck than the configured
//! maximum stretch, unless one of them is an open string. This holds across
//! measure boundaries, since the hand does not reset at a bar line.
//!
//! ## Sub-modules
//! - `selector` - Proposes a candidate note (duration, string, fret)
//! - `reach` - Checks a candidate against the previous note and pulls it back into reach
//! - `filler` - Fills 4/4 bars with accepted notes and assembles the document
//!
//! ## Pipeline
//! ```text
//! for each measure:
//!     while bar < 1.0:
//!         candidate = propose_note(last)       (selector)
//!         note      = enforce_reach(last, ..)  (reach)
//!         shrink note if it overflows the bar  (filler)
//!         last      = note
//! ```
//!
//! ## Entry Point
//! [`generate_with_rng()`] - Validate settings and build a [`TabDocument`](crate::model::TabDocument)
//!
//! The per-note and per-bar steps stay crate-private: they assume settings
//! that already passed [`Settings::validate`](crate::settings::Settings::validate).
//!
//! ## Example
//! ```rust
//! use tabgen::generator::generate_with_rng;
//! use tabgen::rng::create_rng;
//! use tabgen::Settings;
//!
//! let mut rng = create_rng(1234);
//! let doc = generate_with_rng(&Settings::default(), &mut rng).unwrap();
//!
//! assert_eq!(doc.measures.len(), 4);
//! assert!(doc.measures.iter().all(|m| m.total_duration() >= 1.0));
//! ```
//!
//! ## Randomness
//! All functions take `&mut impl Rng`. Passing a seeded generator (see
//! [`crate::rng::create_rng`]) makes the output fully reproducible; nothing in
//! this module keeps state between calls.
//!
//! ## Related Modules
//! - `model` - Note, Measure, TabDocument
//! - `settings` - Settings and validation

mod filler;
mod reach;
mod selector;


pub use filler::generate_with_rng;
pub use reach::is_reachable;
pub use selector::{duration_pool, opening_fret_max};
