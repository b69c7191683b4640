pub mod ascii;
pub mod error;
pub mod generator;
pub mod model;
pub mod playback;
pub mod rng;
pub mod settings;

pub use ascii::{to_ascii, to_ascii_with_options, AsciiOptions};
pub use error::*;
pub use generator::generate_with_rng;
pub use model::*;
pub use settings::{Complexity, Settings};

/// Generate a tab from fresh entropy.
/// This is the main entry point for the library.
pub fn generate(settings: &Settings) -> Result<TabDocument, TabError> {
    let seed = rng::random_seed();
    log::debug!("Generating with seed {}", seed);
    generate_seeded(settings, seed)
}

/// Generate a tab reproducibly: the same settings and seed always give the same document.
pub fn generate_seeded(settings: &Settings, seed: u64) -> Result<TabDocument, TabError> {
    let mut rng = rng::create_rng(seed);
    generate_with_rng(settings, &mut rng)
}
