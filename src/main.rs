use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::process;
use tabgen::{Complexity, Settings, TabDocument};

/// Generate random, hand-reachable guitar tablature
#[derive(Parser)]
#[command(name = "tabgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML settings file (kebab-case keys); flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of 4/4 measures (1-8)
    #[arg(short, long)]
    measures: Option<u8>,

    /// easy, medium or hard
    #[arg(long)]
    complexity: Option<Complexity>,

    /// Maximum fret distance between consecutive notes on different strings
    #[arg(long)]
    max_stretch: Option<u8>,

    /// Number of playable strings, counted from the low E (2-6)
    #[arg(long)]
    string_range: Option<u8>,

    /// Tempo in BPM
    #[arg(short, long)]
    tempo: Option<u16>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Ascii,
    Json,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match resolve_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let seed = cli.seed.unwrap_or_else(tabgen::rng::random_seed);
    log::info!(
        "Generating {} {} measure(s), stretch {}, {} string(s), seed {}",
        settings.measure_count,
        settings.complexity,
        settings.max_stretch,
        settings.string_range,
        seed
    );

    let doc = match tabgen::generate_seeded(&settings, seed) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Generation error: {}", e);
            process::exit(1);
        }
    };

    let rendered = match render(&doc, cli.format, cli.pretty) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error serializing tab: {}", e);
            process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered) {
                eprintln!("Error writing to '{}': {}", path.display(), e);
                process::exit(1);
            }
            eprintln!("Wrote {} measure(s) to {}", doc.measures.len(), path.display());
        }
        None => {
            print!("{}", rendered);
        }
    }
}

/// Defaults, then the config file, then individual flags.
fn resolve_settings(cli: &Cli) -> Result<Settings, tabgen::TabError> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if let Some(measures) = cli.measures {
        settings.measure_count = measures;
    }
    if let Some(complexity) = cli.complexity {
        settings.complexity = complexity;
    }
    if let Some(max_stretch) = cli.max_stretch {
        settings.max_stretch = max_stretch;
    }
    if let Some(string_range) = cli.string_range {
        settings.string_range = string_range;
    }
    if let Some(tempo) = cli.tempo {
        settings.tempo = tempo;
    }

    settings.validate()?;
    Ok(settings)
}

fn render(doc: &TabDocument, format: Format, pretty: bool) -> Result<String, serde_json::Error> {
    match format {
        Format::Ascii => Ok(tabgen::to_ascii(doc)),
        Format::Json if pretty => serde_json::to_string_pretty(doc).map(|s| s + "\n"),
        Format::Json => serde_json::to_string(doc).map(|s| s + "\n"),
    }
}
