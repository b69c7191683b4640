//! # Generation Settings
//!
//! The configuration record that fully describes a generation request, plus the
//! boundary checks applied before any note is produced.
//!
//! ## Ranges
//! - `measure_count`: 1-8
//! - `max_stretch`: 1-15 (4-6 in normal use, 3 for strict drills)
//! - `string_range`: 2-6, playable strings are `[6 - string_range + 1, 6]`
//! - `tempo`: passed through to playback/export, never checked here
//!
//! ## YAML Files
//! Settings can be loaded from a YAML document with kebab-case keys. Missing
//! keys fall back to [`Settings::default`]:
//!
//! ```rust
//! use tabgen::{Complexity, Settings};
//!
//! let settings = Settings::from_yaml("measure-count: 2\ncomplexity: hard\n")?;
//! assert_eq!(settings.measure_count, 2);
//! assert_eq!(settings.complexity, Complexity::Hard);
//! assert_eq!(settings.tempo, 90);
//! # Ok::<(), tabgen::TabError>(())
//! ```

use crate::error::TabError;
use crate::model::{MAX_FRET, STRING_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const MIN_MEASURES: u8 = 1;
pub const MAX_MEASURES: u8 = 8;
pub const MIN_STRETCH: u8 = 1;
pub const MIN_STRING_RANGE: u8 = 2;

/// Difficulty level: biases note durations and the opening fret range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl FromStr for Complexity {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Complexity::Easy),
            "medium" => Ok(Complexity::Medium),
            "hard" => Ok(Complexity::Hard),
            other => Err(TabError::ConfigError(format!(
                "unknown complexity '{}' (expected easy, medium or hard)",
                other
            ))),
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Complexity::Easy => "easy",
            Complexity::Medium => "medium",
            Complexity::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// A complete generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub measure_count: u8,
    pub complexity: Complexity,
    pub max_stretch: u8,
    pub string_range: u8,
    pub tempo: u16, // BPM, quarter note = 1 beat
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            measure_count: 4,
            complexity: Complexity::Medium,
            max_stretch: 4,
            string_range: 4,
            tempo: 90,
        }
    }
}

/// Raw settings for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawSettings {
    measure_count: Option<u8>,
    complexity: Option<String>,
    max_stretch: Option<u8>,
    string_range: Option<u8>,
    tempo: Option<u16>,
}

impl Settings {
    /// Check every field against its contract range.
    ///
    /// Returns the first offending field. Tempo is not checked.
    pub fn validate(&self) -> Result<(), TabError> {
        if !(MIN_MEASURES..=MAX_MEASURES).contains(&self.measure_count) {
            return Err(TabError::InvalidSettings {
                field: "measureCount",
                message: format!(
                    "must be between {} and {}, got {}",
                    MIN_MEASURES, MAX_MEASURES, self.measure_count
                ),
            });
        }
        if !(MIN_STRETCH..=MAX_FRET).contains(&self.max_stretch) {
            return Err(TabError::InvalidSettings {
                field: "maxStretch",
                message: format!(
                    "must be between {} and {}, got {}",
                    MIN_STRETCH, MAX_FRET, self.max_stretch
                ),
            });
        }
        if !(MIN_STRING_RANGE..=STRING_COUNT).contains(&self.string_range) {
            return Err(TabError::InvalidSettings {
                field: "stringRange",
                message: format!(
                    "must be between {} and {}, got {}",
                    MIN_STRING_RANGE, STRING_COUNT, self.string_range
                ),
            });
        }
        Ok(())
    }

    /// Lowest-numbered (highest-pitched) string that may be played.
    ///
    /// A `string_range` above 6 saturates to string 1.
    pub fn min_string(&self) -> u8 {
        STRING_COUNT.saturating_sub(self.string_range) + 1
    }

    /// Parse and validate settings from YAML.
    pub fn from_yaml(content: &str) -> Result<Self, TabError> {
        let raw: RawSettings = if content.trim().is_empty() {
            RawSettings::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| TabError::ConfigError(e.to_string()))?
        };

        let defaults = Settings::default();
        let complexity = match &raw.complexity {
            Some(c) => c.parse()?,
            None => defaults.complexity,
        };

        let settings = Settings {
            measure_count: raw.measure_count.unwrap_or(defaults.measure_count),
            complexity,
            max_stretch: raw.max_stretch.unwrap_or(defaults.max_stretch),
            string_range: raw.string_range.unwrap_or(defaults.string_range),
            tempo: raw.tempo.unwrap_or(defaults.tempo),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Read a YAML settings file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TabError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TabError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_min_string() {
        let mut settings = Settings::default();
        settings.string_range = 6;
        assert_eq!(settings.min_string(), 1);
        settings.string_range = 2;
        assert_eq!(settings.min_string(), 5);
        settings.string_range = 3;
        assert_eq!(settings.min_string(), 4);
        settings.string_range = 7;
        assert_eq!(settings.min_string(), 1);
        settings.string_range = u8::MAX;
        assert_eq!(settings.min_string(), 1);
    }

    #[test]
    fn test_validate_names_offending_field() {
        let cases = [
            (Settings { measure_count: 0, ..Settings::default() }, "measureCount"),
            (Settings { measure_count: 9, ..Settings::default() }, "measureCount"),
            (Settings { max_stretch: 0, ..Settings::default() }, "maxStretch"),
            (Settings { max_stretch: 16, ..Settings::default() }, "maxStretch"),
            (Settings { string_range: 0, ..Settings::default() }, "stringRange"),
            (Settings { string_range: 1, ..Settings::default() }, "stringRange"),
            (Settings { string_range: 7, ..Settings::default() }, "stringRange"),
        ];
        for (settings, expected) in cases {
            match settings.validate() {
                Err(TabError::InvalidSettings { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected InvalidSettings for {}, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_tempo_is_not_validated() {
        let settings = Settings { tempo: 0, ..Settings::default() };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_strict_stretch_is_accepted() {
        let settings = Settings { max_stretch: 3, ..Settings::default() };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_complexity_from_str() {
        assert_eq!("easy".parse::<Complexity>().unwrap(), Complexity::Easy);
        assert_eq!(" Hard ".parse::<Complexity>().unwrap(), Complexity::Hard);
        assert!("extreme".parse::<Complexity>().is_err());
        assert_eq!(Complexity::Medium.to_string(), "medium");
    }

    #[test]
    fn test_from_yaml_full() {
        let yaml = r#"
measure-count: 8
complexity: hard
max-stretch: 3
string-range: 6
tempo: 100
"#;
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(
            settings,
            Settings {
                measure_count: 8,
                complexity: Complexity::Hard,
                max_stretch: 3,
                string_range: 6,
                tempo: 100,
            }
        );
    }

    #[test]
    fn test_from_yaml_empty_uses_defaults() {
        assert_eq!(Settings::from_yaml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_from_yaml_rejects_out_of_range() {
        let result = Settings::from_yaml("string-range: 0\n");
        assert!(matches!(
            result,
            Err(TabError::InvalidSettings { field: "stringRange", .. })
        ));
    }

    #[test]
    fn test_from_yaml_rejects_bad_values() {
        assert!(matches!(
            Settings::from_yaml("complexity: extreme\n"),
            Err(TabError::ConfigError(_))
        ));
        assert!(matches!(
            Settings::from_yaml("measure-count: -1\n"),
            Err(TabError::ConfigError(_))
        ));
        assert!(matches!(
            Settings::from_yaml("measures: 4\n"),
            Err(TabError::ConfigError(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Settings::load("/nonexistent/tabgen-settings.yaml");
        match result {
            Err(TabError::ConfigError(msg)) => assert!(msg.contains("cannot read")),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }
}
