//! # Error Types
//!
//! This module defines all error types for the tab generator.
//!
//! Generation itself cannot fail: every random choice is range-bounded and the
//! reachability guard corrects rather than rejects. Errors only come from the
//! boundary, i.e. malformed settings or an unreadable settings file.
//!
//! ## Error Types
//! - `InvalidSettings` - A settings field is outside its contract range
//! - `ConfigError` - A YAML settings file could not be read or parsed
//!
//! ## Usage
//! ```rust
//! use tabgen::{generate_seeded, Settings, TabError};
//!
//! let settings = Settings { string_range: 9, ..Settings::default() };
//!
//! match generate_seeded(&settings, 7) {
//!     Ok(doc) => println!("{} measures", doc.measures.len()),
//!     Err(TabError::InvalidSettings { field, message }) => {
//!         eprintln!("bad {}: {}", field, message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TabError {
    /// A settings field is outside the range the generator accepts.
    ///
    /// `field` carries the camelCase name used in serialized settings.
    ///
    /// # Example
    /// ```
    /// # use tabgen::TabError;
    /// let err = TabError::InvalidSettings {
    ///     field: "stringRange",
    ///     message: "must be between 2 and 6, got 0".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid settings: stringRange must be between 2 and 6, got 0");
    /// ```
    #[error("Invalid settings: {field} {message}")]
    InvalidSettings {
        field: &'static str,
        message: String,
    },

    /// Settings file could not be read or is not valid YAML.
    ///
    /// # Example
    /// ```
    /// # use tabgen::TabError;
    /// let err = TabError::ConfigError("unknown complexity 'extreme'".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: unknown complexity 'extreme'");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
