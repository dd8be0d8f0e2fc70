// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for configuration and input validation.
//!
//! The voicing engine itself never fails with an error: a chord that cannot be
//! parsed or voiced is reported as `None`. Errors only arise when building an
//! engine from user configuration.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A note name that is not one of the twelve pitch classes.
    ///
    /// # Example
    /// ```
    /// # use fretgen::ConfigError;
    /// let err = ConfigError::UnknownNote("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown note name: H");
    /// ```
    #[error("Unknown note name: {0}")]
    UnknownNote(String),

    /// A tuning with the wrong number of strings.
    #[error("Tuning must have {expected} strings, got {got}")]
    InvalidTuning { expected: usize, got: usize },

    /// A generator constraint or engine setting outside its allowed range.
    ///
    /// # Example
    /// ```
    /// # use fretgen::ConfigError;
    /// let err = ConfigError::InvalidConstraint {
    ///     field: "max_fret",
    ///     message: "must be at most 24".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid constraint `max_fret`: must be at most 24");
    /// ```
    #[error("Invalid constraint `{field}`: {message}")]
    InvalidConstraint {
        field: &'static str,
        message: String,
    },

    /// A config file whose extension is neither YAML nor TOML.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}
