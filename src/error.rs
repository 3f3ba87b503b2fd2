//! Error types for the editor.
//!
//! Edit-form validation and settings IO are the only fallible paths; every
//! other operation on the board is total.

use serde::Deserialize;
use thiserror::Error;

/// Which coordinate field of the edit form a value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateField {
    X,
    Y,
}

impl std::fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinateField::X => f.write_str("X"),
            CoordinateField::Y => f.write_str("Y"),
        }
    }
}

/// Errors raised when submitting the edit form
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    /// Field text is not a decimal number
    #[error("{field} coordinate is not a number: {text:?}")]
    NotANumber { field: CoordinateField, text: String },

    /// Field parsed, but to infinity or NaN
    #[error("{field} coordinate must be finite: {text:?}")]
    NotFinite { field: CoordinateField, text: String },

    /// Submit or field change without an open form
    #[error("No microphone is being edited")]
    NoActiveEdit,
}

/// Result type alias for edit operations
pub type EditResult<T> = Result<T, EditError>;

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// No per-user config directory on this platform
    #[error("No config directory available")]
    NoConfigDir,
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
