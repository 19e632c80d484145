//! Error types for the scaffolder
//!
//! Library-level failures use thiserror; the orchestrator wraps them (and raw
//! I/O errors) in `anyhow` with context.

use thiserror::Error;

/// Preset table loading/validation errors
#[derive(Error, Debug)]
pub enum PresetError {
    /// The YAML document could not be parsed
    #[error("Failed to parse preset table: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The table has no presets at all
    #[error("Preset table is empty")]
    Empty,

    /// Two presets share a key
    #[error("Duplicate preset key '{key}'")]
    DuplicateKey { key: String },

    /// Key is empty or not lowercase
    #[error("Invalid preset key '{key}': keys must be non-empty lowercase names")]
    InvalidKey { key: String },

    /// Hex value is not `#rrggbb`
    #[error("Preset '{key}' has invalid hex color '{hex}'")]
    InvalidHex { key: String, hex: String },

    /// Override map is missing for a mode
    #[error("Preset '{key}' has no {mode} overrides")]
    MissingOverrides { key: String, mode: &'static str },

    /// Override name is not a CSS custom property
    #[error("Preset '{key}' overrides '{property}', which is not a CSS custom property")]
    InvalidProperty { key: String, property: String },

    /// Override value would break out of its CSS declaration
    #[error("Preset '{key}' sets '{property}' to an invalid CSS value '{value}'")]
    InvalidValue {
        key: String,
        property: String,
        value: String,
    },

    /// The declared default key is not in the table
    #[error("Default preset '{key}' is not defined")]
    UnknownDefault { key: String },

    /// Lookup of a key that does not exist
    #[error("Preset '{key}' not found")]
    NotFound { key: String },
}

/// Interactive input errors
#[derive(Error, Debug)]
pub enum PromptError {
    /// Input stream ended before every question was answered
    #[error("Input closed before '{question}' was answered")]
    InputClosed { question: String },

    /// Operator cancelled a prompt (Ctrl+C / Esc)
    #[error("Prompt cancelled")]
    Interrupted,

    /// Reading or echoing failed
    #[error("Prompt I/O failed: {0}")]
    Io(std::io::Error),
}

impl From<std::io::Error> for PromptError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::Interrupted {
            PromptError::Interrupted
        } else {
            PromptError::Io(err)
        }
    }
}
