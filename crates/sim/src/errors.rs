use std::path::PathBuf;
use thiserror::Error;

/// Error returned when user-supplied input cannot start a run.
///
/// Validation happens before any simulation state exists, so a
/// `ValidationError` never leaves a half-initialized session behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The text could not be read as a decimal number.
    #[error("{field}: '{input}' is not a number")]
    Unparseable { field: &'static str, input: String },

    /// The value parsed but lies below the accepted range.
    #[error("{field}: value {value} is below the minimum ({min})")]
    BelowMinimum {
        field: &'static str,
        value: f64,
        min: f64,
    },

    /// The value parsed but lies above the accepted range.
    #[error("{field}: value {value} is above the maximum ({max})")]
    AboveMaximum {
        field: &'static str,
        value: f64,
        max: f64,
    },

    /// A configuration file could not be read or decoded.
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ValidationError {
    /// Name of the offending field, if the error concerns a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Unparseable { field, .. }
            | Self::BelowMinimum { field, .. }
            | Self::AboveMaximum { field, .. } => Some(field),
            Self::Configuration(_) => None,
        }
    }

    /// Whether the value parsed but fell outside its range.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::BelowMinimum { .. } | Self::AboveMaximum { .. })
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(e: serde_json::Error) -> Self {
        Self::Configuration(format!("JSON error: {e}"))
    }
}

/// Error returned when exported data could not be written.
///
/// Persistence failures never touch simulation or display state.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is a directory", .0.display())]
    IsDirectory(PathBuf),

    #[error("Refused to overwrite existing file {}", .0.display())]
    OverwriteDeclined(PathBuf),
}

impl PersistenceError {
    /// Path the failed write was aimed at.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } => path,
            Self::IsDirectory(path) | Self::OverwriteDeclined(path) => path,
        }
    }
}
