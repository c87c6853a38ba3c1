//! Error types for the pathogen library.
//!
//! The path algebra itself is total: every string is a valid path text and
//! every operation on [`NormalizedPath`](crate::NormalizedPath) succeeds.
//! Errors only arise at the environment boundary, when the current working
//! directory is read or when configuration is loaded.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathogen error.
///
/// # Examples
///
/// ```
/// use pathogen::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathogen library.
#[derive(Debug, Error)]
pub enum Error {
    /// The environment reported a path that cannot be used as path text.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is unusable.
        reason: String,
    },

    /// An I/O error occurred while querying the environment.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field or variable that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration document could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),
}

impl Error {
    /// Returns `true` if this error came from a failed environment query.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::Error;
    ///
    /// let err = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
    /// assert!(err.is_environment_error());
    /// ```
    #[must_use]
    pub fn is_environment_error(&self) -> bool {
        matches!(self, Self::Io(_) | Self::InvalidPath { .. })
    }
}
