use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for typepatch
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },
}

impl PatchError {
    /// Create a new file access error with path context
    pub fn file_access(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::FileAccess {
            path: path.into(),
            source: err,
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Path involved in the failure, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            PatchError::FileAccess { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PatchError {
    fn from(error: serde_json::Error) -> Self {
        PatchError::parse_error(error.to_string())
    }
}

impl From<serde_yaml::Error> for PatchError {
    fn from(error: serde_yaml::Error) -> Self {
        PatchError::parse_error(error.to_string())
    }
}

impl From<toml::de::Error> for PatchError {
    fn from(error: toml::de::Error) -> Self {
        PatchError::parse_error(error.to_string())
    }
}

impl From<toml::ser::Error> for PatchError {
    fn from(error: toml::ser::Error) -> Self {
        PatchError::parse_error(error.to_string())
    }
}

/// Result type alias using PatchError
pub type PatchResult<T> = Result<T, PatchError>;

/// Contextual error mapping function
pub fn map_io_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> PatchError {
    let path = path.into();
    move |err| PatchError::file_access(err, path)
}
