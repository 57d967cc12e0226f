use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for autoversion operations
#[derive(Error, Debug)]
pub enum AutoversionError {
    #[error("Error fetching tags: {0}")]
    TagQuery(String),

    #[error("Error fetching commits: {0}")]
    LogQuery(String),

    #[error(
        "There aren't any commit messages with the required emojis to compute the new version number"
    )]
    Classification,

    #[error("Version format error: {0}")]
    Format(String),

    #[error("Unknown bump category: '{0}'")]
    BumpCategory(String),

    #[error("__version__ not found in {}", path.display())]
    MissingDeclaration { path: PathBuf },

    #[error("Package error: {0}")]
    Package(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in autoversion
pub type Result<T> = std::result::Result<T, AutoversionError>;

impl AutoversionError {
    /// Create a tag query error with context
    pub fn tag_query(msg: impl Into<String>) -> Self {
        AutoversionError::TagQuery(msg.into())
    }

    /// Create a log query error with context
    pub fn log_query(msg: impl Into<String>) -> Self {
        AutoversionError::LogQuery(msg.into())
    }

    /// Create a version format error with context
    pub fn format(msg: impl Into<String>) -> Self {
        AutoversionError::Format(msg.into())
    }

    /// Create a package error with context
    pub fn package(msg: impl Into<String>) -> Self {
        AutoversionError::Package(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AutoversionError::Config(msg.into())
    }

    pub fn missing_declaration(path: impl Into<PathBuf>) -> Self {
        AutoversionError::MissingDeclaration { path: path.into() }
    }
}
