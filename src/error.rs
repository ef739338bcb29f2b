use thiserror::Error;

/// Unified error type for version-pick operations
#[derive(Error, Debug)]
pub enum VersionPickError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Version source failed: {0}")]
    Source(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-pick
pub type Result<T> = std::result::Result<T, VersionPickError>;

impl VersionPickError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionPickError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        VersionPickError::Version(msg.into())
    }

    /// Create a template error with context
    pub fn template(msg: impl Into<String>) -> Self {
        VersionPickError::Template(msg.into())
    }

    /// Create a source error with context
    pub fn source(msg: impl Into<String>) -> Self {
        VersionPickError::Source(msg.into())
    }
}
