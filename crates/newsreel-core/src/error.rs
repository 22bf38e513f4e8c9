//! Error types for Newsreel

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using NewsreelError
pub type Result<T> = std::result::Result<T, NewsreelError>;

/// Main error type for Newsreel operations
#[derive(Debug, Error)]
pub enum NewsreelError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Fragment-related errors
    #[error(transparent)]
    Fragment(#[from] FragmentError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Errors raised by the news-fragment pipeline.
///
/// Malformed entry *file names* and bad encodings fail loudly; malformed
/// section *directory names* are skipped silently and never reach here.
#[derive(Debug, Error)]
pub enum FragmentError {
    /// Entry filename does not match `<issue>.md` / `<issue>-<slug>.md`
    #[error("invalid news entry file name: {0}")]
    BadFileName(PathBuf),

    /// Entry content is not valid UTF-8
    #[error("news entry {0} is not valid UTF-8")]
    NotUtf8(PathBuf),

    /// Entry content starts with a UTF-8 byte-order mark
    #[error("news entry {0} starts with a byte-order mark")]
    BomPresent(PathBuf),

    /// Existing changelog document has an unexpected shape
    #[error("malformed changelog document: {0}")]
    MalformedChangelog(String),

    /// Removing a consumed fragment from version control failed
    #[error("failed to remove fragment {path}: {reason}")]
    RemoveFailed { path: PathBuf, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Repository has no working tree to remove files from
    #[error("Repository is bare and has no working tree")]
    NoWorkingTree,

    /// Path lies outside the repository working tree
    #[error("Path is outside the repository working tree: {0}")]
    OutsideWorkTree(PathBuf),

    /// Failed to remove a tracked file
    #[error("Failed to remove {path}: {reason}")]
    RemoveFailed { path: PathBuf, reason: String },

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

impl NewsreelError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
