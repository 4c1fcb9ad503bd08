//! Error types for luabind

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// luabind error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Binding tool not found: {0}")]
    ToolNotFound(PathBuf),

    #[error("Command failed: '{command}' ({status})")]
    ToolFailed { command: String, status: ExitStatus },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for luabind
pub type Result<T> = std::result::Result<T, Error>;
