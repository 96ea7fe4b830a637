// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum AdvCounterError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Errors raised while looking up configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No section {section} defined")]
    MissingSection { section: String },

    #[error("No option {key} in the section {section}")]
    MissingOption { section: String, key: String },

    #[error("Failed to parse configuration file '{path}': {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Invalid value '{value}' for option {key} in the section {section}: {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised by text sources while opening or reading a document.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("File '{path}' not found")]
    NotFound { path: PathBuf },

    #[error("Failed to open file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown encoding: {label}")]
    UnknownEncoding { label: String },

    #[error("File '{path}' is not in the {encoding} format (invalid byte sequence at offset {offset})")]
    Decoding {
        path: PathBuf,
        encoding: String,
        offset: u64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Errors raised while resolving an analysis engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unknown driver '{name}' (available: {available})")]
    UnknownDriver { name: String, available: String },
}
