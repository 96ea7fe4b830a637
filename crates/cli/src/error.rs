// crates/cli/src/error.rs
use std::path::PathBuf;

use advcounter_shared_kernel::{AdvCounterError, ConfigError, EngineError, SourceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] AdvCounterError),

    #[error("Failed to open log file '{path}': {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install logger: {0}")]
    Logging(String),

    #[error("Configuration building failed: {0}")]
    ConfigBuild(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

macro_rules! via_core {
    ($($err:ty),+ $(,)?) => {
        $(
            impl From<$err> for AppError {
                fn from(err: $err) -> Self {
                    Self::Core(err.into())
                }
            }
        )+
    };
}

via_core!(ConfigError, SourceError, EngineError);
