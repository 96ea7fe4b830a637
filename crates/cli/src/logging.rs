// crates/cli/src/logging.rs
use std::fs::OpenOptions;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;

use crate::error::{AppError, Result};

/// Levels accepted by the `log_level` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
    Fatal,
}

impl LogLevel {
    pub const NAMES: &'static str = "debug, info, warning, error, critical, fatal";

    /// `critical` and `fatal` have no finer equivalent than ERROR.
    pub const fn as_filter(self) -> LevelFilter {
        match self {
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warning => LevelFilter::WARN,
            Self::Error | Self::Critical | Self::Fatal => LevelFilter::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            "fatal" => Ok(Self::Fatal),
            other => Err(format!("unknown log level '{other}' (expected one of {})", Self::NAMES)),
        }
    }
}

/// Routes `log` records into `log_file`, appending to it.
pub fn init(log_file: &Path, level: LogLevel) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|source| AppError::LogFile {
            path: log_file.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level.as_filter())
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_documented_level() {
        for (name, level) in [
            ("debug", LogLevel::Debug),
            ("info", LogLevel::Info),
            ("warning", LogLevel::Warning),
            ("error", LogLevel::Error),
            ("critical", LogLevel::Critical),
            ("fatal", LogLevel::Fatal),
        ] {
            assert_eq!(name.parse::<LogLevel>().unwrap(), level);
        }
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
    }

    #[test]
    fn rejects_unknown_levels() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert!(err.contains("verbose"));
    }

    #[test]
    fn severe_levels_collapse_to_error() {
        assert_eq!(LogLevel::Fatal.as_filter(), LevelFilter::ERROR);
        assert_eq!(LogLevel::Critical.as_filter(), LevelFilter::ERROR);
        assert_eq!(LogLevel::Warning.as_filter(), LevelFilter::WARN);
    }

    #[test]
    fn unwritable_log_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = init(&dir.path().join("missing/dir/app.log"), LogLevel::Info).unwrap_err();
        assert!(matches!(err, AppError::LogFile { .. }));
    }
}
