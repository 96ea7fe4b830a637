// crates/cli/src/config.rs
use std::path::PathBuf;

use advcounter_engine::Driver;
use advcounter_shared_kernel::{ConfigError, Precision};
use derive_builder::Builder;

use crate::args::Args;
use crate::error::{AppError, Result};
use crate::logging::LogLevel;
use crate::options::OutputFormat;
use crate::settings::{ConfigProvider, DEFAULT_SECTION};

/// Everything one invocation needs, merged from arguments and the config file.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct RunConfig {
    pub input: PathBuf,
    #[builder(default)]
    pub precision: Precision,
    #[builder(default = "String::from(\"utf-8\")")]
    pub encoding: String,
    #[builder(default)]
    pub format: OutputFormat,
    pub driver: Driver,
    pub log_file: PathBuf,
    #[builder(default = "LogLevel::Warning")]
    pub log_level: LogLevel,
}

impl RunConfig {
    /// Resolves the driver first, then the logging options, so a broken
    /// configuration reports the same first problem every time.
    pub fn resolve(args: Args, provider: &dyn ConfigProvider) -> Result<Self> {
        let driver: Driver = provider.get(DEFAULT_SECTION, "driver")?.parse()?;
        let log_file = provider.get(DEFAULT_SECTION, "log_file")?;
        let raw_level = provider.get(DEFAULT_SECTION, "log_level")?;
        let log_level = raw_level
            .parse::<LogLevel>()
            .map_err(|reason| ConfigError::InvalidValue {
                section: DEFAULT_SECTION.to_string(),
                key: "log_level".to_string(),
                value: raw_level.clone(),
                reason,
            })?;

        RunConfigBuilder::default()
            .input(args.file)
            .precision(args.decimal)
            .encoding(args.encoding)
            .format(args.format)
            .driver(driver)
            .log_file(log_file)
            .log_level(log_level)
            .build()
            .map_err(|e| AppError::ConfigBuild(e.to_string()))
    }
}
