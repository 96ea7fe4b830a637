// crates/engine/src/registry.rs
use std::fmt;
use std::str::FromStr;

use advcounter_shared_kernel::{EngineError, Precision};

use crate::analyzer::TextAnalyzer;
use crate::drivers::{Fake, Stattext};

/// Drivers selectable by name from the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Driver {
    Stattext,
    Fake,
}

impl Driver {
    pub const ALL: [Self; 2] = [Self::Stattext, Self::Fake];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Stattext => Stattext::NAME,
            Self::Fake => Fake::NAME,
        }
    }

    /// Instantiates the driver with the given precision.
    pub fn build(self, precision: Precision) -> Box<dyn TextAnalyzer> {
        match self {
            Self::Stattext => Box::new(Stattext::new(precision)),
            Self::Fake => Box::new(Fake::new(precision)),
        }
    }

    fn available() -> String {
        Self::ALL
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Driver {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EngineError::UnknownDriver {
                name: wanted.to_string(),
                available: Self::available(),
            })
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves `name` and builds the matching driver.
pub fn create_engine(
    name: &str,
    precision: Precision,
) -> Result<Box<dyn TextAnalyzer>, EngineError> {
    let driver: Driver = name.parse()?;
    log::debug!("using driver {driver} with precision {precision}");
    Ok(driver.build(precision))
}
