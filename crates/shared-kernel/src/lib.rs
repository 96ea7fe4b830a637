// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{AdvCounterError, ConfigError, ConfigResult, EngineError, SourceError, SourceResult};

pub mod error;
pub mod value_objects;

pub use value_objects::{LetterCount, LetterRanking, Precision, TextReport};
