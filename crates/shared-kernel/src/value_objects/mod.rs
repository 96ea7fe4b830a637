// crates/shared-kernel/src/value_objects/mod.rs
pub mod precision;
pub mod ranking;
pub mod report;

pub use precision::Precision;
pub use ranking::{LetterCount, LetterRanking};
pub use report::TextReport;
