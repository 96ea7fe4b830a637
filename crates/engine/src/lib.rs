// crates/engine/src/lib.rs
//! Text statistics engine: sources, drivers and report collection.

pub mod analyzer;
pub mod drivers;
pub mod registry;
pub mod report;
pub mod source;

pub use analyzer::TextAnalyzer;
pub use drivers::{Fake, Stattext};
pub use registry::{Driver, create_engine};
pub use report::collect_report;
pub use source::{DecodedSource, FileOpener, FsOpener, MemorySource, TextSource};
