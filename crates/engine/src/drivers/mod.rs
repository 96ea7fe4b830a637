// crates/engine/src/drivers/mod.rs
mod fake;
mod stattext;

pub use fake::Fake;
pub use stattext::Stattext;
