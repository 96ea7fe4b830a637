// crates/shared-kernel/src/value_objects/report.rs
use serde::{Deserialize, Serialize};

use super::ranking::LetterRanking;

/// The four statistics reported for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextReport {
    pub lines: u64,
    pub words: u64,
    pub most_common_letter: Option<LetterRanking>,
    pub avg_letters_per_word: f64,
}

impl TextReport {
    /// Letters joined by spaces, or `None` when the document had no letters.
    pub fn most_common_display(&self) -> Option<String> {
        self.most_common_letter.as_ref().map(ToString::to_string)
    }
}
