// crates/engine/src/analyzer.rs
use std::sync::OnceLock;

use advcounter_shared_kernel::{LetterRanking, Precision, SourceResult};
use regex::Regex;

use crate::source::TextSource;

/// Capability shared by every analysis driver.
///
/// Each query reads `source` from its current position to the end. Callers
/// rewind the source between queries that need the whole document.
pub trait TextAnalyzer {
    /// Name under which the driver is registered.
    fn name(&self) -> &'static str;

    fn precision(&self) -> Precision;

    fn total_lines(&mut self, source: &mut dyn TextSource) -> SourceResult<u64>;

    /// Whitespace-separated tokens containing at least one letter or numeral.
    fn total_words(&mut self, source: &mut dyn TextSource) -> SourceResult<u64>;

    /// Alphanumeric character count: letters and numerals alike.
    fn total_letters(&mut self, source: &mut dyn TextSource) -> SourceResult<u64>;

    /// All letters tied for the highest case-folded frequency, or `None` when
    /// the document has no letters.
    fn most_common_letter(
        &mut self,
        source: &mut dyn TextSource,
    ) -> SourceResult<Option<LetterRanking>>;

    /// `total_letters / total_words` with this analyzer's precision; `0.0`
    /// when there are no words.
    fn avg_letters_per_word(&mut self, source: &mut dyn TextSource) -> SourceResult<f64>;
}

fn alphanumeric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\p{L}\p{N}]").expect("valid alphanumeric class"))
}

fn letter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\p{L}").expect("valid letter class"))
}

/// A token counts as a word when it holds a letter or a numeral.
pub fn is_word(token: &str) -> bool {
    alphanumeric_re().is_match(token)
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators.
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub fn count_words_in_line(line: &str) -> u64 {
    line.split(is_word_separator)
        .filter(|token| !token.is_empty() && is_word(token))
        .count() as u64
}

pub fn count_alphanumeric(line: &str) -> u64 {
    alphanumeric_re().find_iter(line).count() as u64
}

/// Letters of `line` after lowercasing it, in reading order.
pub fn folded_letters(line: &str) -> Vec<char> {
    let lowered = line.to_lowercase();
    letter_re()
        .find_iter(&lowered)
        .filter_map(|m| m.as_str().chars().next())
        .collect()
}
