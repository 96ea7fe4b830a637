// crates/engine/src/report.rs
use advcounter_shared_kernel::{SourceResult, TextReport};

use crate::analyzer::TextAnalyzer;
use crate::source::TextSource;

/// Runs every query against `source`, rewinding before each one.
///
/// Nothing is returned unless all four queries succeed.
pub fn collect_report<A, S>(analyzer: &mut A, source: &mut S) -> SourceResult<TextReport>
where
    A: TextAnalyzer + ?Sized,
    S: TextSource,
{
    source.rewind()?;
    let lines = analyzer.total_lines(source)?;
    source.rewind()?;
    let words = analyzer.total_words(source)?;
    source.rewind()?;
    let most_common_letter = analyzer.most_common_letter(source)?;
    source.rewind()?;
    let avg_letters_per_word = analyzer.avg_letters_per_word(source)?;

    Ok(TextReport {
        lines,
        words,
        most_common_letter,
        avg_letters_per_word,
    })
}
