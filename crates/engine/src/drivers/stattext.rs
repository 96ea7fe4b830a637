// crates/engine/src/drivers/stattext.rs
use advcounter_shared_kernel::{LetterCount, LetterRanking, Precision, SourceResult};
use hashbrown::HashMap;

use crate::analyzer::{TextAnalyzer, count_alphanumeric, count_words_in_line, folded_letters};
use crate::source::{TextSource, for_each_line};

/// The statistics driver.
///
/// Numbers count as words and as letters: `these 3 words` has three words and
/// eleven letters. Totals are memoized on first use and stay fixed for the
/// lifetime of the instance; call [`Stattext::invalidate`] to start over.
#[derive(Debug, Clone, Default)]
pub struct Stattext {
    precision: Precision,
    total_words: Option<u64>,
    total_lines: Option<u64>,
    total_letters: Option<u64>,
    avg_letters_per_word: Option<f64>,
}

impl Stattext {
    pub const NAME: &'static str = "stattext";

    pub fn new(precision: Precision) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    /// Drops every memoized total.
    pub fn invalidate(&mut self) {
        self.total_words = None;
        self.total_lines = None;
        self.total_letters = None;
        self.avg_letters_per_word = None;
    }
}

fn count_lines(source: &mut dyn TextSource) -> SourceResult<u64> {
    let mut lines = 0;
    for_each_line(source, |_| lines += 1)?;
    Ok(lines)
}

fn count_words(source: &mut dyn TextSource) -> SourceResult<u64> {
    let mut words = 0;
    for_each_line(source, |line| words += count_words_in_line(line))?;
    Ok(words)
}

fn count_letters(source: &mut dyn TextSource) -> SourceResult<u64> {
    let mut letters = 0;
    for_each_line(source, |line| letters += count_alphanumeric(line))?;
    Ok(letters)
}

impl TextAnalyzer for Stattext {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn precision(&self) -> Precision {
        self.precision
    }

    fn total_lines(&mut self, source: &mut dyn TextSource) -> SourceResult<u64> {
        if let Some(lines) = self.total_lines {
            return Ok(lines);
        }
        log::debug!("total lines not cached, counting lines");
        let lines = count_lines(source)?;
        self.total_lines = Some(lines);
        Ok(lines)
    }

    fn total_words(&mut self, source: &mut dyn TextSource) -> SourceResult<u64> {
        if let Some(words) = self.total_words {
            return Ok(words);
        }
        log::debug!("total words not cached, counting words");
        let words = count_words(source)?;
        self.total_words = Some(words);
        Ok(words)
    }

    fn total_letters(&mut self, source: &mut dyn TextSource) -> SourceResult<u64> {
        if let Some(letters) = self.total_letters {
            return Ok(letters);
        }
        log::debug!("total letters not cached, counting letters");
        let letters = count_letters(source)?;
        self.total_letters = Some(letters);
        Ok(letters)
    }

    fn most_common_letter(
        &mut self,
        source: &mut dyn TextSource,
    ) -> SourceResult<Option<LetterRanking>> {
        // Insertion order doubles as the tie-break: first appearance wins.
        let mut slots: HashMap<char, usize> = HashMap::new();
        let mut counts: Vec<LetterCount> = Vec::new();

        for_each_line(source, |line| {
            for letter in folded_letters(line) {
                let slot = *slots.entry(letter).or_insert_with(|| {
                    counts.push(LetterCount { letter, count: 0 });
                    counts.len() - 1
                });
                counts[slot].count += 1;
            }
        })?;

        let Some(max) = counts.iter().map(|entry| entry.count).max() else {
            log::debug!("no letters found");
            return Ok(None);
        };

        Ok(Some(
            counts.into_iter().filter(|entry| entry.count == max).collect(),
        ))
    }

    fn avg_letters_per_word(&mut self, source: &mut dyn TextSource) -> SourceResult<f64> {
        if let Some(avg) = self.avg_letters_per_word {
            return Ok(avg);
        }
        log::debug!("average letters per word not cached, calculating");

        let words = self.total_words(source)?;
        let avg = if words == 0 {
            log::debug!("no words found");
            0.0
        } else {
            source.rewind()?;
            let letters = self.total_letters(source)?;
            self.precision.ratio(letters, words)
        };

        self.avg_letters_per_word = Some(avg);
        Ok(avg)
    }
}
