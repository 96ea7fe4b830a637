// crates/engine/src/drivers/fake.rs
use advcounter_shared_kernel::{LetterCount, LetterRanking, Precision, SourceResult};

use crate::analyzer::TextAnalyzer;
use crate::source::TextSource;

/// Fixed-answer driver for exercising the wiring without real input.
///
/// The source is never read.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fake {
    precision: Precision,
}

impl Fake {
    pub const NAME: &'static str = "fake";

    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }
}

impl TextAnalyzer for Fake {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn precision(&self) -> Precision {
        self.precision
    }

    fn total_lines(&mut self, _source: &mut dyn TextSource) -> SourceResult<u64> {
        Ok(2)
    }

    fn total_words(&mut self, _source: &mut dyn TextSource) -> SourceResult<u64> {
        Ok(1)
    }

    fn total_letters(&mut self, _source: &mut dyn TextSource) -> SourceResult<u64> {
        Ok(2)
    }

    fn most_common_letter(
        &mut self,
        _source: &mut dyn TextSource,
    ) -> SourceResult<Option<LetterRanking>> {
        Ok(Some(LetterRanking::new(vec![LetterCount {
            letter: 'a',
            count: 1,
        }])))
    }

    fn avg_letters_per_word(&mut self, _source: &mut dyn TextSource) -> SourceResult<f64> {
        Ok(2.0)
    }
}
