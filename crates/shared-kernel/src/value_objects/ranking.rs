// crates/shared-kernel/src/value_objects/ranking.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// A letter together with the number of times it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterCount {
    pub letter: char,
    pub count: u64,
}

/// Letters sharing the highest frequency, in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterRanking(Vec<LetterCount>);

impl LetterRanking {
    pub fn new(entries: Vec<LetterCount>) -> Self {
        Self(entries)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LetterCount> {
        self.0.iter()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().map(|entry| entry.letter)
    }

    /// Frequency of the leading entry, `0` when empty.
    pub fn top_count(&self) -> u64 {
        self.0.first().map_or(0, |entry| entry.count)
    }
}

impl<'a> IntoIterator for &'a LetterRanking {
    type Item = &'a LetterCount;
    type IntoIter = std::slice::Iter<'a, LetterCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<LetterCount> for LetterRanking {
    fn from_iter<I: IntoIterator<Item = LetterCount>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Letters joined by single spaces, e.g. `a b`.
impl fmt::Display for LetterRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, letter) in self.letters().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
