// crates/engine/src/source/memory.rs
use advcounter_shared_kernel::SourceResult;

use super::{TextSource, find_line_break};

/// An in-memory document.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    text: String,
    cursor: usize,
}

impl MemorySource {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
        }
    }
}

impl TextSource for MemorySource {
    fn read_line(&mut self, buf: &mut String) -> SourceResult<bool> {
        buf.clear();
        let rest = &self.text[self.cursor..];
        if rest.is_empty() {
            return Ok(false);
        }
        match find_line_break(rest, true) {
            Some((end, term)) => {
                buf.push_str(&rest[..end]);
                self.cursor += end + term;
            }
            None => {
                buf.push_str(rest);
                self.cursor = self.text.len();
            }
        }
        Ok(true)
    }

    fn rewind(&mut self) -> SourceResult<()> {
        self.cursor = 0;
        Ok(())
    }
}
