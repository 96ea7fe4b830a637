// crates/engine/src/source/mod.rs
//! Line-oriented text sources consumed by the analyzers.

mod decoded;
mod memory;
mod opener;

pub use decoded::{DecodedSource, resolve_encoding};
pub use memory::MemorySource;
pub use opener::{FileOpener, FsOpener};

use advcounter_shared_kernel::SourceResult;

/// A rewindable sequence of lines.
///
/// Lines are delivered without their terminator. `\n`, `\r\n` and a lone `\r`
/// all end a line; a trailing fragment without terminator is still a line.
pub trait TextSource {
    /// Replaces `buf` with the next line. Returns `false` once the input is exhausted.
    fn read_line(&mut self, buf: &mut String) -> SourceResult<bool>;

    /// Moves the cursor back to the start of the document.
    fn rewind(&mut self) -> SourceResult<()>;
}

impl<T: TextSource + ?Sized> TextSource for Box<T> {
    fn read_line(&mut self, buf: &mut String) -> SourceResult<bool> {
        (**self).read_line(buf)
    }

    fn rewind(&mut self) -> SourceResult<()> {
        (**self).rewind()
    }
}

/// Calls `f` for every remaining line of `source`.
pub fn for_each_line<S, F>(source: &mut S, mut f: F) -> SourceResult<()>
where
    S: TextSource + ?Sized,
    F: FnMut(&str),
{
    let mut line = String::new();
    while source.read_line(&mut line)? {
        f(&line);
    }
    Ok(())
}

/// Finds the next line break in `text`, returning `(line_end, terminator_len)`.
///
/// A `\r` in the last position is reported as `None` unless `at_eof`, since the
/// following chunk may still start with `\n`.
pub(crate) fn find_line_break(text: &str, at_eof: bool) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let pos = bytes.iter().position(|&b| b == b'\n' || b == b'\r')?;
    if bytes[pos] == b'\n' {
        return Some((pos, 1));
    }
    match bytes.get(pos + 1) {
        Some(b'\n') => Some((pos, 2)),
        Some(_) => Some((pos, 1)),
        None if at_eof => Some((pos, 1)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_break_variants() {
        assert_eq!(find_line_break("ab\ncd", false), Some((2, 1)));
        assert_eq!(find_line_break("ab\r\ncd", false), Some((2, 2)));
        assert_eq!(find_line_break("ab\rcd", false), Some((2, 1)));
        assert_eq!(find_line_break("abcd", true), None);
    }

    #[test]
    fn trailing_carriage_return_waits_for_more_input() {
        assert_eq!(find_line_break("ab\r", false), None);
        assert_eq!(find_line_break("ab\r", true), Some((2, 1)));
    }
}
