// crates/engine/src/source/decoded.rs
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::PathBuf;

use advcounter_shared_kernel::{SourceError, SourceResult};
use encoding_rs::{Decoder, DecoderResult, Encoding};

use super::{TextSource, find_line_break};

const CHUNK_SIZE: usize = 8 * 1024;

/// Looks up an encoding by its WHATWG label (`utf-8`, `latin1`, `shift_jis`, ...).
pub fn resolve_encoding(label: &str) -> SourceResult<&'static Encoding> {
    let trimmed = label.trim();
    Encoding::for_label(trimmed.as_bytes())
        .or_else(|| Encoding::for_label(trimmed.replace('_', "-").as_bytes()))
        .ok_or_else(|| SourceError::UnknownEncoding {
            label: label.to_string(),
        })
}

/// Streams lines out of a byte reader, decoding them with a declared encoding.
///
/// Bytes that are not valid in the declared encoding fail the read with
/// [`SourceError::Decoding`]; nothing is replaced silently.
pub struct DecodedSource<R> {
    inner: R,
    encoding: &'static Encoding,
    label: String,
    origin: PathBuf,
    decoder: Decoder,
    raw: Vec<u8>,
    pending: String,
    cursor: usize,
    scanned: usize,
    consumed: u64,
    eof: bool,
}

impl<R: Read + Seek> DecodedSource<R> {
    pub fn new(inner: R, label: &str) -> SourceResult<Self> {
        let encoding = resolve_encoding(label)?;
        Ok(Self::with_encoding(inner, encoding, label))
    }

    pub fn with_encoding(inner: R, encoding: &'static Encoding, label: impl Into<String>) -> Self {
        Self {
            inner,
            encoding,
            label: label.into(),
            origin: PathBuf::from("<memory>"),
            decoder: encoding.new_decoder_with_bom_removal(),
            raw: vec![0; CHUNK_SIZE],
            pending: String::new(),
            cursor: 0,
            scanned: 0,
            consumed: 0,
            eof: false,
        }
    }

    /// Sets the path reported in decoding errors.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<PathBuf>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Reads one chunk and appends its decoded text to `pending`.
    fn fill(&mut self) -> SourceResult<()> {
        if self.cursor > 0 {
            self.pending.drain(..self.cursor);
            self.scanned = self.scanned.saturating_sub(self.cursor);
            self.cursor = 0;
        }

        let n = loop {
            match self.inner.read(&mut self.raw) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        };
        let last = n == 0;

        let mut start = 0;
        loop {
            let needed = self
                .decoder
                .max_utf8_buffer_length_without_replacement(n - start)
                .unwrap_or(CHUNK_SIZE * 4);
            self.pending.reserve(needed);

            let (result, read) = self.decoder.decode_to_string_without_replacement(
                &self.raw[start..n],
                &mut self.pending,
                last,
            );
            start += read;

            match result {
                DecoderResult::InputEmpty => break,
                DecoderResult::OutputFull => {}
                DecoderResult::Malformed(bad, trailing) => {
                    let offset = (self.consumed + start as u64)
                        .saturating_sub(u64::from(bad) + u64::from(trailing));
                    log::debug!(
                        "malformed {} input in {} at byte {offset}",
                        self.label,
                        self.origin.display()
                    );
                    return Err(SourceError::Decoding {
                        path: self.origin.clone(),
                        encoding: self.label.clone(),
                        offset,
                    });
                }
            }
        }

        self.consumed += n as u64;
        self.eof = last;
        Ok(())
    }
}

impl<R: Read + Seek> TextSource for DecodedSource<R> {
    fn read_line(&mut self, buf: &mut String) -> SourceResult<bool> {
        buf.clear();
        loop {
            // `pending[cursor..scanned]` is already known to hold no break
            let from = self.scanned.max(self.cursor);
            if let Some((end, term)) = find_line_break(&self.pending[from..], self.eof) {
                let stop = from + end;
                buf.push_str(&self.pending[self.cursor..stop]);
                self.cursor = stop + term;
                self.scanned = self.cursor;
                return Ok(true);
            }
            if self.eof {
                let rest = &self.pending[self.cursor..];
                if rest.is_empty() {
                    return Ok(false);
                }
                // 末尾に改行がない最終行
                buf.push_str(rest);
                self.cursor = self.pending.len();
                self.scanned = self.cursor;
                return Ok(true);
            }
            // a trailing `\r` is rescanned once the next chunk shows what follows it
            self.scanned = self.pending.len() - usize::from(self.pending.ends_with('\r'));
            self.fill()?;
        }
    }

    fn rewind(&mut self) -> SourceResult<()> {
        self.inner.seek(SeekFrom::Start(0))?;
        self.decoder = self.encoding.new_decoder_with_bom_removal();
        self.pending.clear();
        self.cursor = 0;
        self.scanned = 0;
        self.consumed = 0;
        self.eof = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::for_each_line;
    use std::io::Cursor;

    fn lines_of(bytes: Vec<u8>, label: &str) -> SourceResult<Vec<String>> {
        let mut source = DecodedSource::new(Cursor::new(bytes), label)?;
        let mut lines = Vec::new();
        for_each_line(&mut source, |line| lines.push(line.to_string()))?;
        Ok(lines)
    }

    #[test]
    fn decodes_utf8_lines() {
        let lines = lines_of("héllo\nwörld\n".as_bytes().to_vec(), "utf-8").unwrap();
        assert_eq!(lines, ["héllo", "wörld"]);
    }

    #[test]
    fn invalid_utf8_is_a_decoding_error() {
        let err = lines_of(b"ok\nab\xffcd\n".to_vec(), "utf-8").unwrap_err();
        assert!(matches!(err, SourceError::Decoding { ref encoding, .. } if encoding == "utf-8"));
    }

    #[test]
    fn legacy_single_byte_encoding() {
        let lines = lines_of(b"caf\xe9".to_vec(), "latin1").unwrap();
        assert_eq!(lines, ["café"]);
    }

    #[test]
    fn utf16_with_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "ab\ncd".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let lines = lines_of(bytes, "utf-16le").unwrap();
        assert_eq!(lines, ["ab", "cd"]);
    }

    #[test]
    fn crlf_split_across_chunks() {
        let mut text = "a".repeat(CHUNK_SIZE - 1);
        text.push_str("\r\nb");
        let lines = lines_of(text.into_bytes(), "utf-8").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "b");
    }

    #[test]
    fn long_unbroken_line_then_split_crlf() {
        // the `\r` lands on the last byte of a chunk
        let len = (4 << 20) - 1;
        assert_eq!(len % CHUNK_SIZE, CHUNK_SIZE - 1);
        let mut text = "a".repeat(len);
        text.push_str("\r\nb");
        let lines = lines_of(text.into_bytes(), "utf-8").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), len);
        assert!(lines[0].bytes().all(|b| b == b'a'));
        assert_eq!(lines[1], "b");
    }

    #[test]
    fn multibyte_char_split_across_chunks() {
        let mut text = "a".repeat(CHUNK_SIZE - 1);
        text.push('é');
        let lines = lines_of(text.into_bytes(), "utf-8").unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with('é'));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = resolve_encoding("klingon").unwrap_err();
        assert!(matches!(err, SourceError::UnknownEncoding { .. }));
        assert!(resolve_encoding("UTF-8").is_ok());
        assert!(resolve_encoding("utf_8").is_ok());
    }

    #[test]
    fn rewind_replays_the_document() {
        let mut source = DecodedSource::new(Cursor::new(b"x\ny".to_vec()), "utf-8").unwrap();
        let mut count = 0;
        for_each_line(&mut source, |_| count += 1).unwrap();
        source.rewind().unwrap();
        for_each_line(&mut source, |_| count += 1).unwrap();
        assert_eq!(count, 4);
    }
}
