// crates/engine/src/source/opener.rs
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use advcounter_shared_kernel::{SourceError, SourceResult};

use super::{DecodedSource, TextSource, resolve_encoding};

/// Port for turning a path and an encoding label into a [`TextSource`].
pub trait FileOpener {
    fn open(&self, path: &Path, encoding: &str) -> SourceResult<Box<dyn TextSource>>;
}

/// Opens documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsOpener;

impl FileOpener for FsOpener {
    fn open(&self, path: &Path, encoding: &str) -> SourceResult<Box<dyn TextSource>> {
        // エンコーディング名の検証はファイルを開く前に行う
        let resolved = resolve_encoding(encoding)?;

        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::NotFound {
                path: path.to_path_buf(),
            },
            _ => SourceError::Open {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        log::debug!("opened {} as {}", path.display(), resolved.name());

        Ok(Box::new(
            DecodedSource::with_encoding(file, resolved, encoding).with_origin(path),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::for_each_line;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn opens_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "first\nsecond").unwrap();

        let mut source = FsOpener.open(file.path(), "utf-8").unwrap();
        let mut lines = Vec::new();
        for_each_line(&mut source, |line| lines.push(line.to_string())).unwrap();
        assert_eq!(lines, ["first", "second"]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = FsOpener.open(&missing, "utf-8").err().unwrap();
        assert!(matches!(err, SourceError::NotFound { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn encoding_checked_before_opening() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = FsOpener.open(&missing, "bogus").err().unwrap();
        assert!(matches!(err, SourceError::UnknownEncoding { .. }));
    }

    #[test]
    fn decoding_error_names_the_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xc3\x28").unwrap();

        let mut source = FsOpener.open(file.path(), "utf-8").unwrap();
        let err = for_each_line(&mut source, |_| {}).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(&file.path().display().to_string()));
        assert!(message.contains("is not in the utf-8 format"));
    }
}
