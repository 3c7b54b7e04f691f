use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::document::Document;
use crate::error::LoadError;

/// How raw bytes are prepared before parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Rewrite `\r\n` as `\n`.
    pub normalize_line_endings: bool,
}

impl LoadOptions {
    /// Options matching the line-ending convention of the host platform.
    pub fn native() -> Self {
        Self {
            normalize_line_endings: cfg!(windows),
        }
    }
}

/// Read an INI file into an unparsed [`Document`].
pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Document, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("loaded {} bytes from {}", bytes.len(), path.display());
    Ok(Document::from_bytes(bytes, options))
}

/// Replace every `\r\n` with `\n`. A lone `\r` is left alone.
pub fn normalize_line_endings(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter().copied().peekable();
    while let Some(b) = iter.next() {
        if b == b'\r' && iter.peek() == Some(&b'\n') {
            continue;
        }
        out.push(b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_load_reads_whole_file_without_parsing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("conf.ini");
        fs::write(&path, "[A]\nk=v ;c\n").unwrap();

        let doc = load(&path, &LoadOptions::default()).unwrap();

        assert_eq!(doc.raw(), b"[A]\nk=v ;c\n");
        assert!(doc.stripped().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let path = PathBuf::from("/this/path/does/not/exist.ini");
        let result = load(&path, &LoadOptions::default());
        assert!(matches!(result, Err(LoadError::NotFound(p)) if p == path));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = load(temp_dir.path(), &LoadOptions::default());
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_load_normalizes_when_asked() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dos.ini");
        fs::write(&path, "[A]\r\nk=v\r\n").unwrap();

        let options = LoadOptions {
            normalize_line_endings: true,
        };
        let doc = load(&path, &options).unwrap();

        assert_eq!(doc.raw(), b"[A]\nk=v\n");
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings(b"a\r\nb\r\n"), b"a\nb\n");
        assert_eq!(normalize_line_endings(b"a\rb\n"), b"a\rb\n");
        assert_eq!(normalize_line_endings(b"a\r\r\n"), b"a\r\n");
        assert_eq!(normalize_line_endings(b""), b"");
    }
}
