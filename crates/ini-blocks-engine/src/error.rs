use std::path::PathBuf;

/// Failure to read an INI file into memory.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Invalid content found while extracting blocks.
///
/// `line` is the 1-based line number in the file as loaded, comments
/// included.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: key {key:?} contains the ';' character")]
    InvalidKey { line: usize, key: String },
    #[error("line {line}: expected a [section] header or key=value pair, found {content:?}")]
    MalformedLine { line: usize, content: String },
    #[error("line {line}: not valid UTF-8")]
    InvalidUtf8 { line: usize },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidKey { line, .. }
            | ParseError::MalformedLine { line, .. }
            | ParseError::InvalidUtf8 { line } => *line,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
