//! Line splitting shared by the stripping and extraction passes.

/// The line terminator. CRLF input is only understood after
/// [`normalize_line_endings`](crate::loader::normalize_line_endings).
pub const LINE_END: u8 = b'\n';

/// Which buffer of a [`Document`](crate::Document) to read lines from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSource {
    /// The file content as loaded.
    Raw,
    /// The content with comments removed. Empty until the document is parsed.
    Stripped,
}

/// Iterator over the lines of a byte buffer.
///
/// Each line keeps its trailing `\n`; only the final line of a buffer
/// without a trailing newline is yielded without one. Zero-length lines are
/// never produced, but a blank line is one byte long and is kept.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let end = match self.rest.iter().position(|&b| b == LINE_END) {
            Some(idx) => idx + 1,
            None => self.rest.len(),
        };
        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}

/// Split `buf` into lines. Cheap to call again for a fresh pass.
pub fn lines(buf: &[u8]) -> Lines<'_> {
    Lines { rest: buf }
}

/// Strip the trailing `\n`, if any.
pub fn without_terminator(line: &[u8]) -> &[u8] {
    line.strip_suffix(&[LINE_END]).unwrap_or(line)
}
