//! Comment removal.
//!
//! A line whose first byte is `;` is dropped. Otherwise the first `;` that
//! follows a space, a tab or a `]` starts a trailing comment and the rest of
//! the line is cut. A `;` glued to the text before it is ordinary content,
//! so `key=a;b` keeps its value intact.

use crate::lines::{LINE_END, lines};

/// Marks a comment.
pub const COMMENT_START: u8 = b';';

/// UTF-8 byte-order mark, dropped from the start of the input.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Output of [`strip_comments`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stripped {
    /// Content with comments removed.
    pub content: Vec<u8>,
    /// 1-based raw line number of every line in `content`, in order.
    pub origins: Vec<usize>,
}

/// Remove whole-line and trailing comments from `raw`.
pub fn strip_comments(raw: &[u8]) -> Stripped {
    log::trace!("stripping comments from {} bytes", raw.len());
    let raw = raw.strip_prefix(UTF8_BOM).unwrap_or(raw);

    let mut out = Stripped::default();
    for (idx, line) in lines(raw).enumerate() {
        if line[0] == COMMENT_START {
            continue;
        }
        match trailing_comment(line) {
            Some(cut) => {
                out.content.extend_from_slice(&line[..cut]);
                out.content.push(LINE_END);
            }
            None => out.content.extend_from_slice(line),
        }
        out.origins.push(idx + 1);
    }

    log::trace!(
        "stripped to {} bytes over {} lines",
        out.content.len(),
        out.origins.len()
    );
    out
}

/// Where to cut `line` if it carries a trailing comment.
///
/// Whitespace before the marker goes with the comment, a closing bracket
/// stays so that `[name];note` is still a header.
fn trailing_comment(line: &[u8]) -> Option<usize> {
    (1..line.len())
        .find(|&i| line[i] == COMMENT_START && matches!(line[i - 1], b' ' | b'\t' | b']'))
        .map(|i| if line[i - 1] == b']' { i } else { i - 1 })
}
