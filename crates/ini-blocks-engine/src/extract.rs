//! Block extraction over comment-stripped content.

use std::collections::HashMap;

use crate::document::Block;
use crate::error::ParseError;
use crate::header::parse_header;
use crate::lines::{lines, without_terminator};
use crate::strip::{COMMENT_START, Stripped};

/// Separates a key from its value.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Blocks found in a document, keyed by name.
#[derive(Debug, Default)]
pub(crate) struct Blocks {
    pub map: HashMap<String, Block>,
    /// Names in order of first appearance.
    pub order: Vec<String>,
}

impl Blocks {
    fn finish(&mut self, block: Block) {
        if !self.map.contains_key(&block.name) {
            self.order.push(block.name.clone());
        }
        self.map.insert(block.name.clone(), block);
    }
}

/// Split the stripped content into blocks.
///
/// Lines before the first header are ignored. Inside a block every
/// non-blank line must be a header or a `key=value` pair whose key has no
/// `;`. Key and value are kept exactly as written around the first `=`.
pub(crate) fn extract_blocks(stripped: &Stripped) -> Result<Blocks, ParseError> {
    let mut blocks = Blocks::default();
    let mut current: Option<Block> = None;

    for (idx, line) in lines(&stripped.content).enumerate() {
        let number = stripped.origins.get(idx).copied().unwrap_or(idx + 1);
        let text = match std::str::from_utf8(without_terminator(line)) {
            Ok(text) => text,
            Err(_) if current.is_none() => {
                log::debug!("line {number}: ignoring non-UTF-8 content outside any block");
                continue;
            }
            Err(_) => return Err(ParseError::InvalidUtf8 { line: number }),
        };

        if let Some(name) = parse_header(text) {
            log::trace!("line {number}: opening block [{name}]");
            if let Some(done) = current.replace(Block::new(name, line)) {
                blocks.finish(done);
            }
            continue;
        }

        let Some(block) = current.as_mut() else {
            log::debug!("line {number}: ignoring content outside any block");
            continue;
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }
        match trimmed.split_once(KEY_VALUE_SEPARATOR) {
            Some((key, _)) if key.contains(COMMENT_START as char) => {
                return Err(ParseError::InvalidKey {
                    line: number,
                    key: key.to_string(),
                });
            }
            Some((key, value)) => block.insert(key, value, line),
            None => {
                return Err(ParseError::MalformedLine {
                    line: number,
                    content: trimmed.to_string(),
                });
            }
        }
    }

    if let Some(done) = current {
        blocks.finish(done);
    }
    Ok(blocks)
}
