use std::collections::{BTreeMap, HashMap};

use crate::error::ParseError;
use crate::extract::{Blocks, extract_blocks};
use crate::lines::{LineSource, Lines, lines};
use crate::loader::{LoadOptions, normalize_line_endings};
use crate::strip::strip_comments;

/// One `[name]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub(crate) name: String,
    pub(crate) content: Vec<u8>,
    pub(crate) entries: BTreeMap<String, String>,
}

impl Block {
    pub(crate) fn new(name: &str, header_line: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            content: header_line.to_vec(),
            entries: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The header and key/value lines of this block, comments removed.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Record a pair. A repeated key replaces the earlier value.
    pub(crate) fn insert(&mut self, key: &str, value: &str, line: &[u8]) {
        self.content.extend_from_slice(line);
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// An INI file held in memory.
///
/// Created unparsed by [`load`](crate::load) or [`Document::from_bytes`];
/// [`Document::parse`] fills in the stripped content and the blocks.
#[derive(Debug, Clone, Default)]
pub struct Document {
    raw: Vec<u8>,
    stripped: Vec<u8>,
    blocks: HashMap<String, Block>,
    order: Vec<String>,
}

impl Document {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, options: &LoadOptions) -> Self {
        let mut raw = bytes.into();
        if options.normalize_line_endings {
            raw = normalize_line_endings(&raw);
        }
        Self {
            raw,
            ..Self::default()
        }
    }

    /// Strip comments and extract blocks, replacing any earlier result.
    ///
    /// On error the stripped content is kept but no blocks are exposed.
    pub fn parse(&mut self) -> Result<(), ParseError> {
        self.blocks.clear();
        self.order.clear();

        let stripped = strip_comments(&self.raw);
        let result = extract_blocks(&stripped);
        self.stripped = stripped.content;

        let Blocks { map, order } = result?;
        log::debug!("parsed {} blocks", map.len());
        self.blocks = map;
        self.order = order;
        Ok(())
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn stripped(&self) -> &[u8] {
        &self.stripped
    }

    pub fn lines(&self, source: LineSource) -> Lines<'_> {
        match source {
            LineSource::Raw => lines(&self.raw),
            LineSource::Stripped => lines(&self.stripped),
        }
    }

    /// The key/value pairs of block `name`, or `None` if there is no such
    /// block.
    pub fn block_data(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.blocks.get(name).map(Block::entries)
    }

    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.get(name)
    }

    /// Blocks in the order their names first appear.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.order.iter().filter_map(|name| self.blocks.get(name))
    }

    pub fn get(&self, block: &str, key: &str) -> Option<&str> {
        self.blocks.get(block)?.get(key)
    }
}
