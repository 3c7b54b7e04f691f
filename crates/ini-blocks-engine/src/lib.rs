//! # ini-blocks-engine
//!
//! Parses flat INI files: `[name]` sections holding `key=value` lines, with
//! `;` comments.
//!
//! ## Pipeline
//!
//! ```text
//! bytes → (CRLF normalization) → strip comments → extract blocks
//!         loader                  strip            extract
//! ```
//!
//! Loading only reads bytes. [`Document::parse`] runs the two line passes
//! and can be called again to recompute everything from the raw content.
//!
//! ## Comments
//!
//! - A line starting with `;` is removed.
//! - A `;` right after a space, tab or `]` ends the line; the space or tab
//!   goes with it.
//! - Any other `;` is text: `key=valwith; a comment` keeps its value.
//!
//! ## Quick Start
//!
//! ```
//! use ini_blocks_engine::{Document, LineSource, LoadOptions};
//!
//! let mut doc = Document::from_bytes(
//!     "[Block1]\nkey1=val1 ;note\n",
//!     &LoadOptions::default(),
//! );
//! doc.parse().unwrap();
//!
//! assert_eq!(doc.stripped(), b"[Block1]\nkey1=val1\n");
//! assert_eq!(doc.get("Block1", "key1"), Some("val1"));
//! assert_eq!(doc.lines(LineSource::Stripped).count(), 2);
//! assert!(doc.block_data("Block2").is_none());
//! ```

pub mod document;
pub mod error;
pub mod extract;
pub mod header;
pub mod lines;
pub mod loader;
pub mod strip;

use std::path::Path;

pub use document::{Block, Document};
pub use error::{Error, LoadError, ParseError};
pub use lines::{LineSource, Lines};
pub use loader::{LoadOptions, load, normalize_line_endings};
pub use strip::{Stripped, strip_comments};

/// Load `path` and parse it in one step.
pub fn load_and_parse(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Document, Error> {
    let mut doc = load(path, options)?;
    doc.parse()?;
    Ok(doc)
}
