//! # redmark
//!
//! Rich-text document conversion to Redmine/Textile-style wiki markup.
//!
//! This library takes an in-memory rich-text document tree (frames, tables,
//! blocks, and styled text fragments) and renders it as lightweight wiki
//! markup: `*bold*`, `_italic_`, `+underline+`, `@code@`, `* `/`# ` list
//! markers, and `| ... |` table rows.
//!
//! ## Quick Start
//!
//! ```
//! use redmark::model::{Block, Document, Fragment, Frame};
//! use redmark::{to_wiki, RenderOptions};
//!
//! fn main() -> redmark::Result<()> {
//!     let mut block = Block::new();
//!     block.add_text("a ");
//!     block.add_fragment(Fragment::bold("bold"));
//!     block.add_text(" word");
//!
//!     let mut root = Frame::new();
//!     root.add_block(block);
//!     let doc = Document::with_root(root);
//!
//!     let markup = to_wiki(&doc, &RenderOptions::default())?;
//!     assert_eq!(markup, "a *bold* word\n\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Structure preservation**: nested frames, tables, and block order
//!   carry through to the output unchanged
//! - **Character escaping**: markup-significant characters render verbatim
//! - **List heuristics**: common bullet and numbering conventions become
//!   wiki list markers
//! - **JSON documents**: the whole tree (de)serializes with serde

pub mod error;
pub mod model;
pub mod render;
pub mod sink;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Block, CharFormat, Document, Fragment, Frame, FrameChild, Table, TableCell, TableRow,
};
pub use render::{
    to_json, to_text, to_wiki, to_wiki_with_stats, ConvertStats, JsonFormat, RenderOptions,
    RenderResult,
};
pub use sink::{MarkupSink, StringSink, WriteSink};

use std::path::Path;

/// Parse a JSON-serialized document tree.
///
/// # Example
///
/// ```
/// let doc = redmark::parse_json(r#"{"root":{"children":[]}}"#).unwrap();
/// assert!(doc.is_empty());
/// ```
pub fn parse_json(data: &str) -> Result<Document> {
    Ok(serde_json::from_str(data)?)
}

/// Parse a JSON-serialized document tree from a file.
pub fn parse_json_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let data = std::fs::read_to_string(path)?;
    parse_json(&data)
}

/// Convert a document and hand the markup to a sink.
///
/// The sink receives the complete string exactly once per call.
pub fn convert_to(
    doc: &Document,
    options: &RenderOptions,
    sink: &mut dyn MarkupSink,
) -> Result<()> {
    let markup = render::to_wiki(doc, options)?;
    sink.accept(&markup)
}

/// Builder for converting rich-text documents.
///
/// # Example
///
/// ```
/// use redmark::{Redmark, Document};
///
/// let markup = Redmark::new()
///     .with_max_depth(16)
///     .convert(&Document::new())?;
/// assert_eq!(markup, "\n");
/// # Ok::<(), redmark::Error>(())
/// ```
pub struct Redmark {
    render_options: RenderOptions,
}

impl Redmark {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Set the maximum frame nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.render_options = self.render_options.with_max_depth(depth);
        self
    }

    /// Enable or disable character escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.render_options = self.render_options.with_escaping(escape);
        self
    }

    /// Enable or disable list-prefix rewriting.
    pub fn with_list_rewrites(mut self, rewrite: bool) -> Self {
        self.render_options = self.render_options.with_list_rewrites(rewrite);
        self
    }

    /// Convert a document to wiki markup.
    pub fn convert(&self, doc: &Document) -> Result<String> {
        render::to_wiki(doc, &self.render_options)
    }

    /// Convert a document and report statistics alongside the markup.
    pub fn convert_with_stats(&self, doc: &Document) -> Result<RenderResult> {
        render::to_wiki_with_stats(doc, &self.render_options)
    }

    /// Convert a document and hand the markup to a sink.
    pub fn convert_to(&self, doc: &Document, sink: &mut dyn MarkupSink) -> Result<()> {
        convert_to(doc, &self.render_options, sink)
    }
}

impl Default for Redmark {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = Redmark::default();
        assert_eq!(builder.render_options.max_depth, 64);
        assert!(builder.render_options.escape_special_chars);
    }

    #[test]
    fn test_builder_chained() {
        let builder = Redmark::new()
            .with_max_depth(8)
            .with_escaping(false)
            .with_list_rewrites(false);

        assert_eq!(builder.render_options.max_depth, 8);
        assert!(!builder.render_options.escape_special_chars);
        assert!(!builder.render_options.rewrite_list_prefixes);
    }

    #[test]
    fn test_parse_json_empty_document() {
        let doc = parse_json(r#"{"root":{"children":[]}}"#).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_json_invalid() {
        let result = parse_json("not a document");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_convert_empty_document() {
        let markup = Redmark::new().convert(&Document::new()).unwrap();
        assert_eq!(markup, "\n");
    }

    #[test]
    fn test_convert_to_sink() {
        let mut frame = Frame::new();
        frame.add_block(Block::with_text("hi"));
        let doc = Document::with_root(frame);

        let mut sink = StringSink::new();
        convert_to(&doc, &RenderOptions::default(), &mut sink).unwrap();
        assert_eq!(sink.content(), "hi\n\n");
    }
}
