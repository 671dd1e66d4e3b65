//! Document-level types.

use super::Frame;
use serde::{Deserialize, Serialize};

/// A rich-text document.
///
/// A document owns exactly one root frame; all content hangs off it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// The root frame
    pub root: Frame,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            root: Frame::new(),
        }
    }

    /// Create a document around an existing root frame.
    pub fn with_root(root: Frame) -> Self {
        Self { root }
    }

    /// Get the root frame.
    pub fn root(&self) -> &Frame {
        &self.root
    }

    /// Check if the document has any content.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.root.plain_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.plain_text(), "");
    }

    #[test]
    fn test_document_with_root() {
        let mut root = Frame::new();
        root.add_block(Block::with_text("hello"));
        let doc = Document::with_root(root);

        assert!(!doc.is_empty());
        assert_eq!(doc.plain_text(), "hello");
    }
}
