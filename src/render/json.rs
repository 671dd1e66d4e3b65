//! JSON rendering for rich-text documents.

use crate::error::Result;
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    Ok(result?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Frame};

    #[test]
    fn test_to_json_pretty() {
        let mut frame = Frame::new();
        frame.add_block(Block::with_text("Hello"));
        let doc = Document::with_root(frame);

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"block\""));
        assert!(json.contains("Hello"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let doc = Document::new();
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }
}
