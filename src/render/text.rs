//! Plain text rendering for rich-text documents.

use crate::model::Document;

/// Convert a document to plain text, dropping all styling and structure.
pub fn to_text(doc: &Document) -> String {
    doc.plain_text()
}
