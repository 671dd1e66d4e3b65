//! Rendering result with conversion statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered wiki markup
    pub content: String,

    /// Conversion statistics
    pub stats: ConvertStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: ConvertStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected during a conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertStats {
    /// Number of frames visited (including the root)
    pub frame_count: u32,

    /// Number of tables rendered
    pub table_count: u32,

    /// Number of blocks rendered
    pub block_count: u32,

    /// Number of fragments rendered
    pub fragment_count: u32,

    /// Approximate word count of the output (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count of the output (excluding whitespace)
    pub char_count: u32,
}

impl ConvertStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment frame count.
    pub fn add_frame(&mut self) {
        self.frame_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment block count.
    pub fn add_block(&mut self) {
        self.block_count += 1;
    }

    /// Increment fragment count.
    pub fn add_fragment(&mut self) {
        self.fragment_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
