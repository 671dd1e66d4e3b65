//! Block and fragment-level types.

use serde::{Deserialize, Serialize};

/// A paragraph-level block of text.
///
/// A block holds an ordered sequence of fragments; fragment order is
/// traversal order. Adjacent fragments belong to one logical line, so
/// rendering concatenates them without separators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    /// Fragments in the block
    pub fragments: Vec<Fragment>,
}

impl Block {
    /// Create a new empty block.
    pub fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Create a block with a single plain-text fragment.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut b = Self::new();
        b.add_text(text);
        b
    }

    /// Create a block from fragments.
    pub fn with_fragments(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// Add a plain-text fragment to the block.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.fragments.push(Fragment::new(text));
    }

    /// Add a styled fragment.
    pub fn add_fragment(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    /// Check if the block has no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// A maximal run of text sharing one character format.
///
/// Format changes always start a new fragment, so all text within one
/// fragment carries exactly one format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fragment {
    /// The text content
    pub text: String,

    /// Character format applied to the whole run
    pub format: CharFormat,
}

impl Fragment {
    /// Create a new fragment with default format.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: CharFormat::default(),
        }
    }

    /// Create a fragment with an explicit format.
    pub fn with_format(text: impl Into<String>, format: CharFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }

    /// Create a bold fragment.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: CharFormat {
                bold: true,
                ..Default::default()
            },
        }
    }

    /// Create an italic fragment.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: CharFormat {
                italic: true,
                ..Default::default()
            },
        }
    }

    /// Create a fixed-pitch (code) fragment.
    pub fn code(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: CharFormat {
                fixed_pitch: true,
                ..Default::default()
            },
        }
    }

    /// Check if this fragment is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Character format attached to a fragment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CharFormat {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Explicit fixed-pitch flag
    pub fixed_pitch: bool,

    /// Font family name
    pub font_family: Option<String>,
}

impl CharFormat {
    /// Check if the format renders in a fixed-pitch (code) font.
    ///
    /// True for the explicit flag or for the conventional fixed-pitch
    /// family name used by the producing editors.
    pub fn is_fixed_pitch(&self) -> bool {
        self.fixed_pitch || self.font_family.as_deref() == Some("Courier")
    }

    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.underline || self.is_fixed_pitch()
    }
}
