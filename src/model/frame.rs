//! Frame-level types.

use super::{Block, Table};
use serde::{Deserialize, Serialize};

/// A container node holding an ordered list of children.
///
/// Frames are the structural backbone of the document tree. A frame carries
/// no styling of its own; child order is traversal order and is preserved
/// exactly in the rendered output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Frame {
    /// Children in traversal order
    pub children: Vec<FrameChild>,
}

impl Frame {
    /// Create a new empty frame.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Create a frame from a list of children.
    pub fn with_children(children: Vec<FrameChild>) -> Self {
        Self { children }
    }

    /// Add a child to the frame.
    pub fn add_child(&mut self, child: FrameChild) {
        self.children.push(child);
    }

    /// Add a block to the frame.
    pub fn add_block(&mut self, block: Block) {
        self.children.push(FrameChild::Block(block));
    }

    /// Add a nested frame.
    pub fn add_frame(&mut self, frame: Frame) {
        self.children.push(FrameChild::Frame(frame));
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.children.push(FrameChild::Table(table));
    }

    /// Check if the frame has any children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Get the number of children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Get plain text content of the frame.
    pub fn plain_text(&self) -> String {
        self.children
            .iter()
            .map(|child| match child {
                FrameChild::Frame(f) => f.plain_text(),
                FrameChild::Table(t) => t.plain_text(),
                FrameChild::Block(b) => b.plain_text(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A child of a frame.
///
/// Exactly one of the three node kinds; rendering dispatches on the variant
/// with an exhaustive match, so no type probing is needed during traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FrameChild {
    /// A nested frame
    Frame(Frame),

    /// A table (a specialized frame with a rectangular cell grid)
    Table(Table),

    /// A paragraph-level block of fragments
    Block(Block),
}

impl FrameChild {
    /// Check if this child is a nested frame.
    pub fn is_frame(&self) -> bool {
        matches!(self, FrameChild::Frame(_))
    }

    /// Check if this child is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, FrameChild::Table(_))
    }

    /// Check if this child is a block.
    pub fn is_block(&self) -> bool {
        matches!(self, FrameChild::Block(_))
    }
}
