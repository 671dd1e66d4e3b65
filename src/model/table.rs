//! Table types.

use super::{Block, FrameChild};
use serde::{Deserialize, Serialize};

/// A table structure.
///
/// A table is a specialized frame holding a grid of cells. It always appears
/// as a child of some enclosing frame, never as a block. Cell content is
/// itself a frame-like child sequence, so tables nest recursively.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    ///
    /// For a ragged grid this is the widest row, so no cell is ever dropped
    /// during rendering.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    /// Get the cell at the given row and column, if present.
    pub fn cell_at(&self, row: usize, column: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.cells.get(column))
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row of plain-text cells.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
///
/// Cell content is an ordered child sequence, processed during rendering
/// exactly as a frame's children are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableCell {
    /// Cell content in traversal order
    pub children: Vec<FrameChild>,
}

impl TableCell {
    /// Create a cell with a single plain-text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            children: vec![FrameChild::Block(Block::with_text(text))],
        }
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Create a cell with explicit children.
    pub fn with_children(children: Vec<FrameChild>) -> Self {
        Self { children }
    }

    /// Add a child to the cell.
    pub fn add_child(&mut self, child: FrameChild) {
        self.children.push(child);
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.children
            .iter()
            .map(|child| match child {
                FrameChild::Frame(f) => f.plain_text(),
                FrameChild::Table(t) => t.plain_text(),
                FrameChild::Block(b) => b.plain_text(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if the cell has no content.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
