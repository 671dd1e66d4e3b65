//! Wiki markup rendering for rich-text documents.
//!
//! One depth-first walk over the document tree produces the complete markup
//! string: frames dispatch their children to table, frame, or block
//! rendering; blocks concatenate their fragments; each fragment is escaped,
//! list-rewritten, and style-wrapped on its own.

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{Block, Document, Fragment, Frame, FrameChild, Table, TableCell};

use super::{ConvertStats, RenderOptions, RenderResult};

/// Convert a document to wiki markup.
pub fn to_wiki(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = WikiRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to wiki markup with statistics.
pub fn to_wiki_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = WikiRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// Wiki markup renderer.
pub struct WikiRenderer {
    options: RenderOptions,
    stats: ConvertStats,
    bullet_prefix: Regex,
    ordered_prefix: Regex,
}

impl WikiRenderer {
    /// Create a new wiki renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: ConvertStats::new(),
            bullet_prefix: Regex::new(r"^\s*·\s*").unwrap(),
            ordered_prefix: Regex::new(r"^\s*\d+\.\s").unwrap(),
        }
    }

    /// Render a document to wiki markup.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to wiki markup with conversion statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc)?;
        self.stats.count_text(&content);
        Ok(RenderResult::new(content, self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        let mut output = String::new();
        self.render_frame(&mut output, &doc.root, 0)?;
        log::debug!("rendered {} bytes of wiki markup", output.len());
        Ok(output)
    }

    /// Render a frame's children in traversal order.
    ///
    /// Blocks get exactly one newline after their content; nested frames and
    /// tables append only what their own rendering produces. After all
    /// children the frame contributes one unconditional trailing newline, so
    /// even an empty frame separates itself from whatever follows.
    fn render_frame(&mut self, output: &mut String, frame: &Frame, depth: usize) -> Result<()> {
        if depth >= self.options.max_depth {
            log::warn!(
                "aborting conversion: frame nesting exceeds {} levels",
                self.options.max_depth
            );
            return Err(Error::DepthExceeded(self.options.max_depth));
        }
        if self.options.collect_stats {
            self.stats.add_frame();
        }

        for child in &frame.children {
            match child {
                FrameChild::Table(table) => self.render_table(output, table, depth + 1)?,
                FrameChild::Frame(nested) => self.render_frame(output, nested, depth + 1)?,
                FrameChild::Block(block) => {
                    self.render_block(output, block);
                    output.push('\n');
                }
            }
        }

        output.push('\n');
        Ok(())
    }

    /// Render a table as one pipe-delimited line per row.
    ///
    /// Rows are emitted in increasing row index and columns in increasing
    /// column index; absent cells of a ragged grid render empty rather than
    /// being skipped.
    fn render_table(&mut self, output: &mut String, table: &Table, depth: usize) -> Result<()> {
        if self.options.collect_stats {
            self.stats.add_table();
        }

        let columns = table.column_count();
        for row in 0..table.row_count() {
            output.push_str("| ");
            for column in 0..columns {
                if column > 0 {
                    output.push_str(" | ");
                }
                if let Some(cell) = table.cell_at(row, column) {
                    self.render_cell(output, cell, depth)?;
                }
            }
            output.push_str(" |\n");
        }

        Ok(())
    }

    /// Render a cell's child sequence.
    ///
    /// Children dispatch like a frame's, but a cell-level block gets no
    /// trailing newline: the only separators inside a cell are the ones
    /// nested frames insert themselves.
    fn render_cell(&mut self, output: &mut String, cell: &TableCell, depth: usize) -> Result<()> {
        for child in &cell.children {
            match child {
                FrameChild::Table(nested) => self.render_table(output, nested, depth + 1)?,
                FrameChild::Frame(nested) => self.render_frame(output, nested, depth + 1)?,
                FrameChild::Block(block) => self.render_block(output, block),
            }
        }
        Ok(())
    }

    /// Render a block by concatenating its fragments in order.
    fn render_block(&mut self, output: &mut String, block: &Block) {
        if self.options.collect_stats {
            self.stats.add_block();
        }
        for fragment in &block.fragments {
            self.render_fragment(output, fragment);
        }
    }

    /// Render one fragment: escape, rewrite list prefixes, wrap styles.
    fn render_fragment(&mut self, output: &mut String, fragment: &Fragment) {
        if self.options.collect_stats {
            self.stats.add_fragment();
        }

        let mut text = if self.options.escape_special_chars {
            escape_wiki(&fragment.text)
        } else {
            fragment.text.clone()
        };

        if self.options.rewrite_list_prefixes {
            text = self.rewrite_list_prefix(&text);
        }

        output.push_str(&self.apply_char_format(text, fragment));
    }

    /// Rewrite common editor list conventions into wiki list markers.
    ///
    /// Anchored to the fragment's own text start, so a prefix split across
    /// fragments by a mid-line format change is left alone. The bullet
    /// pattern is tested first; at most one rewrite fires.
    fn rewrite_list_prefix(&self, text: &str) -> String {
        if self.bullet_prefix.is_match(text) {
            return self.bullet_prefix.replace(text, "* ").into_owned();
        }
        self.ordered_prefix.replace(text, "# ").into_owned()
    }

    /// Wrap the rendered text in style delimiters, innermost first:
    /// code, then bold, then italic, then underline.
    fn apply_char_format(&self, text: String, fragment: &Fragment) -> String {
        let format = &fragment.format;
        let mut result = text;

        // URLs are often shown fixed-pitch by editors, but the wiki dialect
        // has its own link formatting, so a code wrap would corrupt them.
        if format.is_fixed_pitch() && !fragment.text.starts_with("http") {
            result = format!("@{}@", result);
        }
        if format.bold {
            result = format!("*{}*", result);
        }
        if format.italic {
            result = format!("_{}_", result);
        }
        if format.underline {
            result = format!("+{}+", result);
        }

        result
    }
}

/// Escape markup-significant characters.
///
/// Each literal `*`, `@`, `+`, `_`, `-`, or `!` is wrapped in a verbatim
/// escape so the wiki renderer never reinterprets it as a delimiter. The
/// wrapper text uses none of those six characters, so no substitution output
/// is ever re-escaped. An escaped delimiter directly inside a matching
/// style wrap (an escaped `@` in a code-wrapped run) is a known fidelity
/// gap of the dialect and is emitted as produced.
fn escape_wiki(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '*' | '@' | '+' | '_' | '-' | '!' => {
                result.push_str("<notextile>");
                result.push(c);
                result.push_str("</notextile>");
            }
            _ => result.push(c),
        }
    }
    result
}
