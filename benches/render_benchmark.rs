//! Benchmarks for redmark rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic documents of varying shapes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use redmark::model::{Block, Document, Fragment, Frame, Table, TableRow};
use redmark::{to_wiki, RenderOptions};

/// Creates a document with the given number of mixed-style paragraphs.
fn create_paragraph_document(block_count: usize) -> Document {
    let mut root = Frame::new();
    for i in 0..block_count {
        let mut block = Block::new();
        block.add_text(format!("paragraph {} with ", i));
        block.add_fragment(Fragment::bold("bold"));
        block.add_text(" and ");
        block.add_fragment(Fragment::italic("italic"));
        block.add_text(" runs, plus chars to escape: a*b c@d");
        root.add_block(block);
    }
    Document::with_root(root)
}

/// Creates a document with one large table.
fn create_table_document(rows: usize, columns: usize) -> Document {
    let mut table = Table::new();
    for r in 0..rows {
        let cells = (0..columns).map(|c| format!("cell {}x{}", r, c));
        table.add_row(TableRow::from_strings(cells));
    }

    let mut root = Frame::new();
    root.add_table(table);
    Document::with_root(root)
}

/// Creates a chain of nested frames, each holding one block.
fn create_nested_document(depth: usize) -> Document {
    let mut frame = Frame::new();
    frame.add_block(Block::with_text("innermost"));
    for i in 0..depth {
        let mut outer = Frame::new();
        outer.add_block(Block::with_text(format!("level {}", i)));
        outer.add_frame(frame);
        frame = outer;
    }
    Document::with_root(frame)
}

fn bench_paragraphs(c: &mut Criterion) {
    let doc = create_paragraph_document(500);
    let options = RenderOptions::default();

    c.bench_function("render_500_paragraphs", |b| {
        b.iter(|| to_wiki(black_box(&doc), black_box(&options)).unwrap())
    });
}

fn bench_table(c: &mut Criterion) {
    let doc = create_table_document(100, 8);
    let options = RenderOptions::default();

    c.bench_function("render_100x8_table", |b| {
        b.iter(|| to_wiki(black_box(&doc), black_box(&options)).unwrap())
    });
}

fn bench_nested_frames(c: &mut Criterion) {
    let doc = create_nested_document(50);
    let options = RenderOptions::default();

    c.bench_function("render_50_nested_frames", |b| {
        b.iter(|| to_wiki(black_box(&doc), black_box(&options)).unwrap())
    });
}

criterion_group!(benches, bench_paragraphs, bench_table, bench_nested_frames);
criterion_main!(benches);
