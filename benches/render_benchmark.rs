//! Row rendering benchmark: tab expansion and cursor projection cost.
//!
//! Rendering runs after every keystroke that mutates a row, so it has to
//! stay well under a millisecond even for pathological lines.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quill::{Row, TextBuffer, Viewport};

fn row_render_plain(c: &mut Criterion) {
    let line = "fn main() { println!(\"hello, world\"); } // padding padding padding";
    c.bench_function("row_render_plain_80", |b| {
        b.iter(|| Row::new(black_box(line)));
    });
}

fn row_render_tabs(c: &mut Criterion) {
    let line = "\tif condition {".repeat(8);
    c.bench_function("row_render_tab_heavy", |b| {
        b.iter(|| Row::new(black_box(line.as_str())));
    });
}

fn row_render_col(c: &mut Criterion) {
    let row = Row::new("\t\tdeeply\tindented\tline with content");
    c.bench_function("row_render_col_lookup", |b| {
        b.iter(|| row.render_col(black_box(row.len())));
    });
}

fn buffer_row_churn(c: &mut Criterion) {
    c.bench_function("buffer_insert_delete_row_1k", |b| {
        let mut buffer = TextBuffer::from_lines((0..1000).map(|i| format!("line {i}")));
        b.iter(|| {
            buffer.insert_row(500, "inserted").unwrap();
            buffer.delete_row(500).unwrap();
        });
    });
}

fn viewport_scroll_sweep(c: &mut Criterion) {
    c.bench_function("viewport_scroll_sweep", |b| {
        let mut viewport = Viewport::new();
        b.iter(|| {
            for line in 0..1000usize {
                viewport.scroll(black_box(line), black_box(line % 200), 80, 24);
            }
        });
    });
}

criterion_group!(
    benches,
    row_render_plain,
    row_render_tabs,
    row_render_col,
    buffer_row_churn,
    viewport_scroll_sweep
);
criterion_main!(benches);
