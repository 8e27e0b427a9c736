// benches/pipeline.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use nifty_stats::{
    core::{FirstTable, TableExtractor},
    data::{Selection, SelectionView},
    export, pipeline,
};

const PAGE: &str = include_str!("../tests/fixtures/components.html");

fn bench_pipeline(c: &mut Criterion) {
    c.bench_function("extract", |b| {
        b.iter(|| {
            let raw = FirstTable.extract(black_box(PAGE)).expect("extract");
            black_box(raw.row_count())
        })
    });

    c.bench_function("build_table", |b| {
        b.iter(|| {
            let t = pipeline::build_table(black_box(PAGE)).expect("build");
            black_box(t.len())
        })
    });

    let table = pipeline::build_table(PAGE).expect("build");
    c.bench_function("filter_and_link", |b| {
        b.iter(|| {
            let view = SelectionView::new(&table, &Selection::all(&table));
            let link = export::download_link(black_box(&view)).expect("link");
            black_box(link.len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
