//! Benchmarks for grid operations.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::explicit_iter_loop,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use drillgrid::{
    filter_rows, infer_columns, summarize, tui::GridViewer, Dataset, Record, Session, Theme,
    Value, ViewMode,
};

fn create_rows(rows: usize) -> Vec<Value> {
    (0..rows)
        .map(|i| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let id = i as i32;
            let type_name = if i % 3 == 0 { "Service" } else { "Server" };
            Record::new(type_name)
                .with_property("Id", id)
                .with_property("Name", format!("item_{i}"))
                .with_property("Score", f64::from(id) * 1.5)
                .with_property("Tags", vec!["alpha", "beta"])
                .with_default_display(["Id", "Name", "Tags"])
                .into()
        })
        .collect()
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");

    for size in [100, 1000, 10000] {
        let rows = create_rows(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("infer_default", size), &rows, |b, rows| {
            b.iter(|| infer_columns(black_box(rows), ViewMode::Default));
        });

        group.bench_with_input(BenchmarkId::new("project_full", size), &rows, |b, rows| {
            b.iter(|| Dataset::project(black_box(rows.clone()), ViewMode::Full));
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [100, 1000, 10000] {
        let dataset = Dataset::project(create_rows(size), ViewMode::Default);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("match_few", size), &dataset, |b, ds| {
            b.iter(|| filter_rows(black_box(ds), "ITEM_99"));
        });

        group.bench_with_input(BenchmarkId::new("match_none", size), &dataset, |b, ds| {
            b.iter(|| filter_rows(black_box(ds), "zzz"));
        });
    }

    group.finish();
}

fn bench_summary(c: &mut Criterion) {
    let rows = create_rows(10000);
    c.bench_function("summarize_10000", |b| {
        b.iter(|| summarize(black_box(&rows)));
    });
}

fn bench_render(c: &mut Criterion) {
    let session = Session::for_value(
        create_rows(1000).into(),
        "Bench",
        Theme::dark(),
        ViewMode::Default,
    );
    c.bench_function("render_viewport", |b| {
        b.iter(|| {
            let viewer = GridViewer::with_dimensions(black_box(&session), 120, 40);
            viewer.render_lines(&session)
        });
    });
}

criterion_group!(benches, bench_projection, bench_filter, bench_summary, bench_render);
criterion_main!(benches);
