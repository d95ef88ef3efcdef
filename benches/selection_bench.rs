use case_finder::config::ExecutorConfig;
use case_finder::engine::selection::{plan_selection, sort_by_file_name};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::path::PathBuf;

fn synthetic_files(count: usize) -> Vec<PathBuf> {
    (0..count)
        .rev()
        .map(|i| PathBuf::from(format!("suite{}/case{:03}_step{}.json", i % 7, i % 250, i)))
        .collect()
}

fn bench_sort_by_file_name(c: &mut Criterion) {
    let files = synthetic_files(2_000);

    c.bench_function("sort_by_file_name", |b| {
        b.iter(|| {
            let mut files = files.clone();
            sort_by_file_name(black_box(&mut files));
        });
    });
}

fn bench_plan_selection(c: &mut Criterion) {
    let files = synthetic_files(2_000);
    let config = ExecutorConfig {
        order_by_file_name: true,
        ordered_files: None,
        ignore_files: Some(vec![
            "*.bak".to_string(),
            "case00*".to_string(),
            "*step13.json".to_string(),
        ]),
        ..ExecutorConfig::default()
    };

    c.bench_function("plan_selection", |b| {
        b.iter(|| plan_selection(black_box(files.clone()), Some(&config)));
    });
}

criterion_group!(benches, bench_sort_by_file_name, bench_plan_selection);
criterion_main!(benches);
