//! # EE-02 References Brutal Benchmarks
//!
//! Claims to validate:
//! - First citation of a key: one map insert
//! - Repeat citations and figure references: map lookups only
//! - Rendering the references section: O(c log c) in cited keys

use criterion::{black_box, BenchmarkId, Criterion};
use ee_02_references::{Bibliography, ReferenceRegistry};

fn bibliography(size: usize) -> Bibliography {
    let mut bib = Bibliography::new();
    for i in 0..size {
        bib.insert(format!("key{}", i), format!("Author {}. Title {}. (2024).", i, i))
            .expect("unique keys");
    }
    bib
}

pub fn brutal_cite_all_then_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("ee-02/brutal/render");

    for size in [10, 100, 1000] {
        let bib = bibliography(size);
        let keys: Vec<String> = (0..size).rev().map(|i| format!("key{}", i)).collect();

        group.bench_with_input(BenchmarkId::new("cite_and_render", size), &keys, |b, keys| {
            b.iter(|| {
                let mut refs = ReferenceRegistry::new(&bib);
                for key in keys {
                    black_box(refs.cite(&[key.as_str()]).expect("known key"));
                }
                black_box(refs.make_references_section())
            });
        });
    }

    group.finish();
}

pub fn brutal_repeat_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("ee-02/brutal/repeat");
    let bib = bibliography(100);
    let mut refs = ReferenceRegistry::new(&bib);
    refs.cite(&["key1", "key2"]).expect("known keys");
    refs.ref_figure("fig");

    group.bench_function("cite_seen_pair", |b| {
        b.iter(|| black_box(refs.cite(&["key2", "key1"]).expect("known keys")));
    });
    group.bench_function("ref_figure_seen", |b| {
        b.iter(|| black_box(refs.ref_figure(black_box("fig"))));
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    brutal_cite_all_then_render(c);
    brutal_repeat_lookups(c);
}
