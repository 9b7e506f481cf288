// Rust guideline compliant 2026-10-18

use abbrev::{bind, resolve, Candidates, Options};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_candidates(count: usize) -> Candidates<usize> {
    (0..count).map(|i| (format!("command-{:04}-run", i), i)).collect()
}

fn bench_unique_prefix(c: &mut Criterion) {
    let candidates = build_candidates(1000);
    let options = Options::default();
    c.bench_function("resolve_unique_1000", |b| {
        b.iter(|| black_box(resolve(&candidates, black_box("command-0099-"), &options)))
    });
}

fn bench_exact_match(c: &mut Criterion) {
    let candidates = build_candidates(1000);
    let options = Options::default();
    c.bench_function("resolve_exact_1000", |b| {
        b.iter(|| black_box(resolve(&candidates, black_box("command-0500-run"), &options)))
    });
}

fn bench_multi(c: &mut Criterion) {
    let bound = bind(build_candidates(1000), Options::default().multi(true));
    c.bench_function("resolve_multi_1000", |b| {
        b.iter(|| black_box(bound.resolve(black_box("command-00"))))
    });
}

fn bench_ambiguous(c: &mut Criterion) {
    let candidates = build_candidates(1000);
    let options = Options::default();
    c.bench_function("resolve_ambiguous_1000", |b| {
        b.iter(|| black_box(resolve(&candidates, black_box("command-"), &options)))
    });
}

criterion_group!(
    benches,
    bench_unique_prefix,
    bench_exact_match,
    bench_multi,
    bench_ambiguous
);
criterion_main!(benches);
