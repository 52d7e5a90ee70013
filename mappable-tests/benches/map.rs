use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mappable::{compose, hash_map, map, option, vec};
use pprof::criterion::{Output, PProfProfiler};

fn bench_vec(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map over vec");

    for len in [1024, 1024 * 1024] {
        let input: Vec<u64> = (0..len).collect();

        group.bench_with_input(BenchmarkId::new("native iter map", len), &input, |b, input| {
            b.iter(|| {
                input
                    .clone()
                    .into_iter()
                    .map(|x| black_box(x) * 3)
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("via record", len), &input, |b, input| {
            let seq = vec();
            b.iter(|| map(&seq, |x: u64| black_box(x) * 3, input.clone()))
        });

        let nested: Vec<Option<u64>> = input.iter().map(|x| Some(*x).filter(|x| x % 3 != 0)).collect();
        group.bench_with_input(BenchmarkId::new("composed vec of option", len), &nested, |b, nested| {
            let seq_of_opt = compose(vec(), option());
            b.iter(|| map(&seq_of_opt, |x: u64| black_box(x) * 3, nested.clone()))
        });
    }
    group.finish();
}

fn bench_hash_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map over hash map");

    for len in [1024u64, 64 * 1024] {
        let input: HashMap<u64, u64> = (0..len).map(|k| (k, k * 2)).collect();

        group.bench_with_input(BenchmarkId::new("native into_iter", len), &input, |b, input| {
            b.iter(|| {
                input
                    .clone()
                    .into_iter()
                    .map(|(k, v)| (k, black_box(k + v)))
                    .collect::<HashMap<_, _>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("via record", len), &input, |b, input| {
            let entries = hash_map();
            b.iter(|| map(&entries, |(k, v): (u64, u64)| black_box(k + v), input.clone()))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_profiler(
            PProfProfiler::new(100, Output::Flamegraph(None))
        );
    targets = bench_vec, bench_hash_map
}
criterion_main!(benches);
