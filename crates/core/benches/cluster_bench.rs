use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fieldlink_core::{ClusterEngine, Deduplicator, DisjointSet};

fn bench_dsu(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsu");
    group.throughput(Throughput::Elements(100_000));

    group.bench_function("100k_chain_unions", |b| {
        b.iter(|| {
            let mut dsu = DisjointSet::new(100_000);
            for i in 1..100_000 {
                dsu.union(i, i - 1);
            }
            black_box(dsu.find(99_999));
        });
    });

    group.bench_function("100k_pair_unions", |b| {
        b.iter(|| {
            let mut dsu = DisjointSet::new(100_000);
            for i in 0..50_000 {
                dsu.union(i, i + 50_000);
            }
            black_box(dsu.set_size(0));
        });
    });

    group.finish();
}

fn bench_dedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedup");
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("10k_50pct_dup", |b| {
        let lines: Vec<String> = (0..10_000)
            .map(|i| format!("{};{}", i % 5_000, i % 5_000 + 1))
            .collect();
        b.iter(|| {
            let mut dedup = Deduplicator::with_capacity(10_000);
            for line in &lines {
                black_box(dedup.push(line));
            }
        });
    });

    group.finish();
}

fn bench_cluster(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster");
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("10k_sparse_links", |b| {
        let lines: Vec<String> = (0..10_000)
            .map(|i| format!("{};{};{}", i, i % 1_000, i + 20_000))
            .collect();
        b.iter(|| {
            let mut engine = ClusterEngine::new();
            black_box(engine.cluster(lines.clone()));
        });
    });

    group.bench_function("10k_all_unique", |b| {
        let lines: Vec<String> = (0..10_000)
            .map(|i| format!("{};{}", i, i + 10_000))
            .collect();
        b.iter(|| {
            let mut engine = ClusterEngine::new();
            black_box(engine.cluster(lines.clone()));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_dsu, bench_dedup, bench_cluster);
criterion_main!(benches);
