// benches/resize_policy.rs

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use grow_array::ArrayStore;
use rand::Rng;

fn filled_store(size: usize) -> ArrayStore<u64> {
    let mut store = ArrayStore::new();
    for i in 0..size {
        store.push_back(i as u64);
    }
    store
}

fn bench_push_from_capacity_one(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("push_from_capacity_one");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut store = ArrayStore::new();
                for i in 0..size {
                    store.push_back(black_box(i as u64));
                }
                store.len()
            });
        });
    }
    group.finish();
}

fn bench_front_removal(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    // The queue's dequeue path: remove(0) shifts the whole prefix.
    let mut group = c.benchmark_group("front_removal");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || filled_store(size),
                |mut store| {
                    let mut sum = 0u64;
                    while let Some(v) = store.remove(0) {
                        sum += black_box(v);
                        store.shrink_if_sparse();
                    }
                    sum
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_random_insert(c: &mut Criterion) {
    let sizes = vec![100, 1_000];

    let mut group = c.benchmark_group("random_insert");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = rand::rng();
            b.iter(|| {
                let mut store = ArrayStore::new();
                for i in 0..size {
                    let at = rng.random_range(0..=store.len());
                    store.insert(at, i as u64).unwrap();
                }
                store.len()
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push_from_capacity_one,
    bench_front_removal,
    bench_random_insert
);
criterion_main!(benches);
