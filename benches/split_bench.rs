//! Benchmarks for train/test splitting.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::explicit_iter_loop,
    missing_docs
)]

use std::sync::Arc;

use arrow::{
    array::{Float64Array, Int64Array},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use holdout::{
    split::{hash_split_indices, random_split_indices, seeded_rng},
    split_train_test_by_id, split_train_test_seeded, ArrowDataset,
};

fn create_dataset(rows: usize) -> ArrowDataset {
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("score", DataType::Float64, false),
    ]));

    #[allow(clippy::cast_possible_wrap)]
    let ids: Vec<i64> = (0..rows as i64).collect();
    #[allow(clippy::cast_precision_loss)]
    let scores: Vec<f64> = ids.iter().map(|i| *i as f64 * 1.5).collect();

    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(Int64Array::from(ids)),
            Arc::new(Float64Array::from(scores)),
        ],
    )
    .expect("Failed to create batch");

    ArrowDataset::from_batch(batch).expect("Failed to create dataset")
}

fn bench_split_indices(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_indices");

    for size in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("random", size), size, |b, &size| {
            b.iter(|| {
                let mut rng = seeded_rng(42);
                random_split_indices(black_box(size), 0.2, &mut rng)
            });
        });

        #[allow(clippy::cast_possible_wrap)]
        let ids: Vec<i64> = (0..*size as i64).collect();
        group.bench_with_input(BenchmarkId::new("id_hash", size), &ids, |b, ids| {
            b.iter(|| hash_split_indices(black_box(ids), 0.2));
        });
    }

    group.finish();
}

fn bench_dataset_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset_split");

    for size in [1_000, 10_000, 100_000].iter() {
        let dataset = create_dataset(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("seeded", size), &dataset, |b, dataset| {
            b.iter(|| split_train_test_seeded(black_box(dataset), 0.2, 42).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("by_id", size), &dataset, |b, dataset| {
            b.iter(|| split_train_test_by_id(black_box(dataset), 0.2, "id").unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_split_indices, bench_dataset_split);
criterion_main!(benches);
