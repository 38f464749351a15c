use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use digest_sketches::{
    BloomFilter, CountMinSketch, OptimizedCountMinSketch,
    ParameterizedBloomFilter,
};
use rand::{Rng, distr::Alphanumeric};
use std::hint::black_box;

// Helper function to generate random string data
fn generate_random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn generate_test_data(count: usize) -> Vec<String> {
    (0..count).map(|_| generate_random_string(32)).collect()
}

fn bench_bloom(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom_filter");

    for num_hashes in [1, 4, 8] {
        let data = generate_test_data(1_000);

        group.bench_with_input(
            BenchmarkId::new("add", num_hashes),
            &data,
            |b, data| {
                b.iter_batched(
                    || {
                        BloomFilter::new(10_000, num_hashes)
                            .expect("Failed to create filter")
                    },
                    |mut filter| {
                        for item in data {
                            filter.add(item);
                        }
                        filter
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );

        let mut filter = BloomFilter::new(10_000, num_hashes)
            .expect("Failed to create filter");
        for item in &data {
            filter.add(item);
        }
        group.bench_with_input(
            BenchmarkId::new("contains", num_hashes),
            &data,
            |b, data| {
                b.iter(|| {
                    for item in data {
                        black_box(filter.contains(item));
                    }
                });
            },
        );
    }

    group.bench_function("parameterized_new", |b| {
        b.iter(|| {
            ParameterizedBloomFilter::new(black_box(100_000), black_box(0.01))
                .expect("Failed to create filter")
        });
    });

    group.finish();
}

fn bench_count_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_min_sketch");
    let data = generate_test_data(1_000);

    for depth in [1, 3, 7] {
        group.bench_with_input(
            BenchmarkId::new("update", depth),
            &data,
            |b, data| {
                let mut sketch = CountMinSketch::new(1_000, depth)
                    .expect("Failed to create sketch");
                b.iter(|| {
                    for item in data {
                        sketch.increment(item);
                    }
                });
            },
        );

        let mut sketch =
            CountMinSketch::new(1_000, depth).expect("Failed to create sketch");
        for item in &data {
            sketch.increment(item);
        }
        group.bench_with_input(
            BenchmarkId::new("estimate", depth),
            &data,
            |b, data| {
                b.iter(|| {
                    for item in data {
                        black_box(sketch.estimate(item));
                    }
                });
            },
        );
    }

    group.bench_function("optimized_new", |b| {
        b.iter(|| {
            OptimizedCountMinSketch::new(black_box(0.001), black_box(0.01))
                .expect("Failed to create sketch")
        });
    });

    group.finish();
}

criterion_group!(benches, bench_bloom, bench_count_min);
criterion_main!(benches);
