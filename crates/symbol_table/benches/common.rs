use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{apply_medium_runtime_config, apply_small_runtime_config, default_rng, shuffled_keys};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use symbol_table::{BinarySearchTable, RedBlackTree, SequentialSearchTable, SymbolTable};

// The sequential table is quadratic to build, so it stops early.
const SIZES: [usize; 4] = [1_000, 4_000, 16_000, 64_000];
const SEQUENTIAL_MAX_SIZE: usize = 4_000;
const OPS_PER_ITER: usize = 200;
const GET_HIT_RATE_PERCENT: u64 = 80;

fn build<M>(keys: &[u64]) -> M
where
    M: SymbolTable<Key = u64, Value = u64>,
{
    let mut map = M::new();
    for &k in keys {
        black_box(map.put(k, k ^ 0xA5A5));
    }
    map
}

pub fn bench_build<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str, max_size: usize)
where
    T: Measurement<Value = Duration>,
    M: SymbolTable<Key = u64, Value = u64>,
{
    for &size in SIZES.iter().filter(|&&s| s <= max_size) {
        apply_medium_runtime_config(group);
        let keys = shuffled_keys(&mut default_rng(), size);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let start = Instant::now();
                    let map = build::<M>(&keys);
                    total += start.elapsed();
                    black_box(map.len());
                }
                total
            })
        });
    }
}

pub fn bench_read<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str, max_size: usize)
where
    T: Measurement<Value = Duration>,
    M: SymbolTable<Key = u64, Value = u64>,
{
    for &size in SIZES.iter().filter(|&&s| s <= max_size) {
        apply_small_runtime_config(group);
        let mut rng = default_rng();
        let keys = shuffled_keys(&mut rng, size);
        let map = build::<M>(&keys);
        let base_seed: u64 = rng.random();

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for iter in 0..iters {
                    let mut rng = StdRng::seed_from_u64(base_seed ^ iter);
                    let probes = generate_probes(&keys, &mut rng);
                    let start = Instant::now();
                    for key in &probes {
                        black_box(map.get(key).copied());
                    }
                    total += start.elapsed();
                }
                total
            })
        });
    }
}

fn generate_probes(keys: &[u64], rng: &mut StdRng) -> Vec<u64> {
    (0..OPS_PER_ITER)
        .map(|_| {
            if rng.random_range(0..100) < GET_HIT_RATE_PERCENT {
                keys[rng.random_range(0..keys.len())]
            } else {
                rng.random()
            }
        })
        .collect()
}

pub fn bench_all_build<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_build::<SequentialSearchTable<u64, u64>, _>(group, "sequential", SEQUENTIAL_MAX_SIZE);
    bench_build::<BinarySearchTable<u64, u64>, _>(group, "binary", usize::MAX);
    bench_build::<RedBlackTree<u64, u64>, _>(group, "red_black", usize::MAX);
}

pub fn bench_all_read<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_read::<SequentialSearchTable<u64, u64>, _>(group, "sequential", SEQUENTIAL_MAX_SIZE);
    bench_read::<BinarySearchTable<u64, u64>, _>(group, "binary", usize::MAX);
    bench_read::<RedBlackTree<u64, u64>, _>(group, "red_black", usize::MAX);
}
