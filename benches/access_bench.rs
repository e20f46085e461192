use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use sparse_nd::prelude::*;

type Cube = SparseDimension<u32, Zero, 3>;

fn random_coordinates(count: usize, extent: usize, seed: u64) -> Vec<[usize; 3]> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            [
                rng.gen_range(0..extent),
                rng.gen_range(0..extent),
                rng.gen_range(0..extent),
            ]
        })
        .collect()
}

fn populated(coordinates: &[[usize; 3]]) -> Cube {
    coordinates
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, i as u32 + 1))
        .collect()
}

fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_access");

    for &count in &[1_000usize, 10_000usize] {
        let coordinates = random_coordinates(count, 1 << 16, 42);
        let misses = random_coordinates(count, 1 << 16, 7);

        group.bench_with_input(BenchmarkId::new("set", count), &count, |b, _| {
            b.iter(|| {
                let m = populated(&coordinates);
                black_box(m);
            });
        });

        let mut m = populated(&coordinates);

        group.bench_with_input(BenchmarkId::new("get_hit", count), &count, |b, _| {
            b.iter(|| {
                for &c in &coordinates {
                    black_box(m.get(c));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("get_miss", count), &count, |b, _| {
            b.iter(|| {
                for &c in &misses {
                    black_box(m.get(c));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("chained_get", count), &count, |b, _| {
            b.iter(|| {
                for &[x, y, z] in &coordinates {
                    black_box(m.at(x).at(y).at(z).get());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("size", count), &count, |b, _| {
            b.iter(|| black_box(m.size()));
        });

        group.bench_with_input(BenchmarkId::new("set_then_erase", count), &count, |b, _| {
            b.iter(|| {
                let mut scratch = Cube::new();
                for &c in &coordinates {
                    scratch.set(c, 1);
                }
                for &c in &coordinates {
                    scratch.set(c, 0);
                }
                black_box(scratch.is_empty());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_access);
criterion_main!(benches);
