use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use densemat::Matrix;
use rand::{rngs::StdRng, SeedableRng};

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    let mut rng = StdRng::seed_from_u64(0);

    for size in [8, 32, 128] {
        let a = Matrix::new(size, size).randomize_between(-1.0, 1.0, &mut rng);
        let b = Matrix::new(size, size).randomize_between(-1.0, 1.0, &mut rng);

        group.bench_function(format!("f64_size_{size}"), |bencher| {
            bencher.iter(|| black_box(a.matmul(&b).unwrap()))
        });
    }

    group.finish();
}

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");
    let mut rng = StdRng::seed_from_u64(1);

    for size in [64, 512] {
        let a = Matrix::new(size, size).randomize(1.0, &mut rng);
        let b = Matrix::new(size, size).randomize(1.0, &mut rng);

        group.bench_function(format!("add_size_{size}"), |bencher| {
            bencher.iter(|| black_box(a.add(&b).unwrap()))
        });
        group.bench_function(format!("hadamard_size_{size}"), |bencher| {
            bencher.iter(|| black_box(a.hadamard(&b).unwrap()))
        });
        group.bench_function(format!("transpose_size_{size}"), |bencher| {
            bencher.iter(|| black_box(a.transpose()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matmul, bench_elementwise);
criterion_main!(benches);
