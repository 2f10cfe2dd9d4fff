use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use packed_bitvector::{Mode, PackedBitVector};

const MODES: [(Mode, &str); 2] = [(Mode::Plain, "Plain"), (Mode::Concurrent, "Concurrent")];

/// Vector with pseudo-random bits restricted to the first `span` bits.
fn populated(size: usize, span: usize, mode: Mode) -> PackedBitVector {
    let bits = PackedBitVector::new(size, mode).unwrap();
    for i in 0..(span / 8) as u64 {
        // Simple LCG for reproducible "random" positions
        let pos = 1664525u64.wrapping_mul(i).wrapping_add(1013904223) as usize % span;
        bits.set(pos);
    }
    bits
}

/// Benchmark population count on dense and sparse vectors
fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count");

    for size in [1_000usize, 100_000, 1_000_000].iter() {
        for (mode, name) in MODES {
            let dense = PackedBitVector::new(*size, mode).unwrap();
            dense.set_all();
            group.bench_with_input(BenchmarkId::new(format!("{name}_dense"), size), size, |b, _| {
                b.iter(|| black_box(dense.count()));
            });

            let sparse = populated(*size, *size, mode);
            group.bench_with_input(BenchmarkId::new(format!("{name}_sparse"), size), size, |b, _| {
                b.iter(|| black_box(sparse.count()));
            });
        }
    }

    group.finish();
}

/// Benchmark set_all / remove_all
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk");

    for (mode, name) in MODES {
        group.bench_function(name, |b| {
            let bits = PackedBitVector::new(1_000_003, mode).unwrap();
            b.iter(|| {
                bits.set_all();
                bits.remove_all();
            });
        });
    }

    group.finish();
}

/// Benchmark union of vectors with different lengths
fn bench_unify(c: &mut Criterion) {
    let mut group = c.benchmark_group("unify");

    for size in [10_000usize, 1_000_000].iter() {
        for (mode, name) in MODES {
            let a = populated(*size, *size, mode);
            let b_vec = populated(*size / 2, *size / 2, mode);
            group.bench_with_input(BenchmarkId::new(name, size), size, |b, _| {
                b.iter(|| black_box(a.unify_with(&b_vec)));
            });
        }
    }

    group.finish();
}

/// Benchmark intersection where windows only cover a prefix of the vectors
fn bench_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect");

    for size in [10_000usize, 1_000_000].iter() {
        for (mode, name) in MODES {
            let a = populated(*size, *size / 16, mode);
            let b_vec = populated(*size, *size, mode);
            group.bench_with_input(BenchmarkId::new(name, size), size, |b, _| {
                b.iter(|| black_box(a.intersect_with(&b_vec)));
            });
        }
    }

    group.finish();
}

/// Benchmark intersection test: early hit vs. full scan with no common bits
fn bench_has_intersection(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_intersection");

    let size = 1_000_000;
    let evens = PackedBitVector::new(size, Mode::Plain).unwrap();
    let odds = PackedBitVector::new(size, Mode::Plain).unwrap();
    for i in 0..size {
        if i % 2 == 0 {
            evens.set(i);
        } else {
            odds.set(i);
        }
    }
    let first = PackedBitVector::new(size, Mode::Plain).unwrap();
    first.set(0);

    group.bench_function("early_hit", |b| {
        b.iter(|| black_box(evens.has_intersection_with(&first)));
    });
    group.bench_function("full_scan_miss", |b| {
        b.iter(|| black_box(evens.has_intersection_with(&odds)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_count,
    bench_bulk,
    bench_unify,
    bench_intersect,
    bench_has_intersection,
);
criterion_main!(benches);
