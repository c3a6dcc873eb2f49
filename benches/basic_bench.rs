use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dense_intset::IntSet;
use std::{collections::BTreeSet, hint::black_box};

fn bench_single_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_operations");

    group.bench_function("insert", |b| {
        let mut set = IntSet::new();
        let mut i = 0;
        b.iter(|| {
            set.insert(black_box(i % 4096));
            i += 1;
        });
    });

    group.bench_function("contains", |b| {
        let set: IntSet = (0..4096).step_by(2).collect();
        let mut i = 0;
        b.iter(|| {
            black_box(set.contains(i % 4096));
            i += 1;
        });
    });

    group.bench_function("remove", |b| {
        let mut set: IntSet = (0..4096).collect();
        let mut i = 0;
        b.iter(|| {
            black_box(set.remove(i % 4096));
            i += 1;
        });
    });

    group.finish();
}

fn bench_ranges(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranges");

    for size in &[10isize, 100, 1000, 10_000] {
        group.bench_with_input(BenchmarkId::new("insert_range", size), size, |b, &size| {
            b.iter(|| {
                let mut set = IntSet::new();
                set.insert_range(3, black_box(size));
                black_box(set);
            });
        });

        group.bench_with_input(BenchmarkId::new("insert_loop", size), size, |b, &size| {
            b.iter(|| {
                let mut set = IntSet::new();
                for i in 3..black_box(size) {
                    set.insert(i);
                }
                black_box(set);
            });
        });

        group.bench_with_input(BenchmarkId::new("remove_range", size), size, |b, &size| {
            let mut full = IntSet::new();
            full.insert_range(0, size + 64);
            b.iter(|| {
                let mut set = full.clone();
                set.remove_range(3, black_box(size));
                black_box(set);
            });
        });
    }

    group.finish();
}

fn bench_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("scans");

    for step in &[1usize, 7, 100, 1000] {
        let set: IntSet = (0..100_000).step_by(*step).collect();

        group.bench_with_input(BenchmarkId::new("iter", step), &set, |b, set| {
            b.iter(|| {
                for i in set {
                    black_box(i);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("next_after", step), &set, |b, set| {
            b.iter(|| {
                let mut cur = set.next_after(0);
                while let Some(i) = cur {
                    black_box(i);
                    cur = set.next_after(i as isize + 1);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("cardinality", step), &set, |b, set| {
            b.iter(|| black_box(set.cardinality()));
        });

        group.bench_with_input(BenchmarkId::new("max", step), &set, |b, set| {
            b.iter(|| black_box(set.max()));
        });
    }

    group.finish();
}

fn bench_set_operations_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_operations");

    for size in &[100usize, 1000, 10_000, 100_000] {
        let a: IntSet = (0..*size).step_by(2).collect();
        let b: IntSet = (0..*size / 2).step_by(3).collect();

        group.bench_with_input(
            BenchmarkId::new("union_with", size),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| {
                    let mut out = (*a).clone();
                    out.union_with(*b);
                    black_box(out);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("intersection_with", size),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| {
                    let mut out = (*a).clone();
                    out.intersection_with(*b);
                    black_box(out);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("difference_with", size),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| {
                    let mut out = (*a).clone();
                    out.difference_with(*b);
                    black_box(out);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("symmetric_difference_with", size),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| {
                    let mut out = (*a).clone();
                    out.symmetric_difference_with(*b);
                    black_box(out);
                });
            },
        );
    }

    group.finish();
}

fn bench_from_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_iter");

    for size in &[10usize, 100, 1000, 10_000] {
        let members: Vec<usize> = (0..*size).step_by(2).collect();

        group.bench_with_input(BenchmarkId::new("intset", size), &members, |b, members| {
            b.iter(|| {
                let set: IntSet = members.iter().copied().collect();
                black_box(set);
            });
        });

        // Compare with BTreeSet for reference
        group.bench_with_input(BenchmarkId::new("btreeset", size), &members, |b, members| {
            b.iter(|| {
                let set: BTreeSet<usize> = members.iter().copied().collect();
                black_box(set);
            });
        });
    }

    group.finish();
}

fn bench_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("bytes");

    for size in &[100usize, 10_000, 100_000] {
        let set: IntSet = (0..*size).step_by(3).collect();
        let bytes = set.to_bytes();

        group.bench_with_input(BenchmarkId::new("to_bytes", size), &set, |b, set| {
            b.iter(|| black_box(set.to_bytes()));
        });

        group.bench_with_input(BenchmarkId::new("from_bytes", size), &bytes, |b, bytes| {
            b.iter(|| black_box(IntSet::from_bytes(bytes)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_operations,
    bench_ranges,
    bench_scans,
    bench_set_operations_bulk,
    bench_from_iter,
    bench_bytes
);
criterion_main!(benches);
