//! Container benchmarks against `std` counterparts.

use std::collections::LinkedList;

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};

use rcontainers::{vector, List, Vector};

const SIZES: [usize; 4] = [0, 10, 100, 1000];

fn bench_new(c: &mut Criterion) {
    let mut group = c.benchmark_group("new");
    group.bench_function("rcontainers", |b| {
        b.iter(|| {
            let v: Vector<u32> = black_box(Vector::new());
            assert_eq!(v.len(), 0);
            assert_eq!(v.capacity(), 0);
        })
    });
    group.bench_function("std", |b| {
        b.iter(|| {
            let v: Vec<u32> = black_box(Vec::new());
            assert_eq!(v.len(), 0);
            assert_eq!(v.capacity(), 0);
        })
    });
    group.finish();
}

fn bench_with_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("with_capacity");
    for len in SIZES {
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("rcontainers", len), &len, |b, &len| {
            b.iter(|| {
                let v: Vector<u32> = black_box(Vector::with_capacity(len));
                assert_eq!(v.capacity(), len);
            })
        });
        group.bench_with_input(BenchmarkId::new("std", len), &len, |b, &len| {
            b.iter(|| {
                let v: Vec<u32> = black_box(Vec::with_capacity(len));
                assert_eq!(v.capacity(), len);
            })
        });
    }
    group.finish();
}

fn bench_from_elem(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_elem");
    for len in SIZES {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("rcontainers", len), &len, |b, &len| {
            b.iter(|| {
                let v: Vector<usize> = vector![5; len];
                assert_eq!(v.len(), len);
                black_box(v)
            })
        });
        group.bench_with_input(BenchmarkId::new("std", len), &len, |b, &len| {
            b.iter(|| {
                let v: Vec<usize> = vec![5; len];
                assert_eq!(v.len(), len);
                black_box(v)
            })
        });
    }
    group.finish();
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for len in SIZES {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("rcontainers", len), &len, |b, &len| {
            b.iter(|| {
                let mut v = Vector::new();
                for i in 0..len {
                    v.push(black_box(i));
                }
                v
            })
        });
        group.bench_with_input(BenchmarkId::new("std", len), &len, |b, &len| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..len {
                    v.push(black_box(i));
                }
                v
            })
        });
    }
    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");
    for len in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("rcontainers", len), &len, |b, &len| {
            b.iter(|| {
                let mut v = Vector::new();
                for i in 0..len {
                    v.insert(v.begin(), black_box(i));
                }
                v
            })
        });
        group.bench_with_input(BenchmarkId::new("std", len), &len, |b, &len| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..len {
                    v.insert(0, black_box(i));
                }
                v
            })
        });
    }
    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    for len in SIZES {
        let src: Vector<u64> = (0..len as u64).collect();
        let src_std: Vec<u64> = (0..len as u64).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("rcontainers", len), &src, |b, src| {
            b.iter(|| black_box(src.clone()))
        });
        group.bench_with_input(BenchmarkId::new("std", len), &src_std, |b, src| {
            b.iter(|| black_box(src.clone()))
        });
    }
    group.finish();
}

fn bench_list_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_push_back");
    for len in [10, 100, 1000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("rcontainers", len), &len, |b, &len| {
            b.iter(|| {
                let mut list = List::new();
                for i in 0..len {
                    list.push_back(black_box(i));
                }
                list
            })
        });
        group.bench_with_input(BenchmarkId::new("std", len), &len, |b, &len| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..len {
                    list.push_back(black_box(i));
                }
                list
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_new,
    bench_with_capacity,
    bench_from_elem,
    bench_push,
    bench_insert_front,
    bench_clone,
    bench_list_push_back
);
criterion_main!(benches);
