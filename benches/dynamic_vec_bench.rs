use advanced_vector::{Config, DynamicVec, SingleSlot, VecConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_push_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic_vec_push");

    for size in [100usize, 1_000, 10_000, 100_000].iter() {
        let size = *size;

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("DynamicVec::push_back", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut vec = DynamicVec::new();
                    for i in 0..size {
                        vec.push_back(black_box(i as u64)).unwrap();
                    }
                    vec
                });
            },
        );

        // Benchmark std::Vec::push for comparison
        group.bench_with_input(
            BenchmarkId::new("std::Vec::push", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut vec = Vec::new();
                    for i in 0..size {
                        vec.push(black_box(i as u64));
                    }
                    vec
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("DynamicVec::push_back_preallocated", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut vec = DynamicVec::with_capacity(size).unwrap();
                    for i in 0..size {
                        vec.push_back(black_box(i as u64)).unwrap();
                    }
                    vec
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("DynamicVec::push_back_realtime_preset", size),
            &size,
            |b, &size| {
                let config = VecConfig::realtime_preset();
                b.iter(|| {
                    let mut vec = DynamicVec::with_config(&config).unwrap();
                    for i in 0..size {
                        vec.push_back(black_box(i as u64)).unwrap();
                    }
                    vec
                });
            },
        );
    }

    group.finish();
}

fn bench_insert_erase(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic_vec_insert_erase");

    for size in [100usize, 1_000, 10_000].iter() {
        let size = *size;

        group.bench_with_input(BenchmarkId::new("DynamicVec::insert_front", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = DynamicVec::new();
                for i in 0..size {
                    vec.insert(0, black_box(i as u64)).unwrap();
                }
                vec
            });
        });

        group.bench_with_input(BenchmarkId::new("std::Vec::insert_front", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..size {
                    vec.insert(0, black_box(i as u64));
                }
                vec
            });
        });

        let source: DynamicVec<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::new("DynamicVec::erase_front", size), &size, |b, _| {
            b.iter(|| {
                let mut vec = source.clone();
                while !vec.is_empty() {
                    vec.erase(0).unwrap();
                }
                vec
            });
        });
    }

    group.finish();
}

fn bench_copy_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic_vec_copy");

    for size in [1_000usize, 100_000].iter() {
        let size = *size;
        let source: DynamicVec<String> = (0..size).map(|i| format!("value-{}", i)).collect();
        let std_source: Vec<String> = source.iter().cloned().collect();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("DynamicVec::clone", size), &size, |b, _| {
            b.iter(|| black_box(source.clone()));
        });

        group.bench_with_input(BenchmarkId::new("std::Vec::clone", size), &size, |b, _| {
            b.iter(|| black_box(std_source.clone()));
        });

        group.bench_with_input(
            BenchmarkId::new("DynamicVec::assign_from_reuse", size),
            &size,
            |b, _| {
                let mut target = source.clone();
                b.iter(|| {
                    target.assign_from(black_box(&source)).unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_single_slot(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_slot");

    group.bench_function("SingleSlot::emplace_reset", |b| {
        let mut slot = SingleSlot::new();
        b.iter(|| {
            slot.emplace(black_box(String::from("payload")));
            slot.reset();
        });
    });

    group.bench_function("Option::insert_take", |b| {
        let mut slot = None;
        b.iter(|| {
            slot = Some(black_box(String::from("payload")));
            slot.take()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push_operations,
    bench_insert_erase,
    bench_copy_operations,
    bench_single_slot
);
criterion_main!(benches);
