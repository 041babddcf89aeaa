// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use herald_core::BlockingQueue;
use std::hint::black_box;
use std::sync::Arc;
use std::thread;

pub fn bench_blocking_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("blocking_queue");

    let sizes = [100usize, 1_000, 10_000];

    // Scenario 1: single thread, push everything then take everything
    for &size in &sizes {
        group.throughput(Throughput::Elements(size as u64));
        let id = BenchmarkId::from_parameter(format!("push_take_{size}"));
        group.bench_with_input(id, &size, |bencher, &size| {
            bencher.iter(|| {
                let queue = BlockingQueue::new();
                for i in 0..size {
                    queue.push(i);
                }
                for _ in 0..size {
                    black_box(queue.take());
                }
            });
        });
    }

    // Scenario 2: producers hand off to one consumer thread
    let producer_counts = [1usize, 4];
    for &producers in &producer_counts {
        let per_producer = 2_500usize;
        group.throughput(Throughput::Elements((producers * per_producer) as u64));
        let id = BenchmarkId::from_parameter(format!("handoff_producers_{producers}"));
        group.bench_with_input(id, &producers, |bencher, &producers| {
            bencher.iter(|| {
                let queue = Arc::new(BlockingQueue::new());
                let total = producers * per_producer;

                let consumer = {
                    let queue = Arc::clone(&queue);
                    thread::spawn(move || {
                        for _ in 0..total {
                            black_box(queue.take());
                        }
                    })
                };

                let handles: Vec<_> = (0..producers)
                    .map(|_| {
                        let queue = Arc::clone(&queue);
                        thread::spawn(move || {
                            for i in 0..per_producer {
                                queue.push(i);
                            }
                        })
                    })
                    .collect();

                for h in handles {
                    let _ = h.join();
                }
                let _ = consumer.join();
            });
        });
    }

    group.finish();
}
