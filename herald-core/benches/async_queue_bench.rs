// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use herald_core::AsyncQueue;
use std::hint::black_box;
use std::sync::mpsc;

pub fn bench_async_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("async_queue");

    // Includes dispatcher spawn and join, as paid by a short-lived queue
    for &size in &[1usize, 100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        let id = BenchmarkId::from_parameter(format!("store_{size}"));
        group.bench_with_input(id, &size, |bencher, &size| {
            bencher.iter(|| {
                let (tx, rx) = mpsc::channel();
                let queue = AsyncQueue::new(move |n: usize| {
                    if n + 1 == size {
                        let _ = tx.send(());
                    }
                    black_box(n);
                })
                .unwrap();

                for i in 0..size {
                    queue.store(i);
                }
                let _ = rx.recv();
                drop(queue);
            });
        });
    }

    group.finish();
}
