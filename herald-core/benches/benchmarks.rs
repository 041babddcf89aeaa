// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::async_queue_bench::bench_async_queue;
use crate::blocking_queue_bench::bench_blocking_queue;
use criterion::{criterion_group, criterion_main};

mod async_queue_bench;
mod blocking_queue_bench;

criterion_group!(benches, bench_blocking_queue, bench_async_queue);
criterion_main!(benches);
