// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Blocking queue and single-consumer dispatcher threads.
//!
//! - [`BlockingQueue`]: unbounded FIFO with an atomic, blocking `take()` and a one-shot `stop()`.
//! - [`Dispatcher`]: one named thread draining a queue into a callback, joined on drop.
//! - [`AsyncQueue`]: queue + dispatcher behind `new(callback)` / `store(item)`.
//! - [`Courier`]: an `AsyncQueue` delivering [`Deliverable`] items to a single destination.

#[doc(hidden)]
pub mod logging;

pub mod async_queue;
pub mod blocking_queue;
pub mod courier;
pub mod dispatch_stats;
pub mod dispatcher;
pub mod dispatcher_config;

pub use self::async_queue::AsyncQueue;
pub use self::blocking_queue::BlockingQueue;
pub use self::courier::{Courier, Deliverable, Parcel};
pub use self::dispatch_stats::DispatchStats;
pub use self::dispatcher::Dispatcher;
pub use self::dispatcher_config::{DispatcherConfig, PanicPolicy, DEFAULT_THREAD_NAME};
pub use herald_error::{HeraldError, Result};
