// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the Herald workspace.
//!
//! Dispatchers deliver on their own threads, so tests need a way to wait for
//! deliveries without sleeping for fixed intervals. This crate provides:
//!
//! - [`Recorder<T>`] - thread-safe log of observed values with a bounded blocking wait
//! - [`Gate`] - a latch that parks a callback until the test opens it
//! - [`ConcurrencyProbe`] - measures how many callbacks ever ran at the same time
//! - [`wait_until`] - polls a condition until it holds or a timeout elapses
//!
//! ```rust
//! use herald_test_utils::{Recorder, DEFAULT_TIMEOUT};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let recorder = Arc::new(Recorder::new());
//! let producer = Arc::clone(&recorder);
//! thread::spawn(move || producer.record(7));
//!
//! assert!(recorder.wait_for_len(1, DEFAULT_TIMEOUT));
//! assert_eq!(recorder.snapshot(), vec![7]);
//! ```
//!
//! The timeouts here are upper bounds for failing tests, never pacing for passing ones.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod concurrency_probe;
pub mod gate;
pub mod helpers;
pub mod recorder;

pub use concurrency_probe::{ConcurrencyProbe, ProbeGuard};
pub use gate::Gate;
pub use helpers::{wait_until, DEFAULT_TIMEOUT};
pub use recorder::Recorder;
