// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicUsize, Ordering};

/// Tracks the highest number of guards alive at the same time.
///
/// Each callback under test calls [`enter`](ConcurrencyProbe::enter) and keeps the guard
/// for its whole body; a single-consumer dispatcher must never push
/// [`max_concurrency`](ConcurrencyProbe::max_concurrency) above one.
#[derive(Debug, Default)]
pub struct ConcurrencyProbe {
    active: AtomicUsize,
    max: AtomicUsize,
}

impl ConcurrencyProbe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn enter(&self) -> ProbeGuard<'_> {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max.fetch_max(now, Ordering::SeqCst);
        ProbeGuard { probe: self }
    }

    #[must_use]
    pub fn max_concurrency(&self) -> usize {
        self.max.load(Ordering::SeqCst)
    }
}

/// Marks one running callback; leaving scope ends it.
#[derive(Debug)]
pub struct ProbeGuard<'a> {
    probe: &'a ConcurrencyProbe,
}

impl Drop for ProbeGuard<'_> {
    fn drop(&mut self) {
        self.probe.active.fetch_sub(1, Ordering::SeqCst);
    }
}
