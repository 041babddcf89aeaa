// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::thread;
use std::time::{Duration, Instant};

/// Upper bound for any cross-thread wait in the test suites.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Polls `condition` until it returns `true` or `timeout` elapses.
///
/// Returns the last value of `condition`.
pub fn wait_until<F>(timeout: Duration, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = Instant::now() + timeout;
    while !condition() {
        if Instant::now() >= deadline {
            return condition();
        }
        thread::sleep(Duration::from_millis(1));
    }
    true
}
