// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Thread name used when none is configured.
pub const DEFAULT_THREAD_NAME: &str = "herald-dispatcher";

/// What a dispatcher does after a callback panics.
///
/// The panic itself is always caught on the dispatcher thread, converted to
/// [`HeraldError::CallbackPanicked`](herald_error::HeraldError::CallbackPanicked),
/// logged and counted in [`DispatchStats`](crate::DispatchStats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanicPolicy {
    /// Report the failure and carry on with the next queued item.
    #[default]
    Continue,
    /// Report the failure, stop the queue and terminate the dispatcher thread.
    ///
    /// Items still queued are discarded, and so is anything pushed afterwards.
    Stop,
}

/// Settings for a dispatcher thread.
///
/// ```
/// use herald_core::{DispatcherConfig, PanicPolicy};
///
/// let config = DispatcherConfig::new()
///     .with_thread_name("orders")
///     .with_panic_policy(PanicPolicy::Stop);
///
/// assert_eq!(config.thread_name(), "orders");
/// assert_eq!(config.panic_policy(), PanicPolicy::Stop);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    thread_name: String,
    panic_policy: PanicPolicy,
}

impl DispatcherConfig {
    /// Default configuration: thread `"herald-dispatcher"`, [`PanicPolicy::Continue`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            thread_name: DEFAULT_THREAD_NAME.to_string(),
            panic_policy: PanicPolicy::default(),
        }
    }

    /// Sets the OS thread name of the dispatcher.
    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Sets the reaction to callback panics.
    #[must_use]
    pub fn with_panic_policy(mut self, policy: PanicPolicy) -> Self {
        self.panic_policy = policy;
        self
    }

    #[must_use]
    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    #[must_use]
    pub const fn panic_policy(&self) -> PanicPolicy {
        self.panic_policy
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self::new()
    }
}
