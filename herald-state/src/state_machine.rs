// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Holds the active state of a machine whose states are the variants of `P`.
///
/// `P` is normally an enum generated by [`state_machine!`](crate::state_machine), so
/// any state type converts into it with `Into`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMachine<P> {
    state: P,
}

impl<P> StateMachine<P> {
    #[must_use]
    pub fn new(initial: impl Into<P>) -> Self {
        Self {
            state: initial.into(),
        }
    }

    /// The active state.
    #[must_use]
    pub const fn current(&self) -> &P {
        &self.state
    }

    /// Replaces the active state; the next delegated input sees `next`.
    pub fn change_state(&mut self, next: impl Into<P>) {
        self.state = next.into();
    }
}
