// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Delegate, StateMachine};
use herald_error::Result;

/// An object whose behaviour is driven by an embedded [`StateMachine`].
///
/// Implementors only expose the machine; routing and transitions come as provided
/// methods. Handlers receive the context mutably, so they update its data and pick
/// the next state in the same call.
pub trait StateContext: Sized {
    /// The state enum generated by [`state_machine!`](crate::state_machine).
    type Phase: Clone;

    fn machine(&self) -> &StateMachine<Self::Phase>;

    fn machine_mut(&mut self) -> &mut StateMachine<Self::Phase>;

    /// The active state.
    fn current_state(&self) -> &Self::Phase {
        self.machine().current()
    }

    /// Switches to `next`. Takes effect for the next [`delegate`](Self::delegate).
    fn change_state(&mut self, next: impl Into<Self::Phase>) {
        self.machine_mut().change_state(next);
    }

    /// Hands `input` to the active state's handler for `I`.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::UnhandledInput`](herald_error::HeraldError::UnhandledInput)
    /// if the active state does not accept `I`. The context is left untouched and later
    /// inputs are routed normally.
    fn delegate<I>(&mut self, input: I) -> Result<()>
    where
        Self::Phase: Delegate<Self, I>,
    {
        let phase = self.current_state().clone();
        let outcome = phase.delegate(self, input);
        if let Err(err) = &outcome {
            herald_core::debug!("{}", err);
        }
        outcome
    }
}
