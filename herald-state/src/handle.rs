// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use herald_error::Result;

/// A state's handler for inputs of type `I` arriving at context `C`.
///
/// Implement it once per accepted input type. The set of `Handle` impls of a state
/// *is* its declared input set: inputs without an impl are rejected by
/// [`Delegate`] without running any code.
///
/// The handler may mutate the context, including switching to another state through
/// [`StateContext::change_state`](crate::StateContext::change_state).
pub trait Handle<C, I> {
    fn handle(&self, ctx: &mut C, input: I);
}

/// Routing of input `I` through whichever state is active.
///
/// Implemented by [`state_machine!`](crate::state_machine) for every declared input
/// type; not meant to be implemented by hand.
pub trait Delegate<C, I> {
    /// Runs the active state's handler for `I`.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::UnhandledInput`](herald_error::HeraldError::UnhandledInput)
    /// if the active state does not implement [`Handle<C, I>`]. Nothing ran and
    /// nothing changed in that case.
    fn delegate(&self, ctx: &mut C, input: I) -> Result<()>;
}
