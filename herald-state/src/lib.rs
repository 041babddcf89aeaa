// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Finite state machines whose input routing is resolved at compile time.
//!
//! A machine is declared with [`state_machine!`]: a closed set of state types and the
//! input types the machine may receive. Each state implements [`Handle`] for the
//! inputs it accepts. A context embedding a [`StateMachine`] and implementing
//! [`StateContext`] then calls `delegate(input)`:
//!
//! - the active state handles `input` if it implements `Handle` for its type;
//! - otherwise `delegate` returns [`HeraldError::UnhandledInput`] and nothing changes.
//!
//! There is no runtime type inspection: every (state, input) pair is routed by the
//! compiler. States carry no data of their own; all mutable data lives in the
//! context.

mod handle;
mod macros;
mod state_context;
mod state_machine;

#[doc(hidden)]
#[path = "private.rs"]
pub mod __private;

pub use self::handle::{Delegate, Handle};
pub use self::state_context::StateContext;
pub use self::state_machine::StateMachine;
pub use herald_error::{HeraldError, Result};
