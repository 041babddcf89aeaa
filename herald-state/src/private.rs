// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

// Support code for `state_machine!`. Not public API.
//
// Routing is picked by method resolution on a concrete `&Probe<S, C, I>`:
// `AcceptedKind::kind` matches by value only when `S: Handle<C, I>`, otherwise the
// autoref'd `RejectedKind::kind` is found. Both are resolved at compile time.

use crate::Handle;
use herald_error::HeraldError;
use std::marker::PhantomData;

pub use herald_error::Result;

pub struct Probe<S, C, I>(PhantomData<fn(&S, &mut C, I)>);

impl<S, C, I> Probe<S, C, I> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

pub struct Accepted;

impl Accepted {
    #[inline]
    pub fn dispatch<S, C, I>(self, state: &S, ctx: &mut C, input: I) -> Result<()>
    where
        S: Handle<C, I>,
    {
        state.handle(ctx, input);
        Ok(())
    }
}

pub struct Rejected;

impl Rejected {
    #[inline]
    pub fn dispatch<S, C, I>(self, _state: &S, _ctx: &mut C, _input: I) -> Result<()> {
        Err(HeraldError::unhandled_input::<S, I>())
    }
}

pub trait AcceptedKind {
    #[inline]
    fn kind(&self) -> Accepted {
        Accepted
    }
}

impl<S, C, I> AcceptedKind for Probe<S, C, I> where S: Handle<C, I> {}

pub trait RejectedKind {
    #[inline]
    fn kind(&self) -> Rejected {
        Rejected
    }
}

impl<S, C, I> RejectedKind for &Probe<S, C, I> {}
