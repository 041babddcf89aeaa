// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Herald
//!
//! An in-process dispatch runtime built from three pieces:
//!
//! - **Queues** ([`BlockingQueue`], [`AsyncQueue`], [`Courier`]): producers on any thread,
//!   one dedicated dispatcher thread consuming items in order.
//! - **Publish/subscribe** ([`SyncPublisher`], [`AsyncPublisher`]): subjects notify their
//!   subscribers on the caller's thread or from a dispatcher thread.
//! - **State machines** ([`state_machine!`], [`StateContext`]): inputs of different types
//!   are routed to the active state's handler, with the routing decided by the compiler.
//!
//! Dispatcher threads are owned: dropping a queue or publisher stops its thread and
//! joins it.
//!
//! ## Quick Start
//!
//! ```
//! use herald::prelude::*;
//! use std::sync::mpsc;
//! use std::sync::Mutex;
//!
//! #[derive(Clone)]
//! struct Price {
//!     cents: u64,
//!     publisher: AsyncPublisher<Price>,
//! }
//!
//! impl Subject for Price {
//!     type Manager = AsyncChangeManager<Self>;
//!
//!     fn publisher(&self) -> &AsyncPublisher<Self> {
//!         &self.publisher
//!     }
//! }
//!
//! let (tx, rx) = mpsc::channel();
//! let tx = Mutex::new(tx);
//!
//! let mut price = Price { cents: 1999, publisher: AsyncPublisher::new() };
//! price.attach(Arc::new(move |p: &Price| {
//!     tx.lock().unwrap().send(p.cents).unwrap();
//! }));
//! price.start()?;
//!
//! price.deliver();
//! price.cents = 1499;
//! price.deliver();
//!
//! assert_eq!(rx.recv().unwrap(), 1999);
//! assert_eq!(rx.recv().unwrap(), 1499);
//! # Ok::<(), herald::HeraldError>(())
//! ```

pub use herald_core::{
    AsyncQueue, BlockingQueue, Courier, Deliverable, DispatchStats, Dispatcher,
    DispatcherConfig, PanicPolicy, Parcel, DEFAULT_THREAD_NAME,
};
pub use herald_error::{panic_message, HeraldError, Result, ResultExt};
pub use herald_publish::{
    AsyncChangeManager, AsyncPublisher, AsyncSubject, ChangeManager, Publisher,
    SharedSubscriber, Subject, Subscriber, SubscriberSet, SyncChangeManager, SyncPublisher,
    SyncSubject,
};
pub use herald_state::{state_machine, Delegate, Handle, StateContext, StateMachine};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        state_machine, AsyncChangeManager, AsyncPublisher, AsyncQueue, AsyncSubject, Courier,
        Deliverable, DispatcherConfig, Handle, HeraldError, ResultExt, StateContext, StateMachine,
        Subject, Subscriber, SyncChangeManager, SyncPublisher, SyncSubject,
    };
    pub use std::sync::Arc;
}
