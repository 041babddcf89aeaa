// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Asynchronous, ordered delivery of heterogeneous items to a single destination.
//!
//! A [`Courier`] is an [`AsyncQueue`] whose callback hands every stored
//! [`Deliverable`] to one shared destination. Each item decides how it is received by
//! implementing [`Deliverable::deliver`].
//!
//! ## Example
//!
//! ```
//! use herald_core::{Courier, Deliverable};
//! use std::sync::mpsc::{self, Sender};
//! use std::sync::{Arc, Mutex};
//!
//! struct Shelf {
//!     received: Mutex<Sender<String>>,
//! }
//!
//! struct Book(&'static str);
//!
//! impl Deliverable<Shelf> for Book {
//!     fn deliver(&self, shelf: &Shelf) {
//!         shelf.received.lock().unwrap().send(self.0.to_string()).unwrap();
//!     }
//! }
//!
//! let (tx, rx) = mpsc::channel();
//! let courier = Courier::new(Arc::new(Shelf { received: Mutex::new(tx) }))?;
//!
//! courier.deliver(Arc::new(Book("Don Quijote de La Mancha")));
//! assert_eq!(rx.recv().unwrap(), "Don Quijote de La Mancha");
//! # Ok::<(), herald_error::HeraldError>(())
//! ```

use crate::{AsyncQueue, DispatchStats, DispatcherConfig};
use herald_error::Result;
use std::fmt;
use std::sync::Arc;

/// An item that knows how to hand itself over to a destination of type `D`.
pub trait Deliverable<D: ?Sized>: Send + Sync {
    /// Called on the courier's dispatcher thread.
    fn deliver(&self, destination: &D);
}

/// Shared, type-erased deliverable.
pub type Parcel<D> = Arc<dyn Deliverable<D>>;

/// Delivers [`Deliverable`] items to one destination from a dedicated thread.
pub struct Courier<D: ?Sized> {
    queue: AsyncQueue<Parcel<D>>,
}

impl<D: ?Sized + Send + Sync + 'static> Courier<D> {
    /// Creates a courier for `destination` with the default dispatcher configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::SpawnFailed`](herald_error::HeraldError::SpawnFailed) if
    /// the dispatcher thread cannot be created.
    pub fn new(destination: Arc<D>) -> Result<Self> {
        Self::with_config(destination, &DispatcherConfig::default())
    }

    /// Creates a courier for `destination` using `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::SpawnFailed`](herald_error::HeraldError::SpawnFailed) if
    /// the dispatcher thread cannot be created.
    pub fn with_config(destination: Arc<D>, config: &DispatcherConfig) -> Result<Self> {
        let queue = AsyncQueue::with_config(config, move |parcel: Parcel<D>| {
            parcel.deliver(&destination);
        })?;
        Ok(Self { queue })
    }
}

impl<D: ?Sized> Courier<D> {
    /// Queues `parcel` for delivery and returns immediately.
    pub fn deliver(&self, parcel: Parcel<D>) {
        self.queue.store(parcel);
    }

    /// Number of parcels waiting to be delivered.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.pending()
    }

    /// Delivery counters of the underlying dispatcher.
    #[must_use]
    pub fn stats(&self) -> &DispatchStats {
        self.queue.stats()
    }
}

impl<D: ?Sized> fmt::Debug for Courier<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Courier").field("queue", &self.queue).finish()
    }
}
