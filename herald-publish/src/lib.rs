// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Publish/subscribe with synchronous or asynchronous delivery.
//!
//! A subject embeds a [`Publisher`] and notifies its [`Subscriber`]s through it:
//!
//! - [`SyncPublisher`] / [`SyncChangeManager`]: fan-out on the caller's thread, under the
//!   subscriber lock.
//! - [`AsyncPublisher`] / [`AsyncChangeManager`]: notifications queue up and are fanned
//!   out in order by one dispatcher thread per publisher.
//!
//! Subscriptions belong to one publisher instance; cloning a publisher yields an empty
//! one.

pub mod async_change_manager;
pub mod change_manager;
pub mod publisher;
pub mod subject;
pub mod subscriber;
pub mod subscriber_set;
pub mod sync_change_manager;

pub use self::async_change_manager::AsyncChangeManager;
pub use self::change_manager::ChangeManager;
pub use self::publisher::{AsyncPublisher, Publisher, SyncPublisher};
pub use self::subject::{AsyncSubject, Subject, SyncSubject};
pub use self::subscriber::Subscriber;
pub use self::subscriber_set::{SharedSubscriber, SubscriberSet};
pub use self::sync_change_manager::SyncChangeManager;
pub use herald_core::{DispatchStats, DispatcherConfig, PanicPolicy};
pub use herald_error::{HeraldError, Result};
