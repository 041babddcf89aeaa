// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{SharedSubscriber, Subscriber};
use std::sync::Arc;

/// Subscription bookkeeping shared by the synchronous and asynchronous managers.
///
/// A manager is owned by exactly one [`Publisher`](crate::Publisher); how it notifies
/// is mode specific and lives on the concrete type.
pub trait ChangeManager<S> {
    /// Registers `subscriber` for future notifications.
    fn attach(&self, subscriber: SharedSubscriber<S>);

    /// Unregisters every attachment of `subscriber`.
    ///
    /// Detaching a subscriber that was never attached is a no-op.
    fn detach<T>(&self, subscriber: &Arc<T>)
    where
        T: Subscriber<S> + ?Sized;

    /// Number of attachments, duplicates included.
    fn subscriber_count(&self) -> usize;

    /// A manager in the same configuration with no subscribers and nothing pending.
    #[must_use]
    fn fresh(&self) -> Self
    where
        Self: Sized;
}
