// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Receives change notifications from subjects of type `S`.
///
/// A single type may implement `Subscriber` for several unrelated subject types and be
/// attached to all of them.
///
/// ```
/// use herald_publish::Subscriber;
///
/// struct Temperature(f32);
/// struct Humidity(u8);
///
/// struct Dashboard;
///
/// impl Subscriber<Temperature> for Dashboard {
///     fn update(&self, subject: &Temperature) {
///         println!("{:.1} C", subject.0);
///     }
/// }
///
/// impl Subscriber<Humidity> for Dashboard {
///     fn update(&self, subject: &Humidity) {
///         println!("{} %", subject.0);
///     }
/// }
/// ```
pub trait Subscriber<S: ?Sized>: Send + Sync {
    /// Called once per notification, on the notifying thread (sync) or the dispatcher
    /// thread (async).
    fn update(&self, subject: &S);
}

impl<S: ?Sized, F> Subscriber<S> for F
where
    F: Fn(&S) + Send + Sync,
{
    fn update(&self, subject: &S) {
        self(subject);
    }
}
