// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the Herald dispatch runtime
//!
//! This crate defines the root [`HeraldError`] type shared by the queue, publisher and
//! state-machine crates. Stopping a queue is not an error: a stopped `BlockingQueue`
//! hands out `None` instead.
//!
//! # Examples
//!
//! ```
//! use herald_error::{HeraldError, Result};
//!
//! fn route(accepted: bool) -> Result<()> {
//!     if accepted {
//!         Ok(())
//!     } else {
//!         Err(HeraldError::unhandled_input::<u8, char>())
//!     }
//! }
//!
//! assert!(route(true).is_ok());
//! assert!(route(false).unwrap_err().is_recoverable());
//! ```

use std::any::Any;

/// Root error type for all Herald operations
#[derive(Debug, thiserror::Error)]
pub enum HeraldError {
    /// The active state does not declare a handler for the input's type
    ///
    /// Dispatch is left untouched: no handler ran and the state did not change.
    #[error("State `{state}` does not accept input of type `{input}`")]
    UnhandledInput {
        /// Type name of the active state
        state: &'static str,
        /// Type name of the rejected input
        input: &'static str,
    },

    /// A dispatcher callback panicked while processing an item
    ///
    /// The panic is caught on the dispatcher thread; it never unwinds into the owner.
    #[error("Callback panicked on `{dispatcher}`: {message}")]
    CallbackPanicked {
        /// Name of the dispatcher thread
        dispatcher: String,
        /// Panic payload rendered as text
        message: String,
    },

    /// The operating system refused to start a dispatcher thread
    #[error("Failed to spawn dispatcher thread `{name}`: {source}")]
    SpawnFailed {
        /// Requested thread name
        name: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A dispatcher thread terminated by unwinding instead of returning
    #[error("Dispatcher thread `{name}` terminated abnormally")]
    JoinFailed {
        /// Name of the dispatcher thread
        name: String,
    },

    /// A dispatcher was asked to start after it had been shut down
    #[error("Dispatcher `{name}` has been shut down and cannot be restarted")]
    ShutDown {
        /// Name of the dispatcher thread
        name: String,
    },

    /// Another error annotated with the operation that produced it
    #[error("{context}: {source}")]
    Context {
        /// What was being attempted
        context: String,
        /// The annotated error
        #[source]
        source: Box<HeraldError>,
    },
}

impl HeraldError {
    /// Create an unhandled-input error for state `S` receiving input `I`
    #[must_use]
    pub fn unhandled_input<S: ?Sized, I: ?Sized>() -> Self {
        Self::UnhandledInput {
            state: core::any::type_name::<S>(),
            input: core::any::type_name::<I>(),
        }
    }

    /// Create a callback-panicked error from a caught panic payload
    pub fn callback_panicked(dispatcher: impl Into<String>, payload: &(dyn Any + Send)) -> Self {
        Self::CallbackPanicked {
            dispatcher: dispatcher.into(),
            message: panic_message(payload),
        }
    }

    /// Create a spawn error for the named thread
    pub fn spawn_failed(name: impl Into<String>, source: std::io::Error) -> Self {
        Self::SpawnFailed {
            name: name.into(),
            source,
        }
    }

    /// Create a join error for the named thread
    pub fn join_failed(name: impl Into<String>) -> Self {
        Self::JoinFailed { name: name.into() }
    }

    /// Create a shut-down error for the named dispatcher
    pub fn shut_down(name: impl Into<String>) -> Self {
        Self::ShutDown { name: name.into() }
    }

    /// Check if dispatch can carry on normally after this error
    ///
    /// Unhandled inputs and isolated callback panics leave the runtime usable.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::UnhandledInput { .. } | Self::CallbackPanicked { .. } => true,
            Self::SpawnFailed { .. } | Self::JoinFailed { .. } | Self::ShutDown { .. } => false,
            Self::Context { source, .. } => source.is_recoverable(),
        }
    }

    /// Check if this error stems from thread management rather than user code
    #[must_use]
    pub fn is_thread_error(&self) -> bool {
        match self {
            Self::SpawnFailed { .. } | Self::JoinFailed { .. } => true,
            Self::UnhandledInput { .. } | Self::CallbackPanicked { .. } | Self::ShutDown { .. } => {
                false
            }
            Self::Context { source, .. } => source.is_thread_error(),
        }
    }

    /// The innermost error, looking through any [`Context`](Self::Context) layers
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Extension trait for annotating Herald results with context
///
/// ```
/// use herald_error::{HeraldError, ResultExt};
///
/// let failed: Result<(), HeraldError> = Err(HeraldError::join_failed("orders"));
/// let err = failed.context("stopping order feed").unwrap_err();
///
/// assert_eq!(
///     err.to_string(),
///     "stopping order feed: Dispatcher thread `orders` terminated abnormally"
/// );
/// assert!(err.is_thread_error());
/// ```
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(HeraldError::Context)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(HeraldError::Context)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<HeraldError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| HeraldError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| HeraldError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

/// Render a panic payload as text.
///
/// `panic!` payloads are either `&'static str` or `String`; anything else is reported
/// as `"unknown panic"`.
#[must_use]
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Specialized Result type for Herald operations
pub type Result<T> = std::result::Result<T, HeraldError>;
