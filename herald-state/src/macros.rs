// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Declares the closed set of states of a machine and the inputs it routes.
///
/// ```text
/// state_machine! {
///     #[derive(Debug)]
///     pub enum Phase for Context {
///         states: [Idle, Running],
///         inputs: [Start, Tick, u32],
///     }
/// }
/// ```
///
/// generates:
///
/// - `enum Phase { Idle(Idle), Running(Running) }`, deriving `Clone` (so every state
///   type must be `Clone`) plus whatever attributes were given;
/// - `From<Idle> for Phase` and `From<Running> for Phase`;
/// - `Phase::state_name()`, the name of the active variant;
/// - one [`Delegate<Context, I>`](crate::Delegate) impl per listed input.
///
/// For each `(state, input)` pair the routing is decided at compile time: if the state
/// implements [`Handle<Context, I>`](crate::Handle) its handler runs, otherwise
/// `delegate` returns [`HeraldError::UnhandledInput`](herald_error::HeraldError::UnhandledInput).
/// States are listed by their bare type name, which also names the variant.
///
/// # Example
///
/// ```
/// use herald_state::{state_machine, Handle, StateContext, StateMachine};
///
/// #[derive(Debug, Clone, Copy)]
/// struct Locked;
/// #[derive(Debug, Clone, Copy)]
/// struct Unlocked;
///
/// struct Coin;
/// struct Push;
///
/// state_machine! {
///     #[derive(Debug)]
///     enum Turnstile for Gate {
///         states: [Locked, Unlocked],
///         inputs: [Coin, Push],
///     }
/// }
///
/// struct Gate {
///     machine: StateMachine<Turnstile>,
///     passed: u32,
/// }
///
/// impl StateContext for Gate {
///     type Phase = Turnstile;
///
///     fn machine(&self) -> &StateMachine<Turnstile> {
///         &self.machine
///     }
///
///     fn machine_mut(&mut self) -> &mut StateMachine<Turnstile> {
///         &mut self.machine
///     }
/// }
///
/// impl Handle<Gate, Coin> for Locked {
///     fn handle(&self, gate: &mut Gate, _coin: Coin) {
///         gate.change_state(Unlocked);
///     }
/// }
///
/// impl Handle<Gate, Push> for Unlocked {
///     fn handle(&self, gate: &mut Gate, _push: Push) {
///         gate.passed += 1;
///         gate.change_state(Locked);
///     }
/// }
///
/// let mut gate = Gate { machine: StateMachine::new(Locked), passed: 0 };
///
/// assert!(gate.delegate(Push).is_err());
/// gate.delegate(Coin)?;
/// gate.delegate(Push)?;
///
/// assert_eq!(gate.passed, 1);
/// assert_eq!(gate.current_state().state_name(), "Locked");
/// # Ok::<(), herald_error::HeraldError>(())
/// ```
#[macro_export]
macro_rules! state_machine {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $ctx:ty {
            states: $states:tt,
            inputs: [ $($input:ty),* $(,)? ] $(,)?
        }
    ) => {
        $crate::state_machine!(@phase [$(#[$meta])*] $vis $name $states);
        $( $crate::state_machine!(@delegate $name, $ctx, $input, $states); )*
    };

    (@phase [$(#[$meta:meta])*] $vis:vis $name:ident [ $($state:ident),+ $(,)? ]) => {
        $(#[$meta])*
        #[derive(Clone)]
        $vis enum $name {
            $( $state($state), )+
        }

        impl $name {
            /// Name of the active state.
            #[allow(dead_code)]
            #[must_use]
            pub fn state_name(&self) -> &'static str {
                match self {
                    $( Self::$state(_) => ::core::stringify!($state), )+
                }
            }
        }

        $(
            impl ::core::convert::From<$state> for $name {
                fn from(state: $state) -> Self {
                    Self::$state(state)
                }
            }
        )+
    };

    (@delegate $name:ident, $ctx:ty, $input:ty, [ $($state:ident),+ $(,)? ]) => {
        impl $crate::Delegate<$ctx, $input> for $name {
            fn delegate(&self, ctx: &mut $ctx, input: $input) -> $crate::__private::Result<()> {
                #[allow(unused_imports)]
                use $crate::__private::{AcceptedKind as _, RejectedKind as _};

                match self {
                    $(
                        Self::$state(state) => {
                            (&$crate::__private::Probe::<$state, $ctx, $input>::new())
                                .kind()
                                .dispatch(state, ctx, input)
                        }
                    )+
                }
            }
        }
    };
}
