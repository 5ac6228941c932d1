//! # AroundU Core
//!
//! Reducer and effect abstractions for the AroundU catalog.
//!
//! UI-facing state in the catalog is modelled as a state machine driven by
//! a pure reducer. This crate holds the pieces every such state machine
//! shares; the runtime that owns state and executes effects lives in
//! `aroundu-runtime`.
//!
//! ## Core Concepts
//!
//! - **State**: Data owned by one feature (e.g. the browse page)
//! - **Action**: Every input the feature can receive
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Description of work to perform later, never the work itself
//! - **Environment**: Injected, read-only dependencies
//!
//! ## Example
//!
//! ```ignore
//! use aroundu_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! impl Reducer for BrowseReducer {
//!     type State = BrowseState;
//!     type Action = BrowseAction;
//!     type Environment = BrowseEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut BrowseState,
//!         action: BrowseAction,
//!         env: &BrowseEnvironment,
//!     ) -> SmallVec<[Effect<BrowseAction>; 4]> {
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Reducer module - The core trait for feature logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They are deterministic and testable without a runtime.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for feature logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// Updates `state` in place and returns effect descriptions for the
        /// runtime to execute. Must not perform I/O itself.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects are values returned from reducers and executed by the Store.
pub mod effect {
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Dispatch `action` back into the store once `duration` has elapsed
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },
    }

    impl<Action> Effect<Action> {
        /// Build a delayed action effect
        #[must_use]
        pub fn delay(duration: Duration, action: Action) -> Self {
            Self::Delay {
                duration,
                action: Box::new(action),
            }
        }

        /// Whether this effect does nothing
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Self::None)
        }
    }
}
