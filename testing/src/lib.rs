//! # AroundU Testing
//!
//! Testing utilities and helpers for AroundU reducers.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness that runs a reducer without a store
//! - [`assertions`]: Helpers for inspecting returned effects
//!
//! ## Example
//!
//! ```ignore
//! use aroundu_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(BrowseReducer::new())
//!     .with_env(test_environment())
//!     .given_state(BrowseState::default())
//!     .when_action(BrowseAction::NextPage)
//!     .then_state(|state| assert_eq!(state.page, 2))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

pub mod reducer_test;

// Re-export commonly used items
pub use reducer_test::{ReducerTest, assertions};
