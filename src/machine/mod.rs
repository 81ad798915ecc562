//! The state machine engine and its handles.
//!
//! # Key Concepts
//!
//! - **Whitelist**: only declared `(from, to)` pairs are ever taken
//! - **Hooks**: exit hook, state change, entry hook run as one step
//! - **Handlers**: per-state behavior run once per external tick
//! - **Policy**: rejected requests go to a strategy value, never to a panic
//! - **Shared handle**: clones of one machine with re-entrant requests refused

mod engine;
mod outcome;
mod policy;
mod shared;

pub use engine::{Hook, StateMachine};
pub use outcome::TransitionOutcome;
pub use policy::{InvalidTransitionPolicy, RejectionHandler};
pub use shared::SharedMachine;
