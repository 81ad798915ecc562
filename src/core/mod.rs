//! Core state machine types.
//!
//! This module contains the data model shared by every other module:
//! - State definitions via the `State` trait
//! - Whitelist entries via `Transition`

mod state;
mod transition;

pub use state::State;
pub use transition::Transition;
