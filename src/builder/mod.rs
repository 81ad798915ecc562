//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and a macro for declaring a state
//! space, its whitelist and its hooks with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
