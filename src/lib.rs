//! Statekeeper: a declarative, tick-driven state machine for robot subsystems
//!
//! A device controller (a claw, an arm, a drive mode selector) declares its
//! state space, the transitions it will honor, what happens on entering and
//! leaving each state, and what to do on every control-loop tick while in a
//! state. The engine enforces the whitelist, runs hooks in a fixed order and
//! exposes transitions as named deferred actions for whatever scheduler
//! drives the robot.
//!
//! # Core Concepts
//!
//! - **State**: a payload-free, enumerable value via the `State` trait
//! - **Whitelist**: only declared `(from, to)` pairs ever take effect
//! - **Hooks**: exit hook, state change and entry hook run as one step
//! - **Handlers**: per-state behavior run once per external tick
//! - **Fail-soft**: rejected requests go to a policy; nothing panics
//!
//! # Example
//!
//! ```rust
//! use statekeeper::builder::StateMachineBuilder;
//! use statekeeper::states::OpenClose;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let solenoid = Rc::new(Cell::new(false));
//! let extend = Rc::clone(&solenoid);
//! let retract = Rc::clone(&solenoid);
//!
//! let mut claw = StateMachineBuilder::new()
//!     .initial(OpenClose::Open)
//!     .name("Claw")
//!     .transition(OpenClose::Open, OpenClose::Closed)
//!     .transition(OpenClose::Closed, OpenClose::Open)
//!     .on_entry(OpenClose::Closed, move || extend.set(true))
//!     .on_entry(OpenClose::Open, move || retract.set(false))
//!     .handle_next(OpenClose::Open, || OpenClose::Closed)
//!     .build()
//!     .unwrap();
//!
//! claw.tick();
//! assert_eq!(claw.current_state(), &OpenClose::Closed);
//! assert!(solenoid.get());
//! ```

pub mod actions;
pub mod builder;
pub mod config;
pub mod consistency;
pub mod core;
pub mod machine;
pub mod states;
pub mod subsystem;

// Re-export commonly used types
pub use actions::{Action, ScheduledTransition, TickAction};
pub use builder::{BuildError, StateMachineBuilder};
pub use config::MachineOptions;
pub use crate::core::{State, Transition};
pub use machine::{InvalidTransitionPolicy, SharedMachine, StateMachine, TransitionOutcome};
pub use subsystem::Subsystem;
