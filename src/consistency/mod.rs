//! Optional strict-mode checks for a machine's configuration.
//!
//! The engine itself never validates its whitelist: a dead state or a
//! self-transition that can never match is accepted policy, not failure.
//! These checks let a caller opt into catching such configuration at
//! construction time. Like the rest of the crate they never stop at the
//! first problem; every violation is collected in one pass.
//!
//! # Example
//!
//! ```rust
//! use statekeeper::consistency::{check, ConsistencyViolation};
//! use statekeeper::machine::StateMachine;
//! use statekeeper::states::LinearDirection;
//! use stillwater::validation::Validation;
//!
//! let mut roller = StateMachine::new(LinearDirection::Neutral);
//! roller.transition(LinearDirection::Neutral, LinearDirection::Forward);
//!
//! match check(&roller) {
//!     Validation::Failure(violations) => assert_eq!(
//!         violations.into_vec(),
//!         vec![ConsistencyViolation::UnreachableState {
//!             state: LinearDirection::Reverse
//!         }]
//!     ),
//!     Validation::Success(_) => panic!("Reverse should be unreachable"),
//! }
//! ```

pub mod rules;
pub mod violations;

pub use rules::{check, reachable_states, ConsistencyReport};
pub use violations::ConsistencyViolation;
