//! Build errors for state machines.

use crate::consistency::ConsistencyViolation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Errors that can occur when building state machines.
#[derive(Debug, Error)]
pub enum BuildError<S> {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Strict build found {} consistency violation(s)", .violations.len())]
    Inconsistent {
        violations: NonEmptyVec<ConsistencyViolation<S>>,
    },
}
