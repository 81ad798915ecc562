//! Consistency violations found in a machine's configuration.

use thiserror::Error;

/// Dead or ineffective configuration. None of these stops a machine from
/// running; strict builds refuse them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyViolation<S> {
    #[error("State {state:?} is unreachable from the initial state")]
    UnreachableState { state: S },

    #[error("Self-transition on {state:?} is declared but self-transitions are not allowed")]
    IneffectiveSelfTransition { state: S },

    #[error("Hook or handler registered for unreachable state {state:?}")]
    UnreachableHook { state: S },
}

impl<S> ConsistencyViolation<S> {
    /// The state the violation is about.
    pub fn state(&self) -> &S {
        match self {
            Self::UnreachableState { state }
            | Self::IneffectiveSelfTransition { state }
            | Self::UnreachableHook { state } => state,
        }
    }
}
