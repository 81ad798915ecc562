//! Whitelist entries.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered `(from, to)` pair the machine is allowed to take.
///
/// Transitions are plain values; the whitelist is a set of them, so
/// declaring the same pair twice has no additional effect.
///
/// # Example
///
/// ```rust
/// use statekeeper::core::Transition;
/// use statekeeper::states::OpenClose;
///
/// let close = Transition::new(OpenClose::Open, OpenClose::Closed);
/// assert_eq!(close.to_string(), "Open -> Closed");
/// assert!(!close.is_self_transition());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
}

impl<S: State> Transition<S> {
    pub fn new(from: S, to: S) -> Self {
        Self { from, to }
    }

    /// Whether this pair leaves and re-enters the same state.
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}

impl<S: State> fmt::Display for Transition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from.name(), self.to.name())
    }
}
