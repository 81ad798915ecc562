//! What to do when a requested transition is not whitelisted.

use crate::core::State;
use std::fmt;
use tracing::warn;

/// Type alias for caller-supplied rejection handlers.
pub type RejectionHandler<S> = Box<dyn FnMut(&S, &S)>;

enum Strategy<S: State> {
    Ignore,
    Log,
    Custom(RejectionHandler<S>),
}

/// Strategy invoked exactly once per rejected transition request.
///
/// The engine's state is unchanged whichever strategy is chosen.
///
/// # Example
///
/// ```rust
/// use statekeeper::machine::{InvalidTransitionPolicy, StateMachine};
/// use statekeeper::states::OpenClose;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let rejected = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&rejected);
///
/// let mut claw = StateMachine::new(OpenClose::Open);
/// claw.on_invalid_transition(InvalidTransitionPolicy::custom(move |_, _| {
///     counter.set(counter.get() + 1);
/// }));
///
/// claw.request_transition(OpenClose::Closed);
/// assert_eq!(rejected.get(), 1);
/// ```
pub struct InvalidTransitionPolicy<S: State> {
    strategy: Strategy<S>,
}

impl<S: State> InvalidTransitionPolicy<S> {
    /// Silently drop the request.
    pub fn ignore() -> Self {
        Self {
            strategy: Strategy::Ignore,
        }
    }

    /// Emit a WARN event naming both states.
    pub fn log() -> Self {
        Self {
            strategy: Strategy::Log,
        }
    }

    pub fn custom<F>(handler: F) -> Self
    where
        F: FnMut(&S, &S) + 'static,
    {
        Self {
            strategy: Strategy::Custom(Box::new(handler)),
        }
    }

    pub(crate) fn invoke(&mut self, machine: &str, from: &S, to: &S) {
        match &mut self.strategy {
            Strategy::Ignore => {}
            Strategy::Log => {
                warn!(
                    machine = machine,
                    from = from.name(),
                    to = to.name(),
                    "Attempted transition from {} to {}",
                    from.name(),
                    to.name()
                );
            }
            Strategy::Custom(handler) => handler(from, to),
        }
    }
}

impl<S: State> Default for InvalidTransitionPolicy<S> {
    fn default() -> Self {
        Self::ignore()
    }
}

impl<S: State> fmt::Debug for InvalidTransitionPolicy<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.strategy {
            Strategy::Ignore => "Ignore",
            Strategy::Log => "Log",
            Strategy::Custom(_) => "Custom",
        };
        f.debug_tuple("InvalidTransitionPolicy").field(&kind).finish()
    }
}
