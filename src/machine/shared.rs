//! Shared, re-entrancy-checked handle to a state machine.

use crate::actions::{ScheduledTransition, TickAction};
use crate::core::State;
use crate::machine::engine::StateMachine;
use crate::machine::outcome::TransitionOutcome;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::warn;

struct Inner<S: State> {
    name: String,
    machine: RefCell<StateMachine<S>>,
    committed: RefCell<S>,
}

/// Cloneable single-threaded handle to a [`StateMachine`].
///
/// Every clone drives the same machine. A request made while the machine is
/// already mid-operation (for example from inside one of its own hooks) is
/// refused with [`TransitionOutcome::Busy`] instead of interleaving with the
/// running transition.
///
/// [`current_state`](Self::current_state) only ever reports a state that a
/// completed operation left behind; observers running inside a hook see the
/// state from before the transition began.
///
/// # Example
///
/// ```rust
/// use statekeeper::machine::{SharedMachine, StateMachine};
/// use statekeeper::states::OpenClose;
///
/// let mut machine = StateMachine::new(OpenClose::Closed);
/// machine.transition(OpenClose::Closed, OpenClose::Open);
///
/// let shared = SharedMachine::new(machine);
/// let other = shared.clone();
///
/// assert!(other.request_transition(OpenClose::Open).is_accepted());
/// assert_eq!(shared.current_state(), OpenClose::Open);
/// ```
pub struct SharedMachine<S: State> {
    inner: Rc<Inner<S>>,
}

impl<S: State> SharedMachine<S> {
    pub fn new(machine: StateMachine<S>) -> Self {
        let name = machine.name().to_string();
        let committed = machine.current_state().clone();
        Self {
            inner: Rc::new(Inner {
                name,
                machine: RefCell::new(machine),
                committed: RefCell::new(committed),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The last state a completed operation left the machine in.
    pub fn current_state(&self) -> S {
        self.inner.committed.borrow().clone()
    }

    /// Whether an operation is running right now.
    pub fn is_busy(&self) -> bool {
        self.inner.machine.try_borrow_mut().is_err()
    }

    /// Request a transition, or report [`TransitionOutcome::Busy`] if the
    /// machine is mid-operation.
    pub fn request_transition(&self, new_state: S) -> TransitionOutcome<S> {
        let Ok(mut machine) = self.inner.machine.try_borrow_mut() else {
            warn!(
                machine = %self.inner.name,
                to = new_state.name(),
                "transition requested while machine is busy"
            );
            return TransitionOutcome::Busy { to: new_state };
        };

        let outcome = machine.request_transition(new_state);
        self.commit(&machine);
        outcome
    }

    /// Tick the machine. Returns `false` if it was busy and the tick skipped.
    pub fn tick(&self) -> bool {
        self.tick_outcome().is_some()
    }

    /// Tick the machine and report what the handler's request produced.
    ///
    /// `None` when the machine was busy and the tick skipped; `Some(None)`
    /// when the tick ran but issued no request.
    pub fn tick_outcome(&self) -> Option<Option<TransitionOutcome<S>>> {
        let Ok(mut machine) = self.inner.machine.try_borrow_mut() else {
            warn!(machine = %self.inner.name, "tick skipped while machine is busy");
            return None;
        };

        let outcome = machine.tick();
        self.commit(&machine);
        Some(outcome)
    }

    /// Read the machine. `None` while an operation is running.
    pub fn with<R>(&self, f: impl FnOnce(&StateMachine<S>) -> R) -> Option<R> {
        let machine = self.inner.machine.try_borrow().ok()?;
        Some(f(&machine))
    }

    /// Configure the machine after the handle exists, e.g. to register hooks
    /// that capture a clone of the handle. `None` while an operation is
    /// running.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut StateMachine<S>) -> R) -> Option<R> {
        let mut machine = self.inner.machine.try_borrow_mut().ok()?;
        let result = f(&mut machine);
        self.commit(&machine);
        Some(result)
    }

    /// A named deferred action requesting `new_state` each time it executes.
    pub fn as_scheduled_action(&self, new_state: S) -> ScheduledTransition<S> {
        ScheduledTransition::new(self.clone(), new_state)
    }

    /// A named deferred action ticking the machine each time it executes.
    pub fn tick_action(&self) -> TickAction<S> {
        TickAction::new(self.clone())
    }

    fn commit(&self, machine: &StateMachine<S>) {
        *self.inner.committed.borrow_mut() = machine.current_state().clone();
    }
}

impl<S: State> Clone for SharedMachine<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: State> From<StateMachine<S>> for SharedMachine<S> {
    fn from(machine: StateMachine<S>) -> Self {
        Self::new(machine)
    }
}

impl<S: State> fmt::Debug for SharedMachine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedMachine")
            .field("name", &self.inner.name)
            .field("current", &*self.inner.committed.borrow())
            .field("busy", &self.is_busy())
            .finish()
    }
}
