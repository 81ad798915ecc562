//! Actions bound to a shared state machine.

use super::Action;
use crate::core::State;
use crate::machine::{SharedMachine, TransitionOutcome};

/// Requests one state each time it executes.
///
/// Named `"<machine> -> <state>"`. Executing it again re-requests, so it
/// succeeds only when the target is reachable from wherever the machine is
/// at that moment.
///
/// # Example
///
/// ```rust
/// use statekeeper::actions::Action;
/// use statekeeper::machine::{SharedMachine, StateMachine};
/// use statekeeper::config::MachineOptions;
/// use statekeeper::states::OpenClose;
///
/// let mut machine =
///     StateMachine::with_options(OpenClose::Closed, MachineOptions::named("Hatch"));
/// machine.transition(OpenClose::Closed, OpenClose::Open);
/// let hatch = SharedMachine::new(machine);
///
/// let mut open = hatch.as_scheduled_action(OpenClose::Open);
/// assert_eq!(open.name(), "Hatch -> Open");
///
/// open.execute();
/// assert!(open.last_outcome().is_some_and(|o| o.is_accepted()));
/// open.execute();
/// assert!(open.last_outcome().is_some_and(|o| o.is_rejected()));
/// ```
#[derive(Debug)]
pub struct ScheduledTransition<S: State> {
    name: String,
    machine: SharedMachine<S>,
    target: S,
    last_outcome: Option<TransitionOutcome<S>>,
}

impl<S: State> ScheduledTransition<S> {
    pub(crate) fn new(machine: SharedMachine<S>, target: S) -> Self {
        let name = format!("{} -> {}", machine.name(), target.name());
        Self {
            name,
            machine,
            target,
            last_outcome: None,
        }
    }

    pub fn target(&self) -> &S {
        &self.target
    }

    /// Outcome of the most recent execution, if it has run.
    pub fn last_outcome(&self) -> Option<&TransitionOutcome<S>> {
        self.last_outcome.as_ref()
    }
}

impl<S: State> Action for ScheduledTransition<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&mut self) {
        let outcome = self.machine.request_transition(self.target.clone());
        self.last_outcome = Some(outcome);
    }
}

/// Ticks the machine once each time it executes. Named `"<machine> tick"`.
///
/// Keeps the outcome of the request the handler issued, so a scheduler can
/// notice a handler driving the machine toward a rejected state.
#[derive(Debug)]
pub struct TickAction<S: State> {
    name: String,
    machine: SharedMachine<S>,
    last_outcome: Option<TransitionOutcome<S>>,
}

impl<S: State> TickAction<S> {
    pub(crate) fn new(machine: SharedMachine<S>) -> Self {
        let name = format!("{} tick", machine.name());
        Self {
            name,
            machine,
            last_outcome: None,
        }
    }

    /// Outcome of the request issued by the most recent tick. `None` when
    /// that tick issued no request or was skipped as busy.
    pub fn last_outcome(&self) -> Option<&TransitionOutcome<S>> {
        self.last_outcome.as_ref()
    }
}

impl<S: State> Action for TickAction<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&mut self) {
        self.last_outcome = self.machine.tick_outcome().flatten();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MachineOptions;
    use crate::machine::StateMachine;
    use crate::states::SpinDirection;

    fn turret() -> SharedMachine<SpinDirection> {
        let mut machine =
            StateMachine::with_options(SpinDirection::Clockwise, MachineOptions::named("Turret"));
        machine.transition(SpinDirection::Clockwise, SpinDirection::CounterClockwise);
        SharedMachine::new(machine)
    }

    #[test]
    fn scheduled_transition_is_named_after_machine_and_target() {
        let action = turret().as_scheduled_action(SpinDirection::CounterClockwise);
        assert_eq!(action.name(), "Turret -> CounterClockwise");
        assert_eq!(action.target(), &SpinDirection::CounterClockwise);
        assert!(action.last_outcome().is_none());
    }

    #[test]
    fn creating_the_action_does_not_request() {
        let turret = turret();
        let _action = turret.as_scheduled_action(SpinDirection::CounterClockwise);
        assert_eq!(turret.current_state(), SpinDirection::Clockwise);
    }

    #[test]
    fn tick_action_runs_current_handler() {
        let turret = turret();
        turret.with_mut(|m| {
            m.handle_next(SpinDirection::Clockwise, || SpinDirection::CounterClockwise)
        });
        let mut tick = turret.tick_action();

        assert_eq!(tick.name(), "Turret tick");
        tick.execute();

        assert_eq!(turret.current_state(), SpinDirection::CounterClockwise);
    }

    #[test]
    fn tick_action_keeps_handler_outcome() {
        let turret = turret();
        turret.with_mut(|m| {
            m.handle_next(SpinDirection::CounterClockwise, || SpinDirection::Clockwise)
        });
        let mut tick = turret.tick_action();
        assert!(tick.last_outcome().is_none());

        turret.request_transition(SpinDirection::CounterClockwise);
        tick.execute();

        assert_eq!(
            tick.last_outcome(),
            Some(&TransitionOutcome::Rejected {
                from: SpinDirection::CounterClockwise,
                to: SpinDirection::Clockwise
            })
        );
        assert_eq!(turret.current_state(), SpinDirection::CounterClockwise);
    }

    #[test]
    fn tick_action_clears_outcome_when_no_request() {
        let turret = turret();
        turret.with_mut(|m| {
            m.handle_next(SpinDirection::Clockwise, || SpinDirection::CounterClockwise)
        });
        let mut tick = turret.tick_action();

        tick.execute();
        assert!(tick.last_outcome().is_some_and(|o| o.is_accepted()));

        tick.execute();
        assert!(tick.last_outcome().is_none());
    }
}
