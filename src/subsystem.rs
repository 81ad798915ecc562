//! Device controllers built on a state machine.

use crate::actions::ScheduledTransition;
use crate::core::State;
use crate::machine::SharedMachine;

/// A concrete device controller (claw, arm, intake) whose behavior is
/// declared as a state machine.
///
/// The controller decides what "safe" means; the machine never resets
/// itself. A typical `safe_state` requests a transition back to a resting
/// state, and a controller with nothing to make safe leaves it empty.
pub trait Subsystem<S: State> {
    fn name(&self) -> &str {
        self.machine().name()
    }

    fn machine(&self) -> &SharedMachine<S>;

    /// Put the device into a state where nothing moves.
    fn safe_state(&mut self);

    /// Reset internal bookkeeping. Defaults to doing nothing.
    fn reset(&mut self) {}

    /// The last completed state of the machine.
    fn state(&self) -> S {
        self.machine().current_state()
    }

    /// A deferred action moving this subsystem to `new_state`.
    fn change_state(&self, new_state: S) -> ScheduledTransition<S> {
        self.machine().as_scheduled_action(new_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::config::MachineOptions;
    use crate::machine::StateMachine;
    use crate::states::Direction;

    struct Conveyor {
        machine: SharedMachine<Direction>,
        resets: usize,
    }

    impl Conveyor {
        fn new() -> Self {
            let mut machine =
                StateMachine::with_options(Direction::Neutral, MachineOptions::named("Conveyor"));
            machine.transition(Direction::Neutral, Direction::Forward);
            machine.transition(Direction::Forward, Direction::Neutral);
            Self {
                machine: SharedMachine::new(machine),
                resets: 0,
            }
        }
    }

    impl Subsystem<Direction> for Conveyor {
        fn machine(&self) -> &SharedMachine<Direction> {
            &self.machine
        }

        fn safe_state(&mut self) {
            self.machine.request_transition(Direction::Neutral);
        }

        fn reset(&mut self) {
            self.resets += 1;
        }
    }

    #[test]
    fn name_comes_from_machine() {
        assert_eq!(Conveyor::new().name(), "Conveyor");
    }

    #[test]
    fn change_state_then_safe_state() {
        let mut conveyor = Conveyor::new();
        let mut run = conveyor.change_state(Direction::Forward);
        assert_eq!(run.name(), "Conveyor -> Forward");

        run.execute();
        assert_eq!(conveyor.state(), Direction::Forward);

        conveyor.safe_state();
        assert_eq!(conveyor.state(), Direction::Neutral);
    }

    #[test]
    fn reset_is_the_controllers_business() {
        let mut conveyor = Conveyor::new();
        conveyor.reset();
        assert_eq!(conveyor.resets, 1);
        assert_eq!(conveyor.state(), Direction::Neutral);
    }
}
