//! End-to-end scenarios with concrete subsystems driven the way a control
//! loop drives them: one tick action per cycle, plus scheduled transitions.

use statekeeper::actions::Action;
use statekeeper::builder::StateMachineBuilder;
use statekeeper::machine::{InvalidTransitionPolicy, SharedMachine, TransitionOutcome};
use statekeeper::states::{LinearDirection, OpenClose};
use statekeeper::subsystem::Subsystem;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Stand-in for a double solenoid.
#[derive(Default)]
struct Solenoid {
    extended: Cell<bool>,
    writes: Cell<usize>,
}

impl Solenoid {
    fn set(&self, extended: bool) {
        self.extended.set(extended);
        self.writes.set(self.writes.get() + 1);
    }
}

/// A claw that closes itself on the first tick after opening.
struct Claw {
    machine: SharedMachine<OpenClose>,
    solenoid: Rc<Solenoid>,
}

impl Claw {
    fn new() -> Self {
        let solenoid = Rc::new(Solenoid::default());
        let close = Rc::clone(&solenoid);
        let open = Rc::clone(&solenoid);

        let machine = StateMachineBuilder::new()
            .initial(OpenClose::Open)
            .name("Claw")
            .transition(OpenClose::Open, OpenClose::Closed)
            .transition(OpenClose::Closed, OpenClose::Open)
            .on_entry(OpenClose::Closed, move || close.set(true))
            .on_entry(OpenClose::Open, move || open.set(false))
            .handle_next(OpenClose::Open, || OpenClose::Closed)
            .on_invalid_transition(InvalidTransitionPolicy::log())
            .build_shared()
            .unwrap();

        Self { machine, solenoid }
    }
}

impl Subsystem<OpenClose> for Claw {
    fn machine(&self) -> &SharedMachine<OpenClose> {
        &self.machine
    }

    fn safe_state(&mut self) {
        self.machine.request_transition(OpenClose::Open);
    }
}

/// A three-way mode selector that can never return to neutral.
struct ModeSelector {
    machine: SharedMachine<LinearDirection>,
    rejected: Rc<RefCell<Vec<(LinearDirection, LinearDirection)>>>,
}

impl ModeSelector {
    fn new() -> Self {
        use LinearDirection::*;

        let rejected = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&rejected);

        let machine = StateMachineBuilder::new()
            .initial(Neutral)
            .name("Selector")
            .transitions([
                (Neutral, Forward),
                (Neutral, Reverse),
                (Reverse, Forward),
                (Forward, Reverse),
            ])
            .on_entry(Forward, || {})
            .on_entry(Reverse, || {})
            .on_invalid_transition(InvalidTransitionPolicy::custom(move |from, to| {
                sink.borrow_mut().push((*from, *to))
            }))
            .build_shared()
            .unwrap();

        Self { machine, rejected }
    }
}

impl Subsystem<LinearDirection> for ModeSelector {
    fn machine(&self) -> &SharedMachine<LinearDirection> {
        &self.machine
    }

    fn safe_state(&mut self) {}
}

#[test]
fn claw_closes_on_first_tick_and_stays_closed() {
    let claw = Claw::new();
    let mut tick = claw.machine().tick_action();

    tick.execute();
    assert_eq!(claw.state(), OpenClose::Closed);
    assert!(claw.solenoid.extended.get());

    tick.execute();
    assert_eq!(claw.state(), OpenClose::Closed);
    assert_eq!(claw.solenoid.writes.get(), 1);
}

#[test]
fn claw_safe_state_reopens() {
    let mut claw = Claw::new();
    claw.machine().tick();

    claw.safe_state();

    assert_eq!(claw.state(), OpenClose::Open);
    assert!(!claw.solenoid.extended.get());
}

#[test]
fn claw_rejection_is_logged_not_fatal() {
    let claw = Claw::new();

    let outcome = claw.machine().request_transition(OpenClose::Open);

    assert_eq!(
        outcome,
        TransitionOutcome::Rejected {
            from: OpenClose::Open,
            to: OpenClose::Open
        }
    );
    assert_eq!(claw.state(), OpenClose::Open);
    assert_eq!(claw.solenoid.writes.get(), 0);
}

#[test]
fn selector_cannot_return_to_neutral() {
    let selector = ModeSelector::new();
    let mut forward = selector.change_state(LinearDirection::Forward);
    let mut neutral = selector.change_state(LinearDirection::Neutral);

    forward.execute();
    neutral.execute();

    assert_eq!(selector.state(), LinearDirection::Forward);
    assert_eq!(
        *selector.rejected.borrow(),
        vec![(LinearDirection::Forward, LinearDirection::Neutral)]
    );
}

#[test]
fn selector_flips_between_directions() {
    let selector = ModeSelector::new();
    let mut forward = selector.change_state(LinearDirection::Forward);
    let mut reverse = selector.change_state(LinearDirection::Reverse);

    reverse.execute();
    forward.execute();
    reverse.execute();

    assert_eq!(selector.state(), LinearDirection::Reverse);
    assert!(selector.rejected.borrow().is_empty());
}

#[test]
fn one_way_scheduled_action_succeeds_once() {
    let hatch = StateMachineBuilder::new()
        .initial(OpenClose::Closed)
        .name("Hatch")
        .transition(OpenClose::Closed, OpenClose::Open)
        .build_shared()
        .unwrap();
    let mut open = hatch.as_scheduled_action(OpenClose::Open);

    open.execute();
    assert!(open.last_outcome().is_some_and(|o| o.is_accepted()));
    assert_eq!(hatch.current_state(), OpenClose::Open);

    open.execute();
    assert!(open.last_outcome().is_some_and(|o| o.is_rejected()));
    assert_eq!(hatch.current_state(), OpenClose::Open);
}

#[test]
fn control_loop_runs_queued_actions_in_order() {
    let claw = Claw::new();
    let mut queue: Vec<Box<dyn Action>> = vec![
        Box::new(claw.machine().tick_action()),
        Box::new(claw.change_state(OpenClose::Open)),
        Box::new(claw.change_state(OpenClose::Closed)),
    ];

    let names: Vec<String> = queue.iter().map(|a| a.name().to_string()).collect();
    assert_eq!(names, vec!["Claw tick", "Claw -> Open", "Claw -> Closed"]);

    for action in queue.iter_mut() {
        action.execute();
    }

    assert_eq!(claw.state(), OpenClose::Closed);
    assert_eq!(claw.solenoid.writes.get(), 3);
}

#[test]
fn hook_requesting_a_transition_is_refused() {
    let selector = ModeSelector::new();
    let handle = selector.machine().clone();
    let inner = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&inner);
    selector.machine().with_mut(|m| {
        m.on_exit(LinearDirection::Neutral, move || {
            *slot.borrow_mut() = Some(handle.request_transition(LinearDirection::Reverse));
        })
    });

    let outcome = selector.machine().request_transition(LinearDirection::Forward);

    assert!(outcome.is_accepted());
    assert_eq!(
        *inner.borrow(),
        Some(TransitionOutcome::Busy {
            to: LinearDirection::Reverse
        })
    );
    assert_eq!(selector.state(), LinearDirection::Forward);
    assert!(selector.rejected.borrow().is_empty());
}
