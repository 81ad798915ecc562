//! The tick-driven state machine engine.

use crate::config::MachineOptions;
use crate::core::{State, Transition};
use crate::machine::outcome::TransitionOutcome;
use crate::machine::policy::InvalidTransitionPolicy;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::trace;

/// Type alias for entry and exit hooks.
pub type Hook = Box<dyn FnMut()>;

/// Periodic behavior registered for one state.
enum Handler<S> {
    /// Side effects only
    Run(Box<dyn FnMut()>),
    /// Computes the next state and submits it as a transition request
    Next(Box<dyn FnMut() -> S>),
}

/// A finite state machine with a transition whitelist, per-state
/// entry/exit hooks and per-state periodic handlers.
///
/// The machine does nothing on its own: time advances only through
/// [`tick`](Self::tick), and state changes only through
/// [`request_transition`](Self::request_transition). Every misuse is
/// handled by policy rather than by failing, so a live control loop never
/// aborts because of a configuration mistake.
///
/// Hooks and handlers own whatever they actuate and receive no handle back
/// to the machine, so a hook cannot request a transition on a directly
/// owned machine. Use [`SharedMachine`](crate::machine::SharedMachine) when
/// transitions must be requested from several places.
///
/// # Example
///
/// ```rust
/// use statekeeper::machine::StateMachine;
/// use statekeeper::states::OpenClose;
///
/// let mut claw = StateMachine::new(OpenClose::Open);
/// claw.transition(OpenClose::Open, OpenClose::Closed);
/// claw.transition(OpenClose::Closed, OpenClose::Open);
/// claw.handle_next(OpenClose::Open, || OpenClose::Closed);
///
/// claw.tick();
/// assert_eq!(claw.current_state(), &OpenClose::Closed);
///
/// claw.tick();
/// assert_eq!(claw.current_state(), &OpenClose::Closed);
/// ```
pub struct StateMachine<S: State> {
    name: String,
    initial: S,
    current: S,
    allow_same_transition: bool,
    transitions: HashSet<Transition<S>>,
    declared: Vec<Transition<S>>,
    on_entry: HashMap<S, Hook>,
    on_exit: HashMap<S, Hook>,
    handlers: HashMap<S, Handler<S>>,
    on_invalid: InvalidTransitionPolicy<S>,
}

impl<S: State> StateMachine<S> {
    /// Create a machine in `initial` that rejects self-transitions.
    pub fn new(initial: S) -> Self {
        Self::with_options(initial, MachineOptions::default())
    }

    pub fn with_options(initial: S, options: MachineOptions) -> Self {
        Self {
            name: options.name,
            initial: initial.clone(),
            current: initial,
            allow_same_transition: options.allow_same_transition,
            transitions: HashSet::new(),
            declared: Vec::new(),
            on_entry: HashMap::new(),
            on_exit: HashMap::new(),
            handlers: HashMap::new(),
            on_invalid: InvalidTransitionPolicy::default(),
        }
    }

    /// Whitelist `from -> to`. Declaring a pair twice has no further effect.
    pub fn transition(&mut self, from: S, to: S) {
        let transition = Transition::new(from, to);
        if self.transitions.insert(transition.clone()) {
            self.declared.push(transition);
        }
    }

    /// Run `hook` every time `state` is entered. Replaces any earlier hook.
    pub fn on_entry<F>(&mut self, state: S, hook: F)
    where
        F: FnMut() + 'static,
    {
        self.on_entry.insert(state, Box::new(hook));
    }

    /// Run `hook` every time `state` is left. Replaces any earlier hook.
    pub fn on_exit<F>(&mut self, state: S, hook: F)
    where
        F: FnMut() + 'static,
    {
        self.on_exit.insert(state, Box::new(hook));
    }

    /// Run `action` on every tick spent in `state`.
    pub fn handle<F>(&mut self, state: S, action: F)
    where
        F: FnMut() + 'static,
    {
        self.handlers.insert(state, Handler::Run(Box::new(action)));
    }

    /// On every tick spent in `state`, compute the next state and request it.
    ///
    /// A computed state equal to the current one is not requested unless
    /// self-transitions are allowed, so a handler that wants to stay put does
    /// not trip the rejection policy every tick.
    pub fn handle_next<F>(&mut self, state: S, action: F)
    where
        F: FnMut() -> S + 'static,
    {
        self.handlers.insert(state, Handler::Next(Box::new(action)));
    }

    /// Replace the strategy run for rejected requests.
    pub fn on_invalid_transition(&mut self, policy: InvalidTransitionPolicy<S>) {
        self.on_invalid = policy;
    }

    /// Whether a request for `to` would be honored while in `from`.
    pub fn is_allowed(&self, from: &S, to: &S) -> bool {
        if from == to {
            return self.allow_same_transition;
        }
        self.transitions
            .contains(&Transition::new(from.clone(), to.clone()))
    }

    /// Move to `new_state` if the whitelist allows it.
    ///
    /// On acceptance the exit hook of the current state, the state change and
    /// the entry hook of the new state run in that order. On rejection the
    /// state is untouched and the invalid-transition policy runs once.
    pub fn request_transition(&mut self, new_state: S) -> TransitionOutcome<S> {
        let from = self.current.clone();

        if !self.is_allowed(&from, &new_state) {
            self.on_invalid.invoke(&self.name, &from, &new_state);
            return TransitionOutcome::Rejected {
                from,
                to: new_state,
            };
        }

        if let Some(exit) = self.on_exit.get_mut(&from) {
            exit();
        }
        self.current = new_state.clone();
        if let Some(entry) = self.on_entry.get_mut(&self.current) {
            entry();
        }

        trace!(
            machine = %self.name,
            from = from.name(),
            to = new_state.name(),
            "transition"
        );

        TransitionOutcome::Accepted {
            from,
            to: new_state,
        }
    }

    /// Run the handler of the current state once, if there is one.
    ///
    /// Returns the outcome when the handler requested a transition.
    pub fn tick(&mut self) -> Option<TransitionOutcome<S>> {
        let next = match self.handlers.get_mut(&self.current)? {
            Handler::Run(action) => {
                action();
                return None;
            }
            Handler::Next(action) => action(),
        };

        if next == self.current && !self.allow_same_transition {
            return None;
        }
        Some(self.request_transition(next))
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// The state the machine was constructed in.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn allows_same_transition(&self) -> bool {
        self.allow_same_transition
    }

    /// The whitelist, in declaration order.
    pub fn transitions(&self) -> &[Transition<S>] {
        &self.declared
    }

    pub fn has_entry_hook(&self, state: &S) -> bool {
        self.on_entry.contains_key(state)
    }

    pub fn has_exit_hook(&self, state: &S) -> bool {
        self.on_exit.contains_key(state)
    }

    pub fn has_handler(&self, state: &S) -> bool {
        self.handlers.contains_key(state)
    }
}

impl<S: State> fmt::Debug for StateMachine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("name", &self.name)
            .field("current", &self.current)
            .field("allow_same_transition", &self.allow_same_transition)
            .field("transitions", &self.declared)
            .field("on_invalid", &self.on_invalid)
            .finish_non_exhaustive()
    }
}
