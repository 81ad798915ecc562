//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::config::MachineOptions;
use crate::consistency;
use crate::core::State;
use crate::machine::{InvalidTransitionPolicy, SharedMachine, StateMachine};
use stillwater::validation::Validation;

/// Deferred configuration step, applied in declaration order.
type Registration<S> = Box<dyn FnOnce(&mut StateMachine<S>)>;

/// Builder for constructing state machines with a fluent API.
///
/// Registrations are applied in the order they were made, so registering a
/// second hook for the same state replaces the first, exactly as it does on
/// the machine itself.
///
/// # Example
///
/// ```rust
/// use statekeeper::builder::StateMachineBuilder;
/// use statekeeper::machine::InvalidTransitionPolicy;
/// use statekeeper::states::LinearDirection::{self, *};
///
/// let mut selector = StateMachineBuilder::<LinearDirection>::new()
///     .initial(Neutral)
///     .name("Selector")
///     .transitions([
///         (Neutral, Forward),
///         (Neutral, Reverse),
///         (Reverse, Forward),
///         (Forward, Reverse),
///     ])
///     .on_invalid_transition(InvalidTransitionPolicy::log())
///     .build()
///     .unwrap();
///
/// assert!(selector.request_transition(Forward).is_accepted());
/// assert!(selector.request_transition(Neutral).is_rejected());
/// assert_eq!(selector.current_state(), &Forward);
/// ```
pub struct StateMachineBuilder<S: State> {
    initial: Option<S>,
    options: MachineOptions,
    registrations: Vec<Registration<S>>,
    policy: Option<InvalidTransitionPolicy<S>>,
}

impl<S: State> StateMachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            options: MachineOptions::default(),
            registrations: Vec::new(),
            policy: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.options.name = name.into();
        self
    }

    pub fn allow_same_transition(mut self, allow: bool) -> Self {
        self.options.allow_same_transition = allow;
        self
    }

    /// Refuse to build a machine with dead or ineffective configuration.
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Replace all options at once.
    pub fn options(mut self, options: MachineOptions) -> Self {
        self.options = options;
        self
    }

    /// Whitelist a single transition.
    pub fn transition(mut self, from: S, to: S) -> Self {
        self.registrations
            .push(Box::new(move |m: &mut StateMachine<S>| m.transition(from, to)));
        self
    }

    /// Whitelist several transitions at once.
    pub fn transitions<I>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
    {
        pairs
            .into_iter()
            .fold(self, |builder, (from, to)| builder.transition(from, to))
    }

    pub fn on_entry<F>(mut self, state: S, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.registrations
            .push(Box::new(move |m: &mut StateMachine<S>| m.on_entry(state, hook)));
        self
    }

    pub fn on_exit<F>(mut self, state: S, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.registrations
            .push(Box::new(move |m: &mut StateMachine<S>| m.on_exit(state, hook)));
        self
    }

    pub fn handle<F>(mut self, state: S, action: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.registrations
            .push(Box::new(move |m: &mut StateMachine<S>| m.handle(state, action)));
        self
    }

    pub fn handle_next<F>(mut self, state: S, action: F) -> Self
    where
        F: FnMut() -> S + 'static,
    {
        self.registrations
            .push(Box::new(move |m: &mut StateMachine<S>| m.handle_next(state, action)));
        self
    }

    pub fn on_invalid_transition(mut self, policy: InvalidTransitionPolicy<S>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing, or if a strict
    /// build finds consistency violations.
    pub fn build(self) -> Result<StateMachine<S>, BuildError<S>> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let strict = self.options.strict;

        let mut machine = StateMachine::with_options(initial, self.options);
        for register in self.registrations {
            register(&mut machine);
        }
        if let Some(policy) = self.policy {
            machine.on_invalid_transition(policy);
        }

        if !strict {
            return Ok(machine);
        }
        match consistency::check(&machine) {
            Validation::Success(_) => Ok(machine),
            Validation::Failure(violations) => Err(BuildError::Inconsistent { violations }),
        }
    }

    /// Build the state machine behind a [`SharedMachine`] handle.
    pub fn build_shared(self) -> Result<SharedMachine<S>, BuildError<S>> {
        self.build().map(SharedMachine::new)
    }
}

impl<S: State> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
