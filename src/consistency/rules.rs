//! Whitelist consistency rules using Validation.

use crate::consistency::violations::ConsistencyViolation;
use crate::core::State;
use crate::machine::StateMachine;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a consistency check: success, or every violation found.
pub type ConsistencyReport<S> = Validation<(), NonEmptyVec<ConsistencyViolation<S>>>;

/// Check a machine's whitelist and registrations, accumulating ALL
/// violations.
///
/// Returns `Validation::Success(())` if the configuration is clean.
/// Returns `Validation::Failure` with every violation otherwise, ordered by
/// `S::all()` within each rule.
pub fn check<S: State>(machine: &StateMachine<S>) -> ConsistencyReport<S> {
    let mut checks: Vec<ConsistencyReport<S>> = Vec::new();
    let all = S::all();
    let reachable = reachable_states(machine);

    if !machine.allows_same_transition() {
        checks.extend(
            machine
                .transitions()
                .iter()
                .filter(|t| t.is_self_transition())
                .map(|t| {
                    Validation::fail(ConsistencyViolation::IneffectiveSelfTransition {
                        state: t.from.clone(),
                    })
                }),
        );
    }

    for state in all.iter().filter(|s| !reachable.contains(*s)) {
        checks.push(Validation::fail(ConsistencyViolation::UnreachableState {
            state: state.clone(),
        }));
    }

    for state in all.iter().filter(|s| !reachable.contains(*s)) {
        if machine.has_entry_hook(state)
            || machine.has_exit_hook(state)
            || machine.has_handler(state)
        {
            checks.push(Validation::fail(ConsistencyViolation::UnreachableHook {
                state: state.clone(),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// States reachable from the initial state through the whitelist,
/// the initial state included.
pub fn reachable_states<S: State>(machine: &StateMachine<S>) -> HashSet<S> {
    let mut reached = HashSet::new();
    let mut frontier = vec![machine.initial_state().clone()];

    while let Some(state) = frontier.pop() {
        if !reached.insert(state.clone()) {
            continue;
        }
        frontier.extend(
            machine
                .transitions()
                .iter()
                .filter(|t| t.from == state && !reached.contains(&t.to))
                .map(|t| t.to.clone()),
        );
    }

    reached
}
