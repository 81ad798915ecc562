//! Result of a transition request.

use crate::core::State;

/// What happened to a transition request.
///
/// None of these is an error: the engine never aborts a control loop, it
/// reports what it did and carries on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionOutcome<S: State> {
    /// Exit hook, state change and entry hook all ran
    Accepted { from: S, to: S },

    /// Pair not whitelisted; state unchanged, rejection policy invoked once
    Rejected { from: S, to: S },

    /// The machine was already mid-operation; nothing ran
    Busy { to: S },
}

impl<S: State> TransitionOutcome<S> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy { .. })
    }

    /// The state that was requested.
    pub fn requested(&self) -> &S {
        match self {
            Self::Accepted { to, .. } | Self::Rejected { to, .. } | Self::Busy { to } => to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::OpenClose;

    #[test]
    fn predicates_match_variant() {
        let accepted = TransitionOutcome::Accepted {
            from: OpenClose::Open,
            to: OpenClose::Closed,
        };
        let rejected = TransitionOutcome::Rejected {
            from: OpenClose::Open,
            to: OpenClose::Open,
        };
        let busy = TransitionOutcome::Busy {
            to: OpenClose::Closed,
        };

        assert!(accepted.is_accepted() && !accepted.is_rejected() && !accepted.is_busy());
        assert!(rejected.is_rejected());
        assert!(busy.is_busy());
    }

    #[test]
    fn requested_is_the_target() {
        let busy = TransitionOutcome::Busy {
            to: OpenClose::Closed,
        };
        assert_eq!(busy.requested(), &OpenClose::Closed);
    }
}
