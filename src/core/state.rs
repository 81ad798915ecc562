//! Core State trait for state machine states.
//!
//! A state is one value of a closed, payload-free set. The mapping from a
//! state to physical actuation lives in the hooks registered on the machine,
//! never in the state value itself.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: States are copied into transitions and outcomes
/// - `Eq` + `Hash`: States key the whitelist and the hook tables
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States can be reported and configured as data
///
/// Most implementations come from the [`state_enum!`](crate::state_enum) macro.
///
/// # Example
///
/// ```rust
/// use statekeeper::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum ArmState {
///     Stowed,
///     Deployed,
/// }
///
/// impl State for ArmState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Stowed => "Stowed",
///             Self::Deployed => "Deployed",
///         }
///     }
///
///     fn all() -> Vec<Self> {
///         vec![Self::Stowed, Self::Deployed]
///     }
/// }
///
/// assert_eq!(ArmState::all().len(), 2);
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Every member of the state set, in declaration order.
    fn all() -> Vec<Self>;
}
