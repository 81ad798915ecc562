//! Construction-time options for a state machine.

use serde::{Deserialize, Serialize};

/// Name given to machines that are not named explicitly.
pub const DEFAULT_MACHINE_NAME: &str = "StateMachine";

/// Options fixed when a machine is constructed.
///
/// Missing fields take their defaults when deserialized, so a subsystem can
/// carry a partial options document in its own configuration.
///
/// # Example
///
/// ```rust
/// use statekeeper::config::MachineOptions;
///
/// let options = MachineOptions::named("Claw").allow_same_transition(true);
/// assert_eq!(options.name, "Claw");
/// assert!(options.allow_same_transition);
/// assert!(!options.strict);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineOptions {
    /// Human-readable name, used for scheduled action names and log fields
    pub name: String,
    /// Treat `(s, s)` as implicitly permitted for every state
    pub allow_same_transition: bool,
    /// Run whitelist consistency checks when building
    pub strict: bool,
}

impl MachineOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn allow_same_transition(mut self, allow: bool) -> Self {
        self.allow_same_transition = allow;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for MachineOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_MACHINE_NAME.to_string(),
            allow_same_transition: false,
            strict: false,
        }
    }
}
