//! Macros for ergonomic state machine construction.

/// Generate a payload-free state enum and its State trait implementation.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `Debug`, `Serialize` and `Deserialize`, and `State::all()` lists the
/// variants in declaration order. The calling crate needs `serde` as a
/// dependency.
///
/// # Example
///
/// ```
/// use statekeeper::state_enum;
/// use statekeeper::core::State;
///
/// state_enum! {
///     pub enum ElevatorState {
///         Bottom,
///         Middle,
///         Top,
///     }
/// }
///
/// assert_eq!(ElevatorState::Top.name(), "Top");
/// assert_eq!(ElevatorState::all().len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn all() -> ::std::vec::Vec<Self> {
                ::std::vec![$(Self::$variant),*]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Stowed,
            Intake,
            /// Documented variants keep their attributes
            Shoot,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Stowed.name(), "Stowed");
        assert_eq!(TestState::Shoot.name(), "Shoot");
        assert_eq!(
            TestState::all(),
            vec![TestState::Stowed, TestState::Intake, TestState::Shoot]
        );
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        let state = PublicState::A;
        let copy = state;
        assert_eq!(state, copy);
    }
}
