//! Stock state spaces for common two- and three-position mechanisms.

use crate::state_enum;

state_enum! {
    /// Claws, latches and hatches.
    pub enum OpenClose {
        Closed,
        Open,
    }
}

state_enum! {
    /// Direction for things such as a roller, with a neutral stop.
    pub enum LinearDirection {
        Reverse,
        Neutral,
        Forward,
    }
}

impl LinearDirection {
    /// Adjust a value (usually a speed) for this direction.
    ///
    /// ```rust
    /// use statekeeper::states::LinearDirection;
    ///
    /// assert_eq!(LinearDirection::Forward.apply(0.5), 0.5);
    /// assert_eq!(LinearDirection::Reverse.apply(0.5), -0.5);
    /// assert_eq!(LinearDirection::Neutral.apply(0.5), 0.0);
    /// ```
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Reverse => -value,
            Self::Neutral => 0.0,
            Self::Forward => value,
        }
    }
}

state_enum! {
    /// Plain three-way direction with no speed mapping.
    pub enum Direction {
        Reverse,
        Neutral,
        Forward,
    }
}

state_enum! {
    /// Direction of rotation.
    pub enum SpinDirection {
        Clockwise,
        CounterClockwise,
    }
}
