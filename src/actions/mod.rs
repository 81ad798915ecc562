//! Deferred units of work handed to an external scheduler.
//!
//! The crate owns no scheduler. Whatever runs the control loop executes
//! [`Action`]s: once per cycle for a [`TickAction`], and whenever it decides
//! to for a [`ScheduledTransition`].

mod transition;

pub use transition::{ScheduledTransition, TickAction};

/// An opaque, named unit of work.
pub trait Action {
    fn name(&self) -> &str;

    fn execute(&mut self);
}

impl<A: Action + ?Sized> Action for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn execute(&mut self) {
        (**self).execute()
    }
}

/// An [`Action`] made from a closure.
///
/// # Example
///
/// ```rust
/// use statekeeper::actions::{Action, FnAction};
///
/// let mut beep = FnAction::new("Beep", || {});
/// beep.execute();
/// assert_eq!(beep.name(), "Beep");
/// ```
pub struct FnAction<F> {
    name: String,
    f: F,
}

impl<F: FnMut()> FnAction<F> {
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F: FnMut()> Action for FnAction<F> {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&mut self) {
        (self.f)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn boxed_actions_forward_to_inner() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let mut queue: Vec<Box<dyn Action>> = vec![Box::new(FnAction::new("Count", move || {
            counter.set(counter.get() + 1)
        }))];

        for action in queue.iter_mut() {
            action.execute();
            action.execute();
        }

        assert_eq!(count.get(), 2);
        assert_eq!(queue[0].name(), "Count");
    }
}
