//! Guard predicates for controlling transitions.
//!
//! A guard is a pure boolean function over whatever value a transition
//! starts from. The quiz engine uses guards over the whole session, since
//! its preconditions depend on the lock flag as well as the phase.

use std::fmt;

/// Pure predicate that decides whether a transition may run.
///
/// # Example
///
/// ```rust
/// use quizkit::core::Guard;
///
/// let non_zero = Guard::new(|n: &u32| *n > 0);
///
/// assert!(non_zero.check(&3));
/// assert!(!non_zero.check(&0));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool>,
}

impl<T> Guard<T> {
    /// Create a guard from a deterministic predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check whether the guard allows a transition from `value`.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    /// Guard that passes only when both `self` and `other` pass.
    pub fn and(self, other: Guard<T>) -> Guard<T>
    where
        T: 'static,
    {
        Guard::new(move |value: &T| self.check(value) && other.check(value))
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
