//! Sequencing of value-less outcomes.
//!
//! `a.and(b)` reads as "run step A; if it failed, report that; otherwise
//! report step B". Both operands are ordinary values, so `b` has already been
//! computed by the time `and` sees it. Callers that must not run step B after
//! a failed step A use [`Outcome::and_then`], which takes a closure.

use crate::Outcome;

impl Outcome {
    /// `self` if it is a failure, otherwise `other`.
    pub fn and(self, other: Outcome) -> Outcome {
        match self {
            Self::Failure(_) => self,
            Self::Success(()) => other,
        }
    }

    /// Lazy form of [`Outcome::and`]: `next` only runs after a success.
    pub fn and_then(self, next: impl FnOnce() -> Outcome) -> Outcome {
        match self {
            Self::Failure(_) => self,
            Self::Success(()) => next(),
        }
    }

    /// Combines every step with [`Outcome::and`], stopping at the first
    /// failure. An empty sequence is a success.
    pub fn all(steps: impl IntoIterator<Item = Outcome>) -> Outcome {
        for step in steps {
            if step.is_error() {
                return step;
            }
        }
        Outcome::success()
    }
}
