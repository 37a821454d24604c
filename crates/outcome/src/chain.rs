//! Resolution and payload-type transformations.

use crate::{Error, Outcome, StateError};

impl<T> Outcome<T> {
    /// Folds the outcome into one value by running exactly one handler.
    pub fn resolve<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(Error) -> R,
    ) -> R {
        match self {
            Self::Success(data) => on_success(data),
            Self::Failure(err) => on_failure(err),
        }
    }

    /// Like [`Outcome::resolve`], but both handlers receive the outcome
    /// itself. This is the shape response adapters plug into.
    pub fn resolve_with<R>(
        &self,
        on_success: impl FnOnce(&Self) -> R,
        on_failure: impl FnOnce(&Self) -> R,
    ) -> R {
        if self.is_success() {
            on_success(self)
        } else {
            on_failure(self)
        }
    }

    /// Re-types a failure, carrying the error forward.
    ///
    /// A success has no `U` to offer, so calling this on one is misuse.
    pub fn to_type<U>(self) -> Result<Outcome<U>, StateError> {
        match self {
            Self::Failure(err) => Ok(Outcome::Failure(err)),
            Self::Success(_) => Err(StateError::not_failure("to_type")),
        }
    }

    /// Drops the payload type; a success stays a (value-less) success.
    pub fn remove_type(self) -> Outcome {
        match self {
            Self::Success(_) => Outcome::Success(()),
            Self::Failure(err) => Outcome::Failure(err),
        }
    }

    pub fn unwrap(self) -> Result<T, StateError> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(err) => Err(StateError::not_success("unwrap", err.message())),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(data) => Outcome::Success(f(data)),
            Self::Failure(err) => Outcome::Failure(err),
        }
    }

    pub fn map_error(self, f: impl FnOnce(Error) -> Error) -> Self {
        match self {
            Self::Success(data) => Self::Success(data),
            Self::Failure(err) => Self::Failure(f(err)),
        }
    }
}

impl Outcome {
    /// Lifts a value-less failure into a typed one.
    ///
    /// Misuse on a success; use [`Outcome::with_data`] when a payload exists.
    pub fn add_type<T>(self) -> Result<Outcome<T>, StateError> {
        match self {
            Self::Failure(err) => Ok(Outcome::Failure(err)),
            Self::Success(()) => Err(StateError::not_failure("add_type")),
        }
    }

    pub fn with_data<T>(self, data: T) -> Outcome<T> {
        match self {
            Self::Success(()) => Outcome::Success(data),
            Self::Failure(err) => Outcome::Failure(err),
        }
    }
}
