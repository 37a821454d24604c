//! The two-variant outcome type: construction, inspection and conversions.
//!
//! Resolution helpers live in `chain`, the AND-combinator in `combine` and
//! the strict unwrap/handle helpers in `strict`.

use crate::{Error, StateError};

/// Outcome of an operation: either a success carrying `T` or a failure
/// carrying an [`Error`].
///
/// `Outcome<()>` (spelled plain `Outcome`) is the value-less form. An
/// outcome is a success exactly when it is the `Success` variant; what the
/// payload looks like (`None`, an empty string, `()`) is never consulted.
#[must_use = "an outcome may be a failure, which should be inspected or resolved"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T = ()> {
    Success(T),
    Failure(Error),
}

impl<T> Outcome<T> {
    pub const fn ok(data: T) -> Self {
        Self::Success(data)
    }

    pub fn fail(error: impl Into<Error>) -> Self {
        Self::Failure(error.into())
    }

    /// Builds the [`Error`] inline from a message and its cause.
    pub fn failure<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Failure(Error::with_cause(message, cause))
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The failure's error; misuse on a success.
    pub fn error(&self) -> Result<&Error, StateError> {
        match self {
            Self::Failure(err) => Ok(err),
            Self::Success(_) => Err(StateError::not_failure("error")),
        }
    }

    /// Shorthand for `error()?.message()`.
    pub fn message(&self) -> Result<&str, StateError> {
        match self {
            Self::Failure(err) => Ok(err.message()),
            Self::Success(_) => Err(StateError::not_failure("message")),
        }
    }

    /// The success payload; misuse on a failure.
    pub fn data(&self) -> Result<&T, StateError> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(err) => Err(StateError::not_success("data", err.message())),
        }
    }

    pub fn as_data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    pub fn as_error(&self) -> Option<&Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(data) => Outcome::Success(data),
            Self::Failure(err) => Outcome::Failure(err.clone()),
        }
    }

    /// Converts into a std result so the outcome can travel through `?`.
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(err) => Err(err),
        }
    }
}

impl Outcome {
    /// Value-less success, same as `Outcome::ok(())`.
    pub const fn success() -> Self {
        Self::Success(())
    }
}

/// An `Error` in return position is a failure, even for `Outcome<Error>`.
/// Successes are always spelled `Outcome::ok`; there is no value-to-success
/// conversion.
impl<T> From<Error> for Outcome<T> {
    fn from(error: Error) -> Self {
        Self::Failure(error)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Error>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Failure(err.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
