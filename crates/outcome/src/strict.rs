//! Strict unwrap/handle helpers.
//!
//! Each helper only makes sense in one variant and returns
//! [`StateError`] in the other, so a wrong assumption about the outcome
//! surfaces at the call site instead of as a silent default.

use crate::{Error, Outcome, StateError};

impl<T> Outcome<T> {
    pub fn unwrap_on_success(self) -> Result<T, StateError> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(err) => Err(StateError::not_success(
                "unwrap_on_success",
                err.message(),
            )),
        }
    }

    /// The failure message.
    pub fn unwrap_on_failure(&self) -> Result<&str, StateError> {
        match self {
            Self::Failure(err) => Ok(err.message()),
            Self::Success(_) => Err(StateError::not_failure("unwrap_on_failure")),
        }
    }

    /// Runs `action` on the payload of a success.
    pub fn handle_success(&self, action: impl FnOnce(&T)) -> Result<(), StateError> {
        match self {
            Self::Success(data) => {
                action(data);
                Ok(())
            }
            Self::Failure(err) => Err(StateError::not_success("handle_success", err.message())),
        }
    }

    /// Runs `action` on the error of a failure.
    pub fn handle_failure(&self, action: impl FnOnce(&Error)) -> Result<(), StateError> {
        match self {
            Self::Failure(err) => {
                action(err);
                Ok(())
            }
            Self::Success(_) => Err(StateError::not_failure("handle_failure")),
        }
    }
}
