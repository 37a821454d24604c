use thiserror::Error;
use tracing::warn;

/// An [`Outcome`](crate::Outcome) accessor was called on the wrong variant.
///
/// This is a programming error, kept apart from the domain failure an
/// outcome may carry: `Err(StateError)` means "the API was used
/// incorrectly", never "the operation failed".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("{operation}: expected a success, found failure \"{message}\"")]
    NotSuccess {
        operation: &'static str,
        message: String,
    },

    #[error("{operation}: expected a failure, found success")]
    NotFailure { operation: &'static str },
}

impl StateError {
    pub(crate) fn not_success(operation: &'static str, message: &str) -> Self {
        warn!(operation, failure = message, "success-only accessor used on a failure");
        Self::NotSuccess {
            operation,
            message: message.to_owned(),
        }
    }

    pub(crate) fn not_failure(operation: &'static str) -> Self {
        warn!(operation, "failure-only accessor used on a success");
        Self::NotFailure { operation }
    }

    /// Name of the accessor that was misused.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::NotSuccess { operation, .. } | Self::NotFailure { operation } => operation,
        }
    }
}
