//! Domain failure value carried by [`Outcome::Failure`](crate::Outcome::Failure).

use std::fmt;
use std::sync::Arc;

/// Shared, thread-safe underlying cause of a failure.
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Human-readable failure message plus an optional underlying cause.
///
/// Errors are built at the failure site and never mutated afterwards. The
/// cause lives behind an [`Arc`], so cloning an `Error` is cheap and the
/// clone still points at the very same cause.
#[derive(thiserror::Error, Clone)]
#[error("{message}")]
pub struct Error {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl Error {
    /// Message-only error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Error with a message for the end user and the error that caused it.
    pub fn with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    /// Like [`Error::with_cause`] for a cause that is already shared.
    pub fn with_shared_cause(message: impl Into<String>, cause: Cause) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// Captures `err` as the cause and uses its `Display` output as message.
    pub fn from_error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let message = err.to_string();
        Self::with_cause(message, err)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    pub fn has_cause(&self) -> bool {
        self.cause.is_some()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("message", &self.message)
            .field("cause", &self.cause.as_ref().map(|c| c.to_string()))
            .finish()
    }
}

/// Same message and the same shared cause (or both without one).
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        if self.message != other.message {
            return false;
        }
        match (&self.cause, &other.cause) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Error {}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::from_error(err)
    }
}
