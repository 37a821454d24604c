use outcome::Outcome;
use serde::Serialize;

/// The `(is_success, data, message)` triple a response layer consumes.
///
/// `data` is only present on success, `message` (and `cause`) only on
/// failure.
#[derive(Debug, Serialize)]
pub struct Envelope<'a, T> {
    pub is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl<'a, T> Envelope<'a, T> {
    pub fn new(outcome: &'a Outcome<T>, include_cause: bool) -> Self {
        match outcome {
            Outcome::Success(data) => Self {
                is_success: true,
                data: Some(data),
                message: None,
                cause: None,
            },
            Outcome::Failure(err) => Self {
                is_success: false,
                data: None,
                message: Some(err.message()),
                cause: include_cause
                    .then(|| err.cause().map(|cause| cause.to_string()))
                    .flatten(),
            },
        }
    }
}
