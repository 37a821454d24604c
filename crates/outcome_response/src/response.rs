//! Outcome → response mapping.
//!
//! Success maps to the configured 2xx status carrying `data`, failure to the
//! configured 4xx/5xx status carrying `message`. Callers that need framework
//! types of their own use [`respond_with`] and build them in the handlers.

use outcome::Outcome;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::{Envelope, ResponseError, ResponseSettings, StatusCode};

#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: StatusCode,
    pub body: Value,
}

impl Response {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }
}

pub fn to_response<T>(
    outcome: &Outcome<T>,
    settings: &ResponseSettings,
) -> Result<Response, ResponseError>
where
    T: Serialize,
{
    let status = if outcome.is_success() {
        settings.success_code()?
    } else {
        settings.failure_code()?
    };

    let body = if settings.envelope {
        serde_json::to_value(Envelope::new(outcome, settings.include_cause))?
    } else {
        match outcome {
            Outcome::Success(data) => serde_json::to_value(data)?,
            Outcome::Failure(err) => {
                let mut body = json!({ "message": err.message() });
                if settings.include_cause {
                    if let Some(cause) = err.cause() {
                        body["cause"] = Value::String(cause.to_string());
                    }
                }
                body
            }
        }
    };

    debug!(%status, success = outcome.is_success(), "mapped outcome to response");
    Ok(Response::new(status, body))
}

/// Resolves `outcome` into a caller-defined response type.
pub fn respond_with<T, R>(
    outcome: &Outcome<T>,
    on_success: impl FnOnce(&T) -> R,
    on_failure: impl FnOnce(&str) -> R,
) -> R {
    match outcome {
        Outcome::Success(data) => on_success(data),
        Outcome::Failure(err) => on_failure(err.message()),
    }
}

/// Extension for turning an outcome into a [`Response`].
pub trait ToResponse {
    fn to_response(&self, settings: &ResponseSettings) -> Result<Response, ResponseError>;

    fn to_default_response(&self) -> Result<Response, ResponseError> {
        self.to_response(&ResponseSettings::default())
    }
}

impl<T> ToResponse for Outcome<T>
where
    T: Serialize,
{
    fn to_response(&self, settings: &ResponseSettings) -> Result<Response, ResponseError> {
        to_response(self, settings)
    }
}
