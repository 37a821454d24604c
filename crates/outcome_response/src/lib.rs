//! Response adapter for [`outcome::Outcome`].
//!
//! Keeps web frameworks at arm's length: outcomes are mapped onto a
//! `(status, JSON body)` pair that any framework can wrap.
//! - settings: RON-backed status mapping (`ResponseSettings`)
//! - envelope: the `(is_success, data, message)` triple
//! - response: `to_response`, `respond_with` and the `ToResponse` extension

mod envelope;
mod errors;
mod response;
mod settings;
mod status;

pub use envelope::Envelope;
pub use errors::ResponseError;
pub use response::{respond_with, to_response, Response, ToResponse};
pub use settings::ResponseSettings;
pub use status::StatusCode;
