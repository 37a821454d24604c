//! Outcome types for modelling success and failure without panicking.
//!
//! The crate is organised around a single type:
//! - [`Outcome<T>`]: either `Success(T)` or `Failure(Error)`; `Outcome` on its
//!   own is the value-less form (`Outcome<()>`).
//! - [`Error`]: a message for the end user plus an optional shared cause.
//! - [`StateError`]: returned when an accessor is used on the wrong variant.
//!
//! Domain failures travel as values and are inspected with
//! [`Outcome::is_error`] or folded with [`Outcome::resolve`]. Only misuse of
//! the API produces `Err(StateError)`.
//!
//! ```
//! use outcome::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     match raw.parse() {
//!         Ok(port) => Outcome::ok(port),
//!         Err(err) => Outcome::failure(format!("invalid port '{raw}'"), err),
//!     }
//! }
//!
//! let label = parse_port("7777").resolve(|p| format!("port {p}"), |e| e.to_string());
//! assert_eq!(label, "port 7777");
//! assert_eq!(parse_port("x").message(), Ok("invalid port 'x'"));
//! ```

mod chain;
mod combine;
mod error;
mod outcome;
mod state;
mod strict;

pub use error::{Cause, Error};
pub use outcome::Outcome;
pub use state::StateError;

/// Convenience prelude for downstream crates.
pub mod prelude {
    pub use crate::Error;
    pub use crate::Outcome;
    pub use crate::StateError;
}
