//! # Innkeep Core
//!
//! The domain layer of the Innkeep hotel booking client.
//! Entities, derived values, the session store and per-view state live here;
//! everything that talks to the network or the disk sits behind a port.

pub mod domain;
pub mod error;
pub mod ports;
pub mod session;
pub mod validation;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::ApiError;
pub use session::{AuthFailure, SessionStore};
