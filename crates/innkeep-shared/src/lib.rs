//! # Innkeep Shared
//!
//! Wire shapes exchanged with the hotel backend.
//! Domain types live in `innkeep-core`; these mirror request and response bodies.

pub mod dto;
pub mod response;

pub use response::{CreatedResponse, ErrorBody};
