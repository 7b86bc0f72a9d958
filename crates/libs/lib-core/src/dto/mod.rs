//! # Data Transfer Objects (DTOs)
//!
//! Request and response structures for the gateway's REST API.

pub mod auth;
pub mod user;

pub use auth::*;
pub use user::*;
