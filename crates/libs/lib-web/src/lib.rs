//! # Web Library
//!
//! HTTP handlers, middleware, and server setup for the credential gateway.

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{start_server, AppState, ServerConfig};
