//! # Authentication Library
//!
//! Password hashing and bearer-token management. The rest of the workspace
//! treats these as opaque primitives: a one-way hash with verify, and a
//! signed expiring token.

pub mod pwd;
pub mod token;

// Re-export commonly used types
pub use pwd::{hash_password, verify_password, PwdError};
pub use token::{decode_token, issue_token, Claims, TokenError};
