//! # Data Model
//!
//! Entity types and the store layer backing them.

pub mod store;
