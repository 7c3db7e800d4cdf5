//! Shared domain primitives for the Metr backend.

pub mod error;
pub mod types;
