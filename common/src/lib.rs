//! Common Types Library
//!
//! This crate provides the shared numerology types used across the PRACH receiver.

pub mod types;

// Re-export commonly used items
pub use types::*;
