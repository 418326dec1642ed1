//! Clientfolio Core - Domain records and display metrics.
//!
//! This crate contains the business logic behind the client onboarding and
//! portfolio summary screens. It is UI-agnostic and storage-agnostic: callers
//! supply snapshots, the crate returns enriched copies and validated records.

pub mod clients;
pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod utils;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
