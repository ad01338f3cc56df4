//! gitfinder core - pure domain logic with no I/O
//!
//! This crate holds the repository model, the fuzzy filter and the selection
//! state machine, plus the discovery port that filesystem adapters implement.
//! Terminal handling and directory walking live in the `gitfinder` crate.

pub mod app;
pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
