//! Unified error types for the fods library.
//!
//! Every fallible operation in the crate (reading input rows, loading a
//! template) reports through the single [`Error`] type defined here.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
