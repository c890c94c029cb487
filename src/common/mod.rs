//! Types and utilities shared across the crate.

// Submodule declarations
pub mod diagnostics;
pub mod error;
pub mod xml;

// Re-exports for convenience
pub use diagnostics::{Diagnostic, DiagnosticLevel};
pub use error::{Error, Result};
