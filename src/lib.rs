//! fods - build Flat OpenDocument Spreadsheet documents from typed rows
//!
//! This library turns rows of typed cells (strings, floats, dates, times,
//! currencies, percentages and formulas) into the table markup of a flat,
//! single-file OpenDocument spreadsheet (`.fods`), and substitutes that
//! markup into a document template that declares the matching cell styles.
//!
//! # Features
//!
//! - **Typed cells**: each value kind maps to the attribute and style a
//!   spreadsheet application expects
//! - **Formula pass-through**: formulas are written for the application to
//!   evaluate on load
//! - **Template validation**: the template's marker and style catalog are
//!   checked before use
//! - **JSON input**: rows can be read from the `[[cell, ...], ...]` JSON shape
//!
//! # Example - Building a document
//!
//! ```
//! use fods::{Cell, Row, SpreadsheetBuilder, Template};
//!
//! # fn main() -> fods::Result<()> {
//! let rows = vec![
//!     Row::from(vec![Cell::from("String"), Cell::from("Time")]),
//!     Row::from(vec![Cell::from("ABBA"), Cell::time("19:03:00")]),
//! ];
//!
//! let template = Template::bundled()?;
//! let document = SpreadsheetBuilder::new().build_document(&rows, &template);
//! assert!(document.contains(r#"office:time-value="PT19H03M00S""#));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - From JSON
//!
//! ```
//! use fods::odf::fods::{build_spreadsheet, parse_rows};
//!
//! # fn main() -> fods::Result<()> {
//! let rows = parse_rows(r#"[[{"value": "3", "valueType": "currency"}]]"#)?;
//! let fragment = build_spreadsheet(&rows);
//! assert!(fragment.contains(r#"office:currency="EUR""#));
//! # Ok(())
//! # }
//! ```

/// Shared error, diagnostic and XML utilities
pub mod common;

/// OpenDocument Format (ODF) output
pub mod odf;

// Re-export commonly used types for convenience
pub use common::{Diagnostic, DiagnosticLevel, Error, Result};
pub use odf::fods::{
    Build, Cell, CellEncoder, EncoderOptions, Row, SpreadsheetBuilder, Template, TypedValue,
    ValueType,
};
