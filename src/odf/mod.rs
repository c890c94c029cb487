//! OpenDocument Format support.

/// ODF attribute, style and template constants
pub mod constants;
/// Cell positions and A1 naming
pub mod coordinates;
/// ODF data type conversions
pub mod datatype;
/// Flat ODS document generation
pub mod fods;

/// Re-export the main APIs
pub use fods::{Cell, Row, SpreadsheetBuilder, Template, ValueType};
