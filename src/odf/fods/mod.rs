//! Flat OpenDocument Spreadsheet (.fods) output.
//!
//! Input rows go through the [`CellEncoder`] cell by cell, the
//! [`SpreadsheetBuilder`] folds the cells into rows and rows into a table
//! body, and a [`Template`] supplies the surrounding document.

mod builder;
mod cell;
mod encoder;
mod input;
mod template;

pub use builder::{Build, SpreadsheetBuilder, build_document, build_spreadsheet};
pub use cell::{Cell, Row, TypedValue, ValueType};
pub use encoder::{CellEncoder, EncoderOptions, style_for, style_for_type};
pub use input::{open_rows, parse_rows, read_rows};
pub use template::Template;
