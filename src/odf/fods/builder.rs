//! Row and table assembly.
//!
//! This module folds encoded cells into `<table:table-row>` elements and rows
//! into the table body, optionally substituting the body into a [`Template`].

use crate::common::diagnostics::Diagnostic;
use crate::odf::constants::STYLE_ROW;
use crate::odf::coordinates::CellCoord;
use crate::odf::fods::{CellEncoder, EncoderOptions, Row, Template};

/// Output of [`SpreadsheetBuilder::build_with_diagnostics`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Build {
    /// Table-row markup
    pub markup: String,
    /// Non-fatal diagnostics, in cell order
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds FODS table markup from rows of cells.
///
/// Building is pure: no I/O, no shared state, and the same rows always give
/// byte-identical output.
///
/// # Examples
///
/// ```
/// use fods::odf::fods::{Cell, Row, SpreadsheetBuilder, Template};
///
/// # fn main() -> fods::Result<()> {
/// let rows = vec![
///     Row::from(vec![Cell::from("Name"), Cell::from("Share")]),
///     Row::from(vec![Cell::from("ABBA"), Cell::percentage("0.4223")]),
/// ];
/// let builder = SpreadsheetBuilder::new();
/// let document = builder.build_document(&rows, &Template::bundled()?);
/// assert!(document.contains(r#"table:style-name="ce4""#));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpreadsheetBuilder {
    encoder: CellEncoder,
}

impl SpreadsheetBuilder {
    /// Create a builder with default encoder options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the given encoder options
    pub fn with_options(options: EncoderOptions) -> Self {
        Self {
            encoder: CellEncoder::new(options),
        }
    }

    pub fn encoder(&self) -> &CellEncoder {
        &self.encoder
    }

    /// Build the table-row fragment for `rows`.
    ///
    /// An empty slice yields an empty string; an empty row yields a row
    /// element with no cells.
    pub fn build_rows(&self, rows: &[Row]) -> String {
        self.build_with_diagnostics(rows).markup
    }

    /// Build the fragment and return the diagnostics raised along the way.
    pub fn build_with_diagnostics(&self, rows: &[Row]) -> Build {
        let cell_count: usize = rows.iter().map(Row::len).sum();
        let text_len: usize = rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .map(|c| c.display_text().len())
            .sum();

        let mut build = Build {
            markup: String::with_capacity(rows.len() * 64 + cell_count * 160 + text_len * 2),
            diagnostics: Vec::new(),
        };

        for (r, row) in rows.iter().enumerate() {
            build.markup.push_str("<table:table-row table:style-name=\"");
            build.markup.push_str(STYLE_ROW);
            build.markup.push_str("\">");
            for (c, cell) in row.cells.iter().enumerate() {
                if let Some(diag) =
                    self.encoder
                        .encode_at(&mut build.markup, cell, Some(CellCoord::new(r, c)))
                {
                    build.diagnostics.push(diag);
                }
            }
            build.markup.push_str("</table:table-row>\n");
        }

        log::debug!(
            "built {} rows, {} cells, {} bytes, {} diagnostics",
            rows.len(),
            cell_count,
            build.markup.len(),
            build.diagnostics.len()
        );

        build
    }

    /// Build a complete document by substituting the rows into `template`.
    pub fn build_document(&self, rows: &[Row], template: &Template) -> String {
        template.render(&self.build_rows(rows))
    }
}

/// Build the table-row fragment for `rows` with default options.
pub fn build_spreadsheet(rows: &[Row]) -> String {
    SpreadsheetBuilder::new().build_rows(rows)
}

/// Build a complete document from `rows` and `template` with default options.
pub fn build_document(rows: &[Row], template: &Template) -> String {
    SpreadsheetBuilder::new().build_document(rows, template)
}
