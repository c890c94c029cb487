//! Cell encoder: one [`Cell`] to one `<table:table-cell>` fragment.
//!
//! | kind       | style | value attributes                         |
//! |------------|-------|------------------------------------------|
//! | string     | -     | `office:value`                           |
//! | float      | -     | `office:value`                           |
//! | date       | ce1   | `office:date-value`                      |
//! | time       | ce2   | `office:time-value` (ISO 8601 duration)  |
//! | currency   | ce3   | `office:value`, `office:currency`        |
//! | percentage | ce4   | `office:value`                           |
//! | formula    | -     | `table:formula`                          |
//!
//! Every cell also carries its kind twice, as `office:value-type` and
//! `calcext:value-type`, and shows its raw text in a `<text:p>` child.

use crate::common::diagnostics::Diagnostic;
use crate::common::xml::EscapePolicy;
use crate::odf::constants::{
    DEFAULT_CURRENCY, STYLE_CURRENCY, STYLE_DATE, STYLE_PERCENTAGE, STYLE_TIME,
};
use crate::odf::coordinates::CellCoord;
use crate::odf::fods::{Cell, TypedValue, ValueType};

/// Encoder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderOptions {
    /// ISO 4217 code written as `office:currency` on currency cells
    pub currency: String,
    /// Escaping applied to attribute values and display text
    pub escape: EscapePolicy,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            escape: EscapePolicy::default(),
        }
    }
}

impl EncoderOptions {
    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn escape(mut self, policy: EscapePolicy) -> Self {
        self.escape = policy;
        self
    }
}

/// Maps typed cells to table-cell markup.
///
/// Stateless apart from its options; share one across threads freely.
///
/// # Examples
///
/// ```
/// use fods::odf::fods::{Cell, CellEncoder};
///
/// let encoder = CellEncoder::default();
/// let xml = encoder.encode(&Cell::time("19:03:00"));
/// assert!(xml.starts_with(r#"<table:table-cell table:style-name="ce2" office:time-value="PT19H03M00S""#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CellEncoder {
    options: EncoderOptions,
}

impl CellEncoder {
    pub fn new(options: EncoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Encode one cell into a new string.
    pub fn encode(&self, cell: &Cell) -> String {
        let mut out = String::with_capacity(128 + cell.display_text().len() * 2);
        self.encode_into(&mut out, cell);
        out
    }

    /// Append the markup for one cell to `out`.
    pub fn encode_into(&self, out: &mut String, cell: &Cell) {
        self.encode_at(out, cell, None);
    }

    /// Encode a cell whose position is known, returning the diagnostic it
    /// raised, if any. The diagnostic has already been logged.
    pub(crate) fn encode_at(
        &self,
        out: &mut String,
        cell: &Cell,
        coord: Option<CellCoord>,
    ) -> Option<Diagnostic> {
        let esc = self.options.escape;
        let value_type = cell.value_type();
        let mut diagnostic = None;

        out.push_str("<table:table-cell");

        if let Some(style) = style_for(cell) {
            push_attr(out, "table:style-name", style);
        }

        match cell {
            Cell::PlainText(text) => push_attr(out, "office:value", &esc.apply(text)),
            Cell::Typed(value) => match value {
                TypedValue::String(v) | TypedValue::Float(v) | TypedValue::Percentage(v) => {
                    push_attr(out, "office:value", &esc.apply(v));
                },
                TypedValue::Date(v) => push_attr(out, "office:date-value", &esc.apply(v)),
                TypedValue::Time(t) => {
                    if !t.is_well_formed() {
                        let mut diag = Diagnostic::warning(format!(
                            "time value '{}' is not h:mm:ss; encoded as '{}'",
                            t.raw(),
                            t.duration()
                        ));
                        if let Some(coord) = coord {
                            diag = diag.at(coord);
                        }
                        diag.emit();
                        diagnostic = Some(diag);
                    }
                    push_attr(out, "office:time-value", &esc.apply(&t.duration()));
                },
                TypedValue::Currency(v) => {
                    push_attr(out, "office:value", &esc.apply(v));
                    push_attr(out, "office:currency", &esc.apply(&self.options.currency));
                },
            },
            Cell::Formula { formula, .. } => push_attr(out, "table:formula", &esc.apply(formula)),
        }

        push_attr(out, "office:value-type", value_type.as_str());
        push_attr(out, "calcext:value-type", value_type.as_str());
        out.push_str(">\n  <text:p>");
        out.push_str(&esc.apply(cell.display_text()));
        out.push_str("</text:p>\n</table:table-cell>\n");

        diagnostic
    }
}

/// Style applied to a cell. Formula cells are left unstyled.
pub fn style_for(cell: &Cell) -> Option<&'static str> {
    match cell {
        Cell::PlainText(_) | Cell::Formula { .. } => None,
        Cell::Typed(value) => style_for_type(value.value_type()),
    }
}

/// Style bound to a value kind in the template.
pub fn style_for_type(kind: ValueType) -> Option<&'static str> {
    match kind {
        ValueType::String | ValueType::Float => None,
        ValueType::Date => Some(STYLE_DATE),
        ValueType::Time => Some(STYLE_TIME),
        ValueType::Currency => Some(STYLE_CURRENCY),
        ValueType::Percentage => Some(STYLE_PERCENTAGE),
    }
}

#[inline]
fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
}
