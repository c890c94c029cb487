//! JSON input rows.
//!
//! The accepted shape is an array of rows, each an array of cells, where a
//! cell is either a bare string or a record:
//!
//! ```json
//! [
//!   ["String", "Float"],
//!   ["ABBA", { "value": "42.3324", "valueType": "float" }],
//!   [{ "formula": "=SUM([.B2:.B2])", "valueType": "float" }]
//! ]
//! ```
//!
//! Rows that are not arrays fail the whole input with [`Error::ParseError`].
//! A cell that breaks the data model (unknown `valueType`, neither `value`
//! nor `formula`, wrong JSON type, text with a character XML 1.0 forbids)
//! fails it with [`Error::InvalidCell`] naming the cell. No partial result is returned.

use crate::common::xml::forbidden_xml_char;
use crate::common::{Error, Result};
use crate::odf::coordinates::CellCoord;
use crate::odf::fods::{Cell, Row, ValueType};
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CellRecord {
    #[serde(default)]
    value: Option<Scalar>,
    #[serde(default)]
    formula: Option<String>,
    #[serde(default)]
    value_type: Option<String>,
}

/// `value` is declared as text, but numbers are accepted and kept as their
/// JSON spelling.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
        }
    }
}

/// Parse rows from JSON text.
///
/// # Examples
///
/// ```
/// use fods::odf::fods::{parse_rows, ValueType};
///
/// # fn main() -> fods::Result<()> {
/// let rows = parse_rows(r#"[["a", {"value": "0.5", "valueType": "percentage"}]]"#)?;
/// assert_eq!(rows[0].cells[1].value_type(), ValueType::Percentage);
/// # Ok(())
/// # }
/// ```
pub fn parse_rows(json: &str) -> Result<Vec<Row>> {
    let raw: Vec<Vec<Value>> = serde_json::from_str(json)?;
    rows_from_values(raw)
}

/// Parse rows from a JSON reader.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>> {
    let raw: Vec<Vec<Value>> = serde_json::from_reader(reader)?;
    rows_from_values(raw)
}

/// Parse rows from a JSON file.
pub fn open_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Row>> {
    let file = std::fs::File::open(path)?;
    read_rows(std::io::BufReader::new(file))
}

fn rows_from_values(raw: Vec<Vec<Value>>) -> Result<Vec<Row>> {
    raw.into_iter()
        .enumerate()
        .map(|(r, cells)| {
            cells
                .into_iter()
                .enumerate()
                .map(|(c, value)| cell_from_value(value, CellCoord::new(r, c)))
                .collect::<Result<Row>>()
        })
        .collect()
}

fn cell_from_value(value: Value, coord: CellCoord) -> Result<Cell> {
    let invalid = |reason: String| Error::InvalidCell { coord, reason };

    let record = match value {
        Value::String(text) => return Ok(Cell::PlainText(xml_text(text, coord)?)),
        Value::Object(_) => CellRecord::deserialize(value)
            .map_err(|e| invalid(format!("malformed cell record: {}", e)))?,
        other => {
            return Err(invalid(format!(
                "expected a string or a cell record, found {}",
                json_kind(&other)
            )));
        },
    };

    let value_type = match record.value_type.as_deref() {
        Some(kind) => kind.parse::<ValueType>().map_err(invalid)?,
        None => ValueType::default(),
    };

    match (record.formula, record.value) {
        (Some(formula), value) => {
            if value.is_some() {
                log::debug!("{}: cell has both value and formula; using the formula", coord);
            }
            Ok(Cell::formula(xml_text(formula, coord)?, value_type))
        },
        (None, Some(value)) => Ok(Cell::typed(xml_text(value.into_text(), coord)?, value_type)),
        (None, None) => Err(invalid(
            "cell record has neither 'value' nor 'formula'".to_string(),
        )),
    }
}

fn xml_text(text: String, coord: CellCoord) -> Result<String> {
    match forbidden_xml_char(&text) {
        Some(c) => Err(Error::InvalidCell {
            coord,
            reason: format!("character U+{:04X} is not allowed in XML", u32::from(c)),
        }),
        None => Ok(text),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
