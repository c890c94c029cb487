//! Cell and row data structures for FODS output.

use crate::odf::datatype::TimeValue;
use std::fmt;
use std::str::FromStr;

/// The semantic kind of a cell value.
///
/// Selects both the machine-readable attribute the value is written to and
/// the display style the spreadsheet application applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ValueType {
    #[default]
    String,
    Float,
    Date,
    Time,
    Currency,
    Percentage,
}

impl ValueType {
    /// All kinds, in declaration order
    pub const ALL: [ValueType; 6] = [
        ValueType::String,
        ValueType::Float,
        ValueType::Date,
        ValueType::Time,
        ValueType::Currency,
        ValueType::Percentage,
    ];

    /// The literal used by `office:value-type` and `calcext:value-type`
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Float => "float",
            ValueType::Date => "date",
            ValueType::Time => "time",
            ValueType::Currency => "currency",
            ValueType::Percentage => "percentage",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown value type '{}'", s))
    }
}

/// A value together with its kind.
///
/// Every payload except `Time` is opaque text copied verbatim into the
/// document; the caller formats numbers the way the reader expects them
/// (decimal point, no grouping). Percentages are fractions: `0.4223` shows
/// as 42.23%.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedValue {
    String(String),
    Float(String),
    /// ISO date text such as `2022-02-02`
    Date(String),
    Time(TimeValue),
    Currency(String),
    Percentage(String),
}

impl TypedValue {
    /// Pair raw text with a kind. `Time` text is parsed here.
    pub fn new(value: impl Into<String>, kind: ValueType) -> Self {
        let value = value.into();
        match kind {
            ValueType::String => TypedValue::String(value),
            ValueType::Float => TypedValue::Float(value),
            ValueType::Date => TypedValue::Date(value),
            ValueType::Time => TypedValue::Time(TimeValue::parse(&value)),
            ValueType::Currency => TypedValue::Currency(value),
            ValueType::Percentage => TypedValue::Percentage(value),
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            TypedValue::String(_) => ValueType::String,
            TypedValue::Float(_) => ValueType::Float,
            TypedValue::Date(_) => ValueType::Date,
            TypedValue::Time(_) => ValueType::Time,
            TypedValue::Currency(_) => ValueType::Currency,
            TypedValue::Percentage(_) => ValueType::Percentage,
        }
    }

    /// The raw text shown in the cell
    pub fn raw(&self) -> &str {
        match self {
            TypedValue::String(v)
            | TypedValue::Float(v)
            | TypedValue::Date(v)
            | TypedValue::Currency(v)
            | TypedValue::Percentage(v) => v,
            TypedValue::Time(t) => t.raw(),
        }
    }
}

/// One spreadsheet cell.
///
/// # Examples
///
/// ```
/// use fods::odf::fods::{Cell, ValueType};
///
/// let cells: Vec<Cell> = vec![
///     "ABBA".into(),
///     Cell::float("42.3324"),
///     Cell::typed("2022-02-02", ValueType::Date),
///     Cell::formula("=SUM([.A2:.A4])", ValueType::Float),
/// ];
/// assert_eq!(cells[0].value_type(), ValueType::String);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Bare text; encodes exactly like `TypedValue::String`
    PlainText(String),
    Typed(TypedValue),
    /// Expression passed through to the spreadsheet application
    Formula { formula: String, value_type: ValueType },
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::PlainText(value.into())
    }

    pub fn typed(value: impl Into<String>, kind: ValueType) -> Self {
        Cell::Typed(TypedValue::new(value, kind))
    }

    pub fn float(value: impl Into<String>) -> Self {
        Cell::Typed(TypedValue::Float(value.into()))
    }

    pub fn date(value: impl Into<String>) -> Self {
        Cell::Typed(TypedValue::Date(value.into()))
    }

    pub fn time(value: impl Into<String>) -> Self {
        Cell::Typed(TypedValue::Time(TimeValue::parse(&value.into())))
    }

    pub fn currency(value: impl Into<String>) -> Self {
        Cell::Typed(TypedValue::Currency(value.into()))
    }

    pub fn percentage(value: impl Into<String>) -> Self {
        Cell::Typed(TypedValue::Percentage(value.into()))
    }

    pub fn formula(formula: impl Into<String>, value_type: ValueType) -> Self {
        Cell::Formula {
            formula: formula.into(),
            value_type,
        }
    }

    /// Declared kind; bare text is a `string`.
    pub fn value_type(&self) -> ValueType {
        match self {
            Cell::PlainText(_) => ValueType::String,
            Cell::Typed(value) => value.value_type(),
            Cell::Formula { value_type, .. } => *value_type,
        }
    }

    /// The text shown inside `<text:p>`: the raw value, or the formula itself.
    pub fn display_text(&self) -> &str {
        match self {
            Cell::PlainText(text) => text,
            Cell::Typed(value) => value.raw(),
            Cell::Formula { formula, .. } => formula,
        }
    }

    pub fn is_formula(&self) -> bool {
        matches!(self, Cell::Formula { .. })
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::PlainText(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::PlainText(value)
    }
}

impl From<TypedValue> for Cell {
    fn from(value: TypedValue) -> Self {
        Cell::Typed(value)
    }
}

/// An ordered row of cells; position in `cells` is the column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
