//! Cell positions and A1 naming.
//!
//! Input rows are addressed by zero-based `(row, column)` indexes. Errors and
//! diagnostics also print the A1 name a spreadsheet user would look for.

use std::fmt;

/// Convert numeric column to alphabetic notation (0-indexed)
///
/// # Examples
///
/// ```
/// use fods::odf::coordinates::digit_to_alpha;
///
/// assert_eq!(digit_to_alpha(0), "A");
/// assert_eq!(digit_to_alpha(25), "Z");
/// assert_eq!(digit_to_alpha(26), "AA");
/// assert_eq!(digit_to_alpha(27), "AB");
/// ```
pub fn digit_to_alpha(mut digit: usize) -> String {
    let mut column = String::new();
    digit += 1;

    while digit > 0 {
        let c = ((digit - 1) % 26) as u8;
        column.insert(0, (b'A' + c) as char);
        digit = (digit - 1) / 26;
    }

    column
}

/// Zero-based position of a cell in the input rows
///
/// # Examples
///
/// ```
/// use fods::odf::coordinates::CellCoord;
///
/// let coord = CellCoord::new(2, 1);
/// assert_eq!(coord.to_string(), "B3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    row: usize,
    column: usize,
}

impl CellCoord {
    /// Create a coordinate from zero-based row and column indexes
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Zero-based row index
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column index
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", digit_to_alpha(self.column), self.row + 1)
    }
}
