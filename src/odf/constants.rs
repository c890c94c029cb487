//! ODF attribute names, style names and template constants.
//!
//! The style names below form a contract with the document template: every
//! name the encoder writes must be declared by the template's
//! `office:automatic-styles`.

/// ODF specification version written by the bundled template
pub const OFFICE_VERSION: &str = "1.3";

/// MIME type of a flat OpenDocument spreadsheet
pub const FODS_MIME_TYPE: &str = "application/vnd.oasis.opendocument.spreadsheet";

// ============================================================================
// STYLE NAMES
// ============================================================================

/// Cell style for `date` cells
pub const STYLE_DATE: &str = "ce1";

/// Cell style for `time` cells
pub const STYLE_TIME: &str = "ce2";

/// Cell style for `currency` cells
pub const STYLE_CURRENCY: &str = "ce3";

/// Cell style for `percentage` cells
pub const STYLE_PERCENTAGE: &str = "ce4";

/// Row style carried by every generated row
pub const STYLE_ROW: &str = "ro1";

/// Every style name the encoder and assembler can emit
pub const REFERENCED_STYLES: &[&str] = &[
    STYLE_DATE,
    STYLE_TIME,
    STYLE_CURRENCY,
    STYLE_PERCENTAGE,
    STYLE_ROW,
];

// ============================================================================
// TEMPLATE
// ============================================================================

/// Token in the template replaced by the generated rows
pub const TABLE_ROWS_MARKER: &str = "TABLE_ROWS";

/// Currency code written on `currency` cells unless configured otherwise
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Name of the single sheet in the bundled template
pub const SHEET_NAME: &str = "Sheet1";
