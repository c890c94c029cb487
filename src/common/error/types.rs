//! Unified error type for fods operations.
use crate::odf::coordinates::CellCoord;
use thiserror::Error;

/// Main error type for fods operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be read as rows of cells
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A cell violates the data model; the whole input is rejected
    #[error("Invalid cell at row {}, column {} ({coord}): {reason}", .coord.row(), .coord.column())]
    InvalidCell { coord: CellCoord, reason: String },

    /// XML scanning error
    #[error("XML error: {0}")]
    XmlError(String),

    /// The template has no substitution marker
    #[error("Template marker '{0}' not found")]
    MissingMarker(String),

    /// The template has more than one substitution marker
    #[error("Template marker '{marker}' occurs {count} times, expected exactly once")]
    DuplicateMarker { marker: String, count: usize },

    /// The template does not declare a style the encoder references
    #[error("Template does not declare style '{0}'")]
    MissingStyle(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for fods operations.
pub type Result<T> = std::result::Result<T, Error>;
