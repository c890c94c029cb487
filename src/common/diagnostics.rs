//! Non-fatal diagnostics raised while building a document.
//!
//! Diagnostics never abort a build. Each one is emitted through the
//! [`log`] facade when it is raised and is also handed back to callers of
//! [`SpreadsheetBuilder::build_with_diagnostics`](crate::odf::fods::SpreadsheetBuilder::build_with_diagnostics).

use crate::odf::coordinates::CellCoord;
use std::fmt;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - output was produced but may not be what the caller meant
    Warning,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Cell the diagnostic refers to, when known
    pub coord: Option<CellCoord>,
}

impl Diagnostic {
    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
            coord: None,
        }
    }

    /// Attach a cell position
    pub fn at(mut self, coord: CellCoord) -> Self {
        self.coord = Some(coord);
        self
    }

    /// Forward the diagnostic to the `log` facade at the matching level.
    pub(crate) fn emit(&self) {
        match self.level {
            DiagnosticLevel::Info => log::info!("{}", self),
            DiagnosticLevel::Warning => log::warn!("{}", self),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coord {
            Some(coord) => write!(f, "{}: {}: {}", self.level, coord, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_and_without_position() {
        let diag = Diagnostic::warning("time value '19:03' is not hh:mm:ss");
        assert_eq!(diag.to_string(), "warning: time value '19:03' is not hh:mm:ss");

        let diag = diag.at(CellCoord::new(0, 3));
        assert_eq!(
            diag.to_string(),
            "warning: D1: time value '19:03' is not hh:mm:ss"
        );
    }

    #[test]
    fn test_levels_order() {
        assert!(DiagnosticLevel::Info < DiagnosticLevel::Warning);
    }
}
