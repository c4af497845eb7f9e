//! Error types for loading grids and word lists, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E004) for documentation lookup:
//!
//! - E001: `Io` (File could not be read or written)
//! - E002: `EmptyStructure` (Grid description has no rows)
//! - E003: `EmptyWordList` (Word list has no words)
//! - E004: `DimensionMismatch` (Cell matrix does not match the grid dimensions)
//!
//! Solving itself never produces an error: an unsatisfiable puzzle is an ordinary
//! outcome (see [`crate::solver::SolveOutcome`]).
//!
//! # Examples
//!
//! ```
//! use crossfill::errors::LoadError;
//! use crossfill::word_list::WordList;
//!
//! match WordList::parse_from_str("\n\n") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!         assert!(matches!(e, LoadError::EmptyWordList));
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// Errors raised while turning input files into a `Structure` or a `WordList`.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Grid description is empty")]
    EmptyStructure,

    #[error("Word list is empty")]
    EmptyWordList,

    #[error("Grid of {width}x{height} needs {expected} cells, got {cells}", expected = cell_count(.width, .height))]
    DimensionMismatch {
        width: usize,
        height: usize,
        cells: usize,
    },
}

impl LoadError {
    /// Wrap an I/O error with the path that caused it.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LoadError::Io { path: path.into(), source }
    }

    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "E001",
            LoadError::EmptyStructure => "E002",
            LoadError::EmptyWordList => "E003",
            LoadError::DimensionMismatch { .. } => "E004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "File could not be read or written",
            LoadError::EmptyStructure => "Grid description has no rows",
            LoadError::EmptyWordList => "Word list has no words",
            LoadError::DimensionMismatch { .. } => "Cell matrix does not match the grid dimensions",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "The structure file, the word-list file, or the output path could not be accessed. The underlying operating-system error is included in the message.",
            LoadError::EmptyStructure => "The grid description contained no lines at all, so there is no grid to fill. A grid made only of blocked cells is valid; an empty file is not.",
            LoadError::EmptyWordList => "After trimming whitespace and skipping blank lines, the word list contained no candidate words.",
            LoadError::DimensionMismatch { .. } => "A grid was built programmatically from a flat cell matrix whose length is not width times height.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LoadError::Io { .. } => Some("Check that the path exists and that you have permission to access it"),
            LoadError::EmptyStructure => Some("Use one line per row, '_' for fillable cells and '#' for blocked cells (e.g. '#___#')"),
            LoadError::EmptyWordList => Some("Put one candidate word per line (e.g. 'CAT' then 'DOG' on the next line)"),
            LoadError::DimensionMismatch { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// `width * height` for display, without overflowing.
fn cell_count(width: &usize, height: &usize) -> String {
    width
        .checked_mul(*height)
        .map_or_else(|| "more than usize::MAX".to_string(), |n| n.to_string())
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
