//! Error types for puzzle construction with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (P001-P003) for documentation lookup:
//!
//! - P001: `InvalidLetterCount` (Letter count not a positive multiple of the wall count)
//! - P002: `ZeroWallCount` (Wall count configured as zero)
//! - P003: `ZeroMinWordLength` (Minimum word length configured as zero)
//!
//! # Examples
//!
//! ```
//! use ringbox::puzzle::Puzzle;
//!
//! match Puzzle::new("abcde") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;

/// Custom error type for puzzle construction.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("letter count {len} is not a positive multiple of the wall count {walls}")]
    InvalidLetterCount { len: usize, walls: usize },

    #[error("wall count must be positive")]
    ZeroWallCount,

    #[error("minimum word length must be positive")]
    ZeroMinWordLength,
}

impl From<PuzzleError> for io::Error {
    fn from(pe: PuzzleError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::InvalidLetterCount { .. } => "P001",
            PuzzleError::ZeroWallCount => "P002",
            PuzzleError::ZeroMinWordLength => "P003",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::InvalidLetterCount { .. } => {
                Some("Type each wall's letters consecutively, e.g. 12 letters for 4 walls of 3")
            }
            PuzzleError::ZeroWallCount => Some("Configure at least one wall (the default is 4)"),
            PuzzleError::ZeroMinWordLength => {
                Some("Configure a minimum word length of at least 1 (the default is 3)")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
