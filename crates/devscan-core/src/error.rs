//! Error types for the devscan-core library.

use thiserror::Error;

/// Main error type for the devscan library.
#[derive(Error, Debug)]
pub enum DevscanError {
    /// Export rendering/writing error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to export file generation.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing to write: every record was unselected or unresolved.
    #[error("no exportable records")]
    NoRecords,
}

/// Result type for the devscan library.
pub type Result<T> = std::result::Result<T, DevscanError>;
