//! Error types for the analyzer.
//!
//! Exactly two kinds surface to callers: an invalid root at construction
//! time, and a failed report write. Every other filesystem error during
//! traversal is absorbed by the scanner (skip the entry, continue the walk).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The two user-facing failures of the analysis pipeline.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The root path handed to [`crate::DirectoryAnalyzer::new`] is missing
    /// or is not a directory. Raised at construction only — a root that
    /// vanishes later simply enumerates zero files.
    #[error("{message}")]
    InvalidRoot { message: String },

    /// The assembled report could not be written to its destination file.
    /// This is the only operation allowed to propagate a terminal I/O
    /// failure.
    #[error("failed to write report to {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
