//! dirtally core — directory scanning, aggregation, and the JSON report model.
//!
//! This crate contains all business logic with zero CLI dependencies.
//! It is designed to be reusable across different frontends (CLI, TUI).
//!
//! # Modules
//!
//! - [`analyzer`] — The [`DirectoryAnalyzer`] facade: root validation and the
//!   public analysis operations.
//! - [`scanner`] — Sequential filesystem traversal yielding readable files.
//! - [`analysis`] — Per-scan algorithms (classification, stats, large files).
//! - [`model`] — Serializable report records and size math.
//! - [`error`] — The two user-facing error kinds.

pub mod analysis;
pub mod analyzer;
pub mod error;
pub mod model;
pub mod scanner;

pub use analyzer::{
    DirectoryAnalyzer, DEFAULT_MIN_SIZE_MB, DEFAULT_REPORT_FILE_NAME, LARGE_FILES_REPORT_CAP,
};
pub use error::AnalyzerError;
pub use model::{FileStatsSummary, LargeFileEntry, Report};
