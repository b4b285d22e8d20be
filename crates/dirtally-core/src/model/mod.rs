//! Data model for dirtally reports.
//!
//! Re-exports the serializable report records and the size-rounding policy.

pub mod report;
pub mod size;

pub use report::{FileStatsSummary, LargeFileEntry, Report};
pub use size::bytes_to_mb;
