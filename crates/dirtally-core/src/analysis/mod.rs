//! Analysis modules — the per-scan aggregation algorithms.
//!
//! Each function consumes the scanner's [`FileMeta`](crate::scanner::FileMeta)
//! stream and is pure over it, so the three scans share one definition of
//! "visible file".

pub mod classify;
pub mod large_files;
pub mod stats;

pub use classify::{classify_by_extension, extension_key};
pub use large_files::find_large_files;
pub use stats::compute_stats;
