//! Size math — bytes-to-megabytes conversion and the rounding policy.
//!
//! All internal sizes are `u64` bytes. Floating point appears only at the
//! reporting boundary, and every `size_mb` value in the system goes through
//! [`bytes_to_mb`] so the rounding policy is uniform.

/// Bytes per megabyte (binary, 1024 × 1024).
pub const BYTES_PER_MB: f64 = 1_048_576.0;

/// Convert a byte count to megabytes, rounded to two decimal places.
///
/// Rounding is half-away-from-zero (`f64::round` semantics): exactly
/// 0.125 MB rounds to 0.13.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0
}
