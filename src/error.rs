use thiserror::Error;

/// Error type for the exact-shape `try_` conversions.
///
/// The truncating conversions never fail; only the strict duals
/// ([`try_vec_to_array`](crate::try_vec_to_array),
/// [`try_vec_to_rows`](crate::try_vec_to_rows)) report errors.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RecollectError {
    /// Source length does not match the destination's fixed capacity
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Fixed capacity of the requested array type
        expected: usize,
        /// Number of elements in the source
        actual: usize,
    },
}
