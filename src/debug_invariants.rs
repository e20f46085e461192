//! Compression checks for sparse storage.
//!
//! A compressed structure never stores the fill value at a leaf and never
//! keeps an axis node with no entries. Writes restore both properties on the
//! spot; the checks here confirm it after every public mutation in debug
//! builds and whenever the `check-invariants` feature is enabled. Release
//! builds without the feature compile them away.

use crate::sparse_error::SparseError;

/// Verifies that a sparse structure is fully compressed.
pub trait DebugInvariants {
    /// Panics on the first stored fill value or empty node, if checks are on.
    fn debug_assert_invariants(&self);
    /// Walks the structure and reports the first stored fill value or empty
    /// node, with its coordinate path.
    fn validate_invariants(&self) -> Result<(), SparseError>;
}

/// Panics with the offending coordinate path when `$expr` reports a
/// compression violation. `$ctx` names the structure being checked.
///
/// Expands to nothing unless `debug_assertions` or `check-invariants` is on.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!($($ctx)*, " is not compressed: {}"), e);
        }
    };
}
