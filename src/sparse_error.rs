//! SparseError: Unified error type for sparse-nd public APIs
//!
//! The typed API (`get`, `set`, `at`) rejects every arity mismatch at compile
//! time and never fails at runtime. This error type covers the remaining
//! surfaces: the slice-based `try_*` accessors, whose coordinate count is only
//! known at runtime, and invariant validation.

use thiserror::Error;

/// Unified error type for sparse-nd operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SparseError {
    /// A slice of coordinates did not match the structure's dimensionality.
    #[error("Dimension mismatch: expected {expected} coordinates, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// A leaf stores the default value, which must never be materialized.
    #[error("Invariant violated: default value stored at {0:?}")]
    StoredDefault(Vec<usize>),
    /// An axis node with no entries was kept in its parent.
    #[error("Invariant violated: empty axis node kept at {0:?}")]
    EmptyNode(Vec<usize>),
}

impl SparseError {
    /// Prefix the coordinate path of an invariant violation with `coordinate`.
    ///
    /// Used while unwinding a recursive validation so the reported path is
    /// absolute from the root.
    pub(crate) fn within(self, coordinate: usize) -> Self {
        match self {
            SparseError::StoredDefault(mut path) => {
                path.insert(0, coordinate);
                SparseError::StoredDefault(path)
            }
            SparseError::EmptyNode(mut path) => {
                path.insert(0, coordinate);
                SparseError::EmptyNode(path)
            }
            other => other,
        }
    }
}
