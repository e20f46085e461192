#![cfg_attr(docsrs, feature(doc_cfg))]
//! # sparse-nd
//!
//! sparse-nd provides sparse, fixed-dimensionality associative arrays: an
//! `N`-dimensional grid addressed by `usize` coordinates that stores only the
//! entries differing from a compile-time default value. Memory grows with the
//! number of non-default values, never with the addressable space.
//!
//! ## Features
//! - Recursive storage: an axis of rank `N` nests axes of rank `N - 1`, down
//!   to rank 1 which holds the values themselves
//! - Immediate compression: default writes erase entries and empty branches
//!   collapse on the spot
//! - Chained access `m.at(a).at(b).set(v)` whose arity is checked by the
//!   type system
//! - Ordered traversal, one level at a time or flattened
//! - Dimensionalities 1 through
//!   [`MAX_DIMENSIONS`](storage::MAX_DIMENSIONS) (12)
//!
//! ## Usage
//!
//! ```rust
//! use sparse_nd::prelude::*;
//!
//! let mut m = SparseDimension::<i32, Zero, 2>::new();
//! for i in 0..=9 {
//!     m.at(i).at(i).set(i as i32);
//!     m.at(i).at(9 - i).set(i as i32);
//! }
//!
//! assert_eq!(m.at(1).at(8).get(), 1);
//! assert_eq!(m.at(2).at(3).get(), 0);
//! // Both writes at row 0 store the default and are dropped.
//! assert_eq!(m.size(), 18);
//! ```
//!
//! ## Defaults
//! The default value is named by a zero-sized fill marker: [`Zero`](storage::Zero),
//! [`Unset`](storage::Unset) (`T::default()`), or one declared with
//! [`fill_value!`].
//!
//! ## Invariant checks
//! Every public mutation re-validates the compression invariants in debug
//! builds. Enable the `check-invariants` feature to keep the checks in
//! release builds.
//!
//! ## Concurrency
//! Structures carry no internal synchronization. Writes need `&mut`, so the
//! borrow checker already enforces a single writer; share across threads
//! behind your own lock if needed.

pub mod access;
pub mod debug_invariants;
pub mod flat;
pub mod sparse_error;
pub mod storage;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::access::accumulator::IndexAccumulator;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::fill_value;
    pub use crate::flat::FlatEntry;
    pub use crate::sparse_error::SparseError;
    pub use crate::storage::bounds::Element;
    pub use crate::storage::dimension::SparseDimension;
    pub use crate::storage::fill::{Fill, Unset, Zero};
    pub use crate::storage::rank::{Dimension, Rank};
}
