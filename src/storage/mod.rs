//! Sparse storage: the recursive axis type and its compile-time parameters.
//!
//! - [`dimension::SparseDimension`]: one axis, nesting lower-rank axes
//! - [`rank`]: type-level dimensionality and the per-rank recursion
//! - [`fill`]: markers naming the default value
//! - [`bounds`]: bound aliases for stored values

pub mod bounds;
pub mod dimension;
pub mod fill;
pub mod rank;

pub use bounds::Element;
pub use dimension::{ChildOf, Iter, SparseDimension};
pub use fill::{Fill, Unset, Zero};
pub use rank::{Dimension, MAX_DIMENSIONS, Rank};
