//! IndexAccumulator: deferred multi-axis access into a [`SparseDimension`].
//!
//! `SparseDimension::at(i)` does not touch storage. It returns an
//! accumulator holding a mutable borrow of the root and a coordinate buffer
//! with `i` recorded. Each further `at` consumes the accumulator and returns
//! one with a single axis less to go, until `DIM == 1`, where the tuple is
//! complete and the only available operations are [`get`](IndexAccumulator::get)
//! and [`set`](IndexAccumulator::set).
//!
//! The remaining-axis count `DIM` is a const parameter, so a wrong number of
//! indices is a type error rather than a runtime failure:
//!
//! ```compile_fail
//! use sparse_nd::prelude::*;
//!
//! let mut m = SparseDimension::<i32, Zero, 2>::new();
//! m.at(1).at(1).at(1).set(1); // one index too many
//! ```
//!
//! ```compile_fail
//! use sparse_nd::prelude::*;
//!
//! let mut m = SparseDimension::<i32, Zero, 2>::new();
//! m.at(1).set(1); // one index short
//! ```
//!
//! ```compile_fail
//! use sparse_nd::prelude::*;
//!
//! let mut m = SparseDimension::<i32, Zero, 2>::new();
//! let v: i32 = m.at(1).get(); // partial-coordinate read
//! ```
//!
//! Accumulators cannot be built by hand, duplicated, or kept around while the
//! structure is used in another way:
//!
//! ```compile_fail
//! use sparse_nd::prelude::*;
//!
//! let mut m = SparseDimension::<i32, Zero, 2>::new();
//! let pending = m.at(1);
//! m.set([2, 2], 5);
//! pending.at(1).set(1);
//! ```

use std::fmt;

use crate::storage::bounds::Element;
use crate::storage::dimension::SparseDimension;
use crate::storage::fill::{Fill, Zero};
use crate::storage::rank::{Dimension, Rank};

/// Coordinate collector for a root of rank `N` with `DIM` axes left to record.
///
/// `coordinates[..=N - DIM]` are filled.
pub struct IndexAccumulator<'a, T, F, const N: usize, const DIM: usize>
where
    Rank<N>: Dimension<T, F>,
{
    matrix: &'a mut SparseDimension<T, F, N>,
    coordinates: [usize; N],
}

impl<'a, T, F, const N: usize> IndexAccumulator<'a, T, F, N, N>
where
    T: Element,
    F: Fill<T>,
    Rank<N>: Dimension<T, F>,
{
    pub(crate) fn new(matrix: &'a mut SparseDimension<T, F, N>, index: usize) -> Self {
        Self::record(matrix, [0; N], index)
    }
}

impl<'a, T, F, const N: usize, const DIM: usize> IndexAccumulator<'a, T, F, N, DIM>
where
    T: Element,
    F: Fill<T>,
    Rank<N>: Dimension<T, F>,
{
    fn record(
        matrix: &'a mut SparseDimension<T, F, N>,
        mut coordinates: [usize; N],
        index: usize,
    ) -> Self {
        coordinates[N - DIM] = index;
        IndexAccumulator {
            matrix,
            coordinates,
        }
    }

    /// Coordinates recorded so far, in axis order.
    pub fn recorded(&self) -> &[usize] {
        &self.coordinates[..=N - DIM]
    }
}

/// `at` exists only while more than one axis is left.
macro_rules! narrowing {
    ($($dim:literal => $next:literal),* $(,)?) => {$(
        impl<'a, T, F, const N: usize> IndexAccumulator<'a, T, F, N, $dim>
        where
            T: Element,
            F: Fill<T>,
            Rank<N>: Dimension<T, F>,
        {
            /// Records `index` for the next axis.
            #[inline]
            #[must_use = "an index accumulator does nothing until resolved with `get` or `set`"]
            pub fn at(self, index: usize) -> IndexAccumulator<'a, T, F, N, $next> {
                IndexAccumulator::record(self.matrix, self.coordinates, index)
            }
        }
    )*};
}

narrowing!(
    2 => 1,
    3 => 2,
    4 => 3,
    5 => 4,
    6 => 5,
    7 => 6,
    8 => 7,
    9 => 8,
    10 => 9,
    11 => 10,
    12 => 11,
);

impl<'a, T, F, const N: usize> IndexAccumulator<'a, T, F, N, 1>
where
    T: Element,
    F: Fill<T>,
    Rank<N>: Dimension<T, F>,
{
    /// Reads the addressed cell; unwritten cells yield the fill value.
    #[inline]
    pub fn get(&self) -> T {
        self.matrix.get(self.coordinates)
    }

    /// Writes `value` into the addressed cell.
    ///
    /// Returns the accumulator so the written cell can still be read or
    /// compared in the same expression.
    pub fn set(self, value: T) -> Self {
        self.matrix.set(self.coordinates, value);
        self
    }

    /// The complete coordinate tuple.
    #[inline]
    pub fn coordinates(&self) -> [usize; N] {
        self.coordinates
    }
}

impl<T, F, const N: usize> PartialEq<T> for IndexAccumulator<'_, T, F, N, 1>
where
    T: Element,
    F: Fill<T>,
    Rank<N>: Dimension<T, F>,
{
    fn eq(&self, other: &T) -> bool {
        self.get() == *other
    }
}

impl<T, F, const N: usize, const DIM: usize> fmt::Debug for IndexAccumulator<'_, T, F, N, DIM>
where
    Rank<N>: Dimension<T, F>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexAccumulator")
            .field("remaining", &DIM)
            .field("coordinates", &&self.coordinates[..=N - DIM])
            .finish()
    }
}

static_assertions::assert_not_impl_any!(
    IndexAccumulator<'static, i32, Zero, 2, 2>: Clone, Copy, Default
);
static_assertions::assert_not_impl_any!(
    IndexAccumulator<'static, i32, Zero, 2, 1>: Clone, Copy, Default
);
