//! SparseDimension: recursive sparse storage for one axis of an N-dimensional space.
//!
//! A `SparseDimension<T, F, N>` maps `usize` coordinates either to nested
//! `SparseDimension<T, F, N - 1>` nodes (`N > 1`) or directly to values
//! (`N == 1`). Only entries whose value differs from the fill value `F` are
//! materialized.
//!
//! # Invariants
//!
//! - No leaf stores the fill value.
//! - No nested node is empty.
//!
//! Both are restored on every write: default writes erase leaves, and a node
//! that loses its last entry is removed from its parent, recursively. Memory
//! is therefore proportional to the number of non-default values, not to the
//! addressable space. The invariants are checked after mutations in debug
//! builds and when the `check-invariants` feature is enabled, and can be
//! verified manually via
//! [`validate_invariants`](crate::DebugInvariants::validate_invariants).

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::access::accumulator::IndexAccumulator;
use crate::debug_invariants::DebugInvariants;
use crate::sparse_error::SparseError;
use crate::storage::bounds::Element;
use crate::storage::fill::Fill;
use crate::storage::rank::{Dimension, Rank};

/// Child type stored per coordinate by an axis of rank `N`.
pub type ChildOf<T, F, const N: usize> = <Rank<N> as Dimension<T, F>>::Child;

/// One axis of a sparse `N`-dimensional structure with element `T` and fill `F`.
///
/// The root of a structure is simply the `SparseDimension` of rank `N`.
///
/// ```rust
/// use sparse_nd::prelude::*;
///
/// let mut m = SparseDimension::<i32, Zero, 2>::new();
/// m.at(1).at(1).set(1);
/// m.set([1, 8], 1);
///
/// assert_eq!(m.at(1).at(8).get(), 1);
/// assert_eq!(m.get([2, 3]), 0);
/// assert_eq!(m.size(), 2);
/// ```
///
/// Dimensionality zero is rejected at compile time:
///
/// ```compile_fail
/// use sparse_nd::prelude::*;
///
/// let m = SparseDimension::<i32, Zero, 0>::new();
/// ```
pub struct SparseDimension<T, F, const N: usize>
where
    Rank<N>: Dimension<T, F>,
{
    /// Non-default entries of this axis, in ascending coordinate order.
    nodes: BTreeMap<usize, ChildOf<T, F, N>>,
    fill: PhantomData<fn() -> F>,
}

impl<T, F, const N: usize> SparseDimension<T, F, N>
where
    T: Element,
    F: Fill<T>,
    Rank<N>: Dimension<T, F>,
{
    /// Number of coordinates needed to address a value.
    pub const DIMENSIONS: usize = N;

    /// Creates an empty structure; every coordinate reads as the fill value.
    pub fn new() -> Self {
        SparseDimension {
            nodes: BTreeMap::new(),
            fill: PhantomData,
        }
    }

    /// Number of coordinates needed to address a value.
    #[inline]
    pub fn dimensions(&self) -> usize {
        N
    }

    /// The value implicitly present at every unwritten coordinate.
    #[inline]
    pub fn default_value() -> T {
        F::value()
    }

    /// Returns the value at `coordinates`, or the fill value if never written.
    ///
    /// The lookup stops at the first absent coordinate.
    ///
    /// # Complexity
    /// **O(N log k)** where `k` is the widest axis along the path.
    pub fn get(&self, coordinates: [usize; N]) -> T {
        self.get_at(&coordinates)
    }

    /// Writes `value` at `coordinates`.
    ///
    /// Writing the fill value erases the entry and collapses every ancestor
    /// node left empty. A fill-value write to an absent path allocates
    /// nothing.
    ///
    /// # Complexity
    /// **O(N log k)** in release builds. Debug builds and the
    /// `check-invariants` feature validate the whole structure after each
    /// write, which adds **O(size)** per call and makes bulk fills quadratic.
    /// [`Extend`] validates once after the whole batch instead.
    pub fn set(&mut self, coordinates: [usize; N], value: T) {
        self.set_at(&coordinates, value);
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        self.debug_assert_invariants();
    }

    /// Resets the cell at `coordinates` to the fill value.
    ///
    /// Returns the previous value if it was stored (non-default).
    pub fn remove(&mut self, coordinates: [usize; N]) -> Option<T> {
        let previous = self.get(coordinates);
        if previous == F::value() {
            return None;
        }
        self.set(coordinates, F::value());
        Some(previous)
    }

    /// Starts a chained access at `index` on the first axis.
    ///
    /// Each further [`at`](IndexAccumulator::at) records one more coordinate;
    /// once all `N` are known the accumulator resolves with
    /// [`get`](IndexAccumulator::get) or [`set`](IndexAccumulator::set).
    /// Nothing touches storage before that.
    ///
    /// `at` is defined once per remaining depth, so `N` must already be
    /// fixed (by a turbofish or a type annotation) when the chain is written.
    /// `SparseDimension::new().at(i).at(j)` alone is ambiguous.
    #[inline]
    #[must_use = "an index accumulator does nothing until resolved with `get` or `set`"]
    pub fn at(&mut self, index: usize) -> IndexAccumulator<'_, T, F, N, N> {
        IndexAccumulator::new(self, index)
    }

    /// Runtime-checked read for coordinates only known as a slice.
    ///
    /// # Errors
    /// Returns `Err(DimensionMismatch)` if `coordinates.len() != N`.
    pub fn try_get(&self, coordinates: &[usize]) -> Result<T, SparseError> {
        Self::check_arity(coordinates)?;
        Ok(self.get_at(coordinates))
    }

    /// Runtime-checked write for coordinates only known as a slice.
    ///
    /// # Errors
    /// Returns `Err(DimensionMismatch)` if `coordinates.len() != N`; nothing
    /// is written in that case.
    ///
    /// Carries the same per-write validation cost as [`set`](Self::set) in
    /// debug builds.
    pub fn try_set(&mut self, coordinates: &[usize], value: T) -> Result<(), SparseError> {
        Self::check_arity(coordinates)?;
        self.set_at(coordinates, value);
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        self.debug_assert_invariants();
        Ok(())
    }

    /// Total number of stored (non-default) values.
    ///
    /// Recomputed by a full traversal; there is no cached counter.
    pub fn size(&self) -> usize {
        <Rank<N> as Dimension<T, F>>::size(&self.nodes)
    }

    /// Whether no value is stored at all.
    ///
    /// **O(1)**: an axis with any entry has a non-empty subtree.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every stored value.
    pub fn clear(&mut self) {
        if !self.nodes.is_empty() {
            log::debug!(
                "clearing {} stored values from a rank-{} structure",
                self.size(),
                N
            );
        }
        self.nodes.clear();
    }

    /// Iterates this axis only, as `(coordinate, child)` in ascending order.
    ///
    /// `child` is the value for rank 1 and the nested axis otherwise. Deeper
    /// levels are reached by iterating the children in turn.
    pub fn iter(&self) -> Iter<'_, T, F, N> {
        Iter {
            inner: self.nodes.iter(),
        }
    }

    pub(crate) fn get_at(&self, coordinates: &[usize]) -> T {
        <Rank<N> as Dimension<T, F>>::get(&self.nodes, coordinates)
    }

    pub(crate) fn set_at(&mut self, coordinates: &[usize], value: T) {
        <Rank<N> as Dimension<T, F>>::set(&mut self.nodes, coordinates, value)
    }

    pub(crate) fn validate_nodes(&self) -> Result<(), SparseError> {
        <Rank<N> as Dimension<T, F>>::validate(&self.nodes)
    }

    pub(crate) fn visit_leaves<const M: usize, V>(
        &self,
        coordinates: &mut [usize; M],
        axis: usize,
        visit: &mut V,
    ) where
        V: FnMut(&[usize; M], &T),
    {
        <Rank<N> as Dimension<T, F>>::for_each_leaf(&self.nodes, coordinates, axis, visit)
    }

    fn check_arity(coordinates: &[usize]) -> Result<(), SparseError> {
        if coordinates.len() != N {
            return Err(SparseError::DimensionMismatch {
                expected: N,
                found: coordinates.len(),
            });
        }
        Ok(())
    }
}

impl<T, F, const N: usize> DebugInvariants for SparseDimension<T, F, N>
where
    T: Element,
    F: Fill<T>,
    Rank<N>: Dimension<T, F>,
{
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "SparseDimension");
    }

    fn validate_invariants(&self) -> Result<(), SparseError> {
        self.validate_nodes()
    }
}

impl<T, F, const N: usize> Default for SparseDimension<T, F, N>
where
    T: Element,
    F: Fill<T>,
    Rank<N>: Dimension<T, F>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F, const N: usize> Clone for SparseDimension<T, F, N>
where
    Rank<N>: Dimension<T, F>,
{
    fn clone(&self) -> Self {
        SparseDimension {
            nodes: self.nodes.clone(),
            fill: PhantomData,
        }
    }
}

impl<T, F, const N: usize> PartialEq for SparseDimension<T, F, N>
where
    Rank<N>: Dimension<T, F>,
{
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<T, F, const N: usize> fmt::Debug for SparseDimension<T, F, N>
where
    Rank<N>: Dimension<T, F>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseDimension")
            .field("dimensions", &N)
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl<T, F, const N: usize> Extend<([usize; N], T)> for SparseDimension<T, F, N>
where
    T: Element,
    F: Fill<T>,
    Rank<N>: Dimension<T, F>,
{
    /// Applies each write in order, so later writes win and fill values erase.
    fn extend<I: IntoIterator<Item = ([usize; N], T)>>(&mut self, iter: I) {
        for (coordinates, value) in iter {
            self.set_at(&coordinates, value);
        }
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        self.debug_assert_invariants();
    }
}

impl<T, F, const N: usize> FromIterator<([usize; N], T)> for SparseDimension<T, F, N>
where
    T: Element,
    F: Fill<T>,
    Rank<N>: Dimension<T, F>,
{
    fn from_iter<I: IntoIterator<Item = ([usize; N], T)>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

/// Ordered single-level iterator over a [`SparseDimension`].
///
/// Finite and restartable: every call to [`SparseDimension::iter`] starts
/// over from the lowest coordinate.
pub struct Iter<'a, T, F, const N: usize>
where
    Rank<N>: Dimension<T, F>,
{
    inner: btree_map::Iter<'a, usize, ChildOf<T, F, N>>,
}

impl<'a, T, F, const N: usize> Iterator for Iter<'a, T, F, N>
where
    Rank<N>: Dimension<T, F>,
{
    type Item = (usize, &'a ChildOf<T, F, N>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&coordinate, child)| (coordinate, child))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, F, const N: usize> DoubleEndedIterator for Iter<'_, T, F, N>
where
    Rank<N>: Dimension<T, F>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(&coordinate, child)| (coordinate, child))
    }
}

impl<T, F, const N: usize> ExactSizeIterator for Iter<'_, T, F, N> where Rank<N>: Dimension<T, F> {}

impl<T, F, const N: usize> FusedIterator for Iter<'_, T, F, N> where Rank<N>: Dimension<T, F> {}

impl<T, F, const N: usize> Clone for Iter<'_, T, F, N>
where
    Rank<N>: Dimension<T, F>,
{
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T, F, const N: usize> IntoIterator for &'a SparseDimension<T, F, N>
where
    T: Element,
    F: Fill<T>,
    Rank<N>: Dimension<T, F>,
{
    type Item = (usize, &'a ChildOf<T, F, N>);
    type IntoIter = Iter<'a, T, F, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
