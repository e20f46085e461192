//! Type-level dimensionality.
//!
//! `Rank<N>` is a zero-sized marker whose [`Dimension`] implementation picks
//! what an axis of an `N`-dimensional structure stores per coordinate:
//!
//! - `Rank<1>` stores the element `T` itself,
//! - `Rank<N>` for `N > 1` stores a nested `SparseDimension<T, F, N - 1>`.
//!
//! The recursive get/set/size/validate logic lives here, one implementation
//! per rank, so every level knows statically how deep it is. Ranks 1 through
//! [`MAX_DIMENSIONS`] are provided. `Rank<0>` deliberately has no
//! implementation, which turns a zero-dimensional structure into a type error.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt::Debug;

use crate::sparse_error::SparseError;
use crate::storage::bounds::Element;
use crate::storage::dimension::SparseDimension;
use crate::storage::fill::Fill;

/// Highest dimensionality with a [`Dimension`] implementation.
///
/// One rank past it does not compile:
///
/// ```compile_fail
/// use sparse_nd::prelude::*;
///
/// let m = SparseDimension::<i32, Zero, 13>::new();
/// ```
pub const MAX_DIMENSIONS: usize = 12;

/// Type-level dimensionality marker.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rank<const N: usize>;

mod sealed {
    pub trait Sealed {}
}

impl<const N: usize> sealed::Sealed for Rank<N> {}

/// Per-rank storage behavior of one axis holding `T` with fill `F`.
///
/// All functions operate on the axis' coordinate map. Coordinate slices
/// passed here always hold exactly `DIMENSIONS` entries: the public typed API
/// takes `[usize; N]` and the slice API checks the length before descending.
///
/// This trait is sealed; it is implemented for `Rank<1>` ..= `Rank<12>`.
pub trait Dimension<T, F>: sealed::Sealed {
    /// Number of axes addressed from this level down.
    const DIMENSIONS: usize;

    /// What one coordinate of this axis maps to.
    type Child: Clone + Debug + PartialEq;

    /// Read the value at `coordinates`, or the fill value if unset.
    fn get(nodes: &BTreeMap<usize, Self::Child>, coordinates: &[usize]) -> T;

    /// Write `value` at `coordinates`, pruning anything that becomes default.
    fn set(nodes: &mut BTreeMap<usize, Self::Child>, coordinates: &[usize], value: T);

    /// Count stored leaf values below this axis.
    fn size(nodes: &BTreeMap<usize, Self::Child>) -> usize;

    /// Check that no leaf stores the fill value and no child is empty.
    fn validate(nodes: &BTreeMap<usize, Self::Child>) -> Result<(), SparseError>;

    /// Visit every stored leaf in ascending coordinate order.
    ///
    /// `coordinates[..axis]` holds the path to this axis; each visited leaf
    /// sees its full coordinate tuple.
    fn for_each_leaf<const M: usize, V>(
        nodes: &BTreeMap<usize, Self::Child>,
        coordinates: &mut [usize; M],
        axis: usize,
        visit: &mut V,
    ) where
        V: FnMut(&[usize; M], &T);
}

impl<T: Element, F: Fill<T>> Dimension<T, F> for Rank<1> {
    const DIMENSIONS: usize = 1;
    type Child = T;

    fn get(nodes: &BTreeMap<usize, T>, coordinates: &[usize]) -> T {
        debug_assert_eq!(coordinates.len(), 1);
        coordinates
            .first()
            .and_then(|coordinate| nodes.get(coordinate))
            .cloned()
            .unwrap_or_else(F::value)
    }

    fn set(nodes: &mut BTreeMap<usize, T>, coordinates: &[usize], value: T) {
        debug_assert_eq!(coordinates.len(), 1);
        let Some(&coordinate) = coordinates.first() else {
            return;
        };
        if value == F::value() {
            nodes.remove(&coordinate);
        } else {
            nodes.insert(coordinate, value);
        }
    }

    #[inline]
    fn size(nodes: &BTreeMap<usize, T>) -> usize {
        nodes.len()
    }

    fn validate(nodes: &BTreeMap<usize, T>) -> Result<(), SparseError> {
        let fill = F::value();
        match nodes.iter().find(|(_, value)| **value == fill) {
            Some((&coordinate, _)) => Err(SparseError::StoredDefault(vec![coordinate])),
            None => Ok(()),
        }
    }

    fn for_each_leaf<const M: usize, V>(
        nodes: &BTreeMap<usize, T>,
        coordinates: &mut [usize; M],
        axis: usize,
        visit: &mut V,
    ) where
        V: FnMut(&[usize; M], &T),
    {
        for (&coordinate, value) in nodes {
            coordinates[axis] = coordinate;
            visit(&*coordinates, value);
        }
    }
}

/// Implements [`Dimension`] for `Rank<$rank>` on top of `Rank<$lower>`.
macro_rules! nested_ranks {
    ($($rank:literal => $lower:literal),* $(,)?) => {$(
        impl<T: Element, F: Fill<T>> Dimension<T, F> for Rank<$rank> {
            const DIMENSIONS: usize = $rank;
            type Child = SparseDimension<T, F, $lower>;

            fn get(nodes: &BTreeMap<usize, Self::Child>, coordinates: &[usize]) -> T {
                debug_assert_eq!(coordinates.len(), $rank);
                match coordinates.split_first() {
                    // An absent coordinate means the whole sub-space is default.
                    Some((head, tail)) => nodes
                        .get(head)
                        .map_or_else(F::value, |child| child.get_at(tail)),
                    None => F::value(),
                }
            }

            fn set(nodes: &mut BTreeMap<usize, Self::Child>, coordinates: &[usize], value: T) {
                debug_assert_eq!(coordinates.len(), $rank);
                let Some((&head, tail)) = coordinates.split_first() else {
                    return;
                };
                match nodes.entry(head) {
                    Entry::Occupied(mut slot) => {
                        slot.get_mut().set_at(tail, value);
                        if slot.get().is_empty() {
                            log::trace!("collapsing empty rank-{} node at coordinate {head}", $lower);
                            slot.remove();
                        }
                    }
                    Entry::Vacant(slot) => {
                        if value == F::value() {
                            return;
                        }
                        log::trace!("creating rank-{} node at coordinate {head}", $lower);
                        slot.insert(SparseDimension::new()).set_at(tail, value);
                    }
                }
            }

            fn size(nodes: &BTreeMap<usize, Self::Child>) -> usize {
                nodes.values().map(|child| child.size()).sum()
            }

            fn validate(nodes: &BTreeMap<usize, Self::Child>) -> Result<(), SparseError> {
                for (&coordinate, child) in nodes {
                    if child.is_empty() {
                        return Err(SparseError::EmptyNode(vec![coordinate]));
                    }
                    child
                        .validate_nodes()
                        .map_err(|e| e.within(coordinate))?;
                }
                Ok(())
            }

            fn for_each_leaf<const M: usize, V>(
                nodes: &BTreeMap<usize, Self::Child>,
                coordinates: &mut [usize; M],
                axis: usize,
                visit: &mut V,
            ) where
                V: FnMut(&[usize; M], &T),
            {
                for (&coordinate, child) in nodes {
                    coordinates[axis] = coordinate;
                    child.visit_leaves(coordinates, axis + 1, visit);
                }
            }
        }
    )*};
}

nested_ranks!(
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

static_assertions::assert_eq_size!(Rank<3>, ());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::fill::Zero;

    #[test]
    fn dimensions_constant_matches_rank() {
        assert_eq!(<Rank<1> as Dimension<i32, Zero>>::DIMENSIONS, 1);
        assert_eq!(<Rank<4> as Dimension<i32, Zero>>::DIMENSIONS, 4);
        assert_eq!(
            <Rank<MAX_DIMENSIONS> as Dimension<i32, Zero>>::DIMENSIONS,
            MAX_DIMENSIONS
        );
    }

    #[test]
    fn leaf_axis_never_stores_fill() {
        let mut nodes = BTreeMap::new();
        <Rank<1> as Dimension<i32, Zero>>::set(&mut nodes, &[3], 0);
        assert!(nodes.is_empty());

        <Rank<1> as Dimension<i32, Zero>>::set(&mut nodes, &[3], 7);
        assert_eq!(nodes.get(&3), Some(&7));

        <Rank<1> as Dimension<i32, Zero>>::set(&mut nodes, &[3], 0);
        assert!(nodes.is_empty());
    }

    #[test]
    fn leaf_validation_reports_stored_fill() {
        let mut nodes = BTreeMap::new();
        nodes.insert(5usize, 0i32);
        assert_eq!(
            <Rank<1> as Dimension<i32, Zero>>::validate(&nodes),
            Err(SparseError::StoredDefault(vec![5]))
        );
    }

    #[test]
    fn nested_validation_reports_absolute_path() {
        let mut nodes: BTreeMap<usize, SparseDimension<i32, Zero, 1>> = BTreeMap::new();
        nodes.insert(2, SparseDimension::new());
        assert_eq!(
            <Rank<2> as Dimension<i32, Zero>>::validate(&nodes),
            Err(SparseError::EmptyNode(vec![2]))
        );
    }

    #[test]
    fn nested_default_write_creates_nothing() {
        let mut nodes: BTreeMap<usize, SparseDimension<i32, Zero, 2>> = BTreeMap::new();
        <Rank<3> as Dimension<i32, Zero>>::set(&mut nodes, &[1, 2, 3], 0);
        assert!(nodes.is_empty());
    }
}
