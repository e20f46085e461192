//! Flattened view of a sparse structure.
//!
//! The storage itself only exposes one level at a time. This module walks all
//! levels and reports every stored value together with its full coordinate
//! tuple, in lexicographic coordinate order. Useful for printing, diffing and
//! bulk export.

use std::fmt;

use itertools::Itertools;

use crate::storage::bounds::Element;
use crate::storage::dimension::SparseDimension;
use crate::storage::fill::Fill;
use crate::storage::rank::{Dimension, Rank};

/// A stored value with its full coordinate tuple.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FlatEntry<T, const N: usize> {
    pub coordinates: [usize; N],
    pub value: T,
}

/// Renders as `{c0,c1,..}: value`.
impl<T: fmt::Display, const N: usize> fmt::Display for FlatEntry<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}: {}", self.coordinates.iter().join(","), self.value)
    }
}

impl<T, F, const N: usize> SparseDimension<T, F, N>
where
    T: Element,
    F: Fill<T>,
    Rank<N>: Dimension<T, F>,
{
    /// Calls `visit` for every stored value, in lexicographic coordinate order.
    pub fn for_each_entry<V>(&self, mut visit: V)
    where
        V: FnMut(&[usize; N], &T),
    {
        let mut coordinates = [0; N];
        self.visit_leaves(&mut coordinates, 0, &mut visit);
    }

    /// Every stored value with its coordinates, in lexicographic order.
    ///
    /// The result has exactly [`size`](Self::size) entries.
    pub fn entries(&self) -> Vec<FlatEntry<T, N>> {
        let mut out = Vec::with_capacity(self.size());
        self.for_each_entry(|coordinates, value| {
            out.push(FlatEntry {
                coordinates: *coordinates,
                value: value.clone(),
            })
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::fill::Zero;

    #[test]
    fn entries_are_lexicographic() {
        let mut m = SparseDimension::<i32, Zero, 3>::new();
        m.set([2, 0, 1], 3);
        m.set([0, 5, 5], 1);
        m.set([0, 1, 9], 2);
        m.set([0, 1, 9], 0);
        m.set([0, 1, 2], 4);

        let flat: Vec<([usize; 3], i32)> = m
            .entries()
            .into_iter()
            .map(|e| (e.coordinates, e.value))
            .collect();
        assert_eq!(
            flat,
            vec![([0, 1, 2], 4), ([0, 5, 5], 1), ([2, 0, 1], 3)]
        );
        assert_eq!(flat.len(), m.size());
    }

    #[test]
    fn display_format() {
        let e = FlatEntry {
            coordinates: [4, 5],
            value: 7,
        };
        assert_eq!(e.to_string(), "{4,5}: 7");
    }

    #[test]
    fn empty_structure_has_no_entries() {
        let m = SparseDimension::<i32, Zero, 4>::new();
        let mut calls = 0;
        m.for_each_entry(|_, _| calls += 1);
        assert_eq!(calls, 0);
        assert!(m.entries().is_empty());
    }
}
