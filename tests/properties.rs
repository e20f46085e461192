use std::collections::BTreeMap;

use proptest::prelude::*;
use sparse_nd::prelude::*;

type Cube = SparseDimension<i16, Zero, 3>;

/// Small coordinate range so random writes collide often.
fn write() -> impl Strategy<Value = ([usize; 3], i16)> {
    (
        prop::array::uniform3(0usize..4),
        prop_oneof![Just(0i16), -3i16..=3],
    )
}

/// Reference model: last written value per tuple, defaults dropped.
fn model(writes: &[([usize; 3], i16)]) -> BTreeMap<[usize; 3], i16> {
    let mut last = BTreeMap::new();
    for &(coordinates, value) in writes {
        last.insert(coordinates, value);
    }
    last.retain(|_, v| *v != 0);
    last
}

proptest! {
    #[test]
    fn size_counts_last_non_default_writes(writes in prop::collection::vec(write(), 0..64)) {
        let mut m = Cube::new();
        for &(coordinates, value) in &writes {
            m.set(coordinates, value);
        }
        let expected = model(&writes);
        prop_assert_eq!(m.size(), expected.len());
        prop_assert!(m.validate_invariants().is_ok());
    }

    #[test]
    fn reads_match_last_write_or_default(writes in prop::collection::vec(write(), 0..64)) {
        let mut m = Cube::new();
        for &(coordinates, value) in &writes {
            m.at(coordinates[0]).at(coordinates[1]).at(coordinates[2]).set(value);
        }
        let expected = model(&writes);
        for x in 0..4 {
            for y in 0..4 {
                for z in 0..4 {
                    let want = expected.get(&[x, y, z]).copied().unwrap_or(0);
                    prop_assert_eq!(m.get([x, y, z]), want);
                }
            }
        }
    }

    #[test]
    fn flattened_entries_equal_model(writes in prop::collection::vec(write(), 0..64)) {
        let m: Cube = writes.iter().copied().collect();
        let flat: Vec<([usize; 3], i16)> = m
            .entries()
            .into_iter()
            .map(|e| (e.coordinates, e.value))
            .collect();
        let expected: Vec<([usize; 3], i16)> = model(&writes).into_iter().collect();
        prop_assert_eq!(flat, expected);
    }

    #[test]
    fn final_state_ignores_order_of_distinct_writes(
        cells in prop::collection::btree_map(prop::array::uniform3(0usize..6), -5i16..=5, 0..32)
    ) {
        let forward: Cube = cells.iter().map(|(&c, &v)| (c, v)).collect();
        let backward: Cube = cells.iter().rev().map(|(&c, &v)| (c, v)).collect();
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward.size(), cells.values().filter(|v| **v != 0).count());
    }

    #[test]
    fn default_write_restores_previous_size(
        writes in prop::collection::vec(write(), 0..32),
        outside in prop::array::uniform3(4usize..8),
        value in 1i16..100,
    ) {
        // `outside` lies outside every coordinate `write()` generates.
        let mut m: Cube = writes.into_iter().collect();
        let before = m.size();
        let snapshot = m.clone();

        m.set(outside, value);
        prop_assert_eq!(m.size(), before + 1);
        prop_assert_eq!(m.get(outside), value);

        m.set(outside, 0);
        prop_assert_eq!(m.size(), before);
        prop_assert_eq!(m.get(outside), 0);
        // No residual branch along the prefix of `outside`.
        prop_assert_eq!(m, snapshot);
    }
}
