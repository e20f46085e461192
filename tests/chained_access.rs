use sparse_nd::prelude::*;

#[test]
fn four_dimensional_chain() {
    let mut m = SparseDimension::<u64, Zero, 4>::new();
    m.at(1).at(2).at(3).at(4).set(1234);
    m.at(1).at(2).at(3).at(5).set(1235);
    m.at(9).at(0).at(0).at(0).set(9000);

    assert_eq!(m.at(1).at(2).at(3).at(4).get(), 1234);
    assert_eq!(m.get([1, 2, 3, 5]), 1235);
    assert_eq!(m.size(), 3);

    let top: Vec<usize> = m.iter().map(|(c, _)| c).collect();
    assert_eq!(top, vec![1, 9]);
}

#[test]
fn chained_and_direct_access_agree() {
    let mut a = SparseDimension::<i32, Zero, 3>::new();
    let mut b = SparseDimension::<i32, Zero, 3>::new();
    for (i, value) in [(0usize, 5), (1, 0), (2, -7), (0, 0), (3, 11)] {
        a.at(i).at(i + 1).at(i + 2).set(value);
        b.set([i, i + 1, i + 2], value);
    }
    assert_eq!(a, b);
    assert_eq!(a.size(), 2);
}

#[test]
fn resolved_accumulator_compares_against_values() {
    let mut m = SparseDimension::<i32, Zero, 2>::new();
    assert!(m.at(3).at(3).set(42) == 42);
    assert!(m.at(3).at(3) == 42);
    assert!(m.at(3).at(4) == 0);
}

#[test]
fn overwrite_through_chain_keeps_one_entry() {
    let mut m = SparseDimension::<i32, Zero, 2>::new();
    m.at(5).at(5).set(1);
    m.at(5).at(5).set(2);
    m.at(5).at(5).set(3);
    assert_eq!(m.size(), 1);
    assert_eq!(m.remove([5, 5]), Some(3));
    assert!(m.is_empty());
}

#[test]
fn default_write_on_absent_path_allocates_nothing() {
    let mut m = SparseDimension::<i32, Zero, 3>::new();
    m.at(7).at(7).at(7).set(0);
    assert!(m.is_empty());
    assert_eq!(m.iter().count(), 0);
}
