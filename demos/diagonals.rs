//! Fill both diagonals of a 10x10 sparse grid, print the inner 8x8 block,
//! the number of stored values, and every stored value with its coordinates.
//!
//! Run with `cargo run --example diagonals`.

use itertools::Itertools;
use sparse_nd::prelude::*;

fn main() {
    let mut m = SparseDimension::<i32, Zero, 2>::new();

    for i in 0..=9usize {
        m.at(i).at(i).set(i as i32);
        m.at(i).at(9 - i).set(i as i32);
    }

    for row in 1..=8 {
        let line = (1..=8).map(|col| m.at(row).at(col).get()).join(" ");
        println!("{line}");
    }

    println!();
    println!("{}", m.size());
    println!();

    m.for_each_entry(|coordinates, value| {
        println!(
            "{}",
            FlatEntry {
                coordinates: *coordinates,
                value: *value,
            }
        );
    });
}
