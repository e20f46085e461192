//! Chained coordinate access.

pub mod accumulator;

pub use accumulator::IndexAccumulator;
