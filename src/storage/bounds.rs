//! Common bound aliases used across storage code.
//!
//! These traits have blanket impls, so any type satisfying the underlying
//! bounds will automatically implement them. They only reduce duplication in
//! `where` clauses.

/// Canonical bound set for stored values.
///
/// - `Clone` because reads hand out values, never references into storage
/// - `PartialEq` to recognize writes of the default value
/// - `Debug` for diagnostics and invariant reports
pub trait Element: Clone + PartialEq + std::fmt::Debug {}
impl<T> Element for T where T: Clone + PartialEq + std::fmt::Debug {}
