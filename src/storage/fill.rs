//! Fill markers: the compile-time default value of a sparse structure.
//!
//! A sparse structure never stores its default value; every unwritten
//! coordinate reads as it. The default is named at the type level by a
//! zero-sized marker implementing [`Fill`], so every node of a structure
//! shares it without carrying it at runtime.
//!
//! Three ways to pick one:
//! - [`Zero`] for numeric types (`num_traits::Zero`),
//! - [`Unset`] for any `T: Default`,
//! - [`fill_value!`](crate::fill_value) to declare a marker for an arbitrary
//!   constant expression.

use num_traits::Zero as NumZero;

/// Names the default value of a sparse structure holding `T`.
pub trait Fill<T> {
    /// The value implicitly present at every unwritten coordinate.
    fn value() -> T;
}

/// Default value `0` (or the additive identity of `T`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Zero;

impl<T: NumZero> Fill<T> for Zero {
    #[inline]
    fn value() -> T {
        T::zero()
    }
}

/// Default value `T::default()`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unset;

impl<T: Default> Fill<T> for Unset {
    #[inline]
    fn value() -> T {
        T::default()
    }
}

/// Declare a fill marker type for a constant default value.
///
/// ```rust
/// use sparse_nd::fill_value;
/// use sparse_nd::storage::fill::Fill;
///
/// fill_value!(pub MinusOne: i32 = -1);
/// assert_eq!(<MinusOne as Fill<i32>>::value(), -1);
/// ```
#[macro_export]
macro_rules! fill_value {
    ($vis:vis $name:ident : $ty:ty = $value:expr) => {
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::storage::fill::Fill<$ty> for $name {
            #[inline]
            fn value() -> $ty {
                $value
            }
        }
    };
}

static_assertions::assert_eq_size!(Zero, ());
static_assertions::assert_eq_size!(Unset, ());
