//! # Traits
//!
//! The number type hierarchy needed by the data structures. Matrices only need the field
//! operations in place; algorithms additionally compare values, which the `Ord` and `Signed`
//! bounds provide.
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::{One, Signed, Zero};

/// Basic field operations, performed in place with a borrowed right hand side.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Field:
    Sized +
    Clone +
    Eq +
    Ord +
    Zero +
    One +
    Signed +
    for<'r> AddAssign<&'r Self> +
    for<'r> SubAssign<&'r Self> +
    for<'r> MulAssign<&'r Self> +
    for<'r> DivAssign<&'r Self> +
    Display +
    Debug
{
}

impl<T> Field for T
where
    T: Clone + Eq + Ord + Zero + One + Signed + Display + Debug,
    T: for<'r> AddAssign<&'r T> + for<'r> SubAssign<&'r T>,
    T: for<'r> MulAssign<&'r T> + for<'r> DivAssign<&'r T>,
{
}

#[cfg(test)]
mod test {
    use num_traits::{One, Signed, Zero};

    use crate::data::number_types::rational::Rational;
    use crate::data::number_types::traits::Field;
    use crate::RB;

    fn square<F: Field>(value: &F) -> F {
        let mut result = value.clone();
        result *= value;
        result
    }

    #[test]
    fn in_place_operations() {
        let mut x = RB!(3, 4);
        x += &RB!(1, 4);
        assert!(x.is_one());
        x -= &RB!(1);
        assert!(x.is_zero());
        x += &RB!(-2, 3);
        assert!(x.is_negative());
        x /= &RB!(-1, 3);
        assert_eq!(x, RB!(2));
    }

    #[test]
    fn squares() {
        assert_eq!(square(&RB!(-3, 2)), RB!(9, 4));
        assert_eq!(square(&Rational::zero()), RB!(0));
    }
}
