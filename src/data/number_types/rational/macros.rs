/// Shorthand for creating a rational number from integer literals.
///
/// `RB!(3)` is the integer three, `RB!(3, 4)` is three quarters.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational::from_integer(
            $crate::data::number_types::rational::BigInt::from($value)
        )
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational::new(
            $crate::data::number_types::rational::BigInt::from($numer),
            $crate::data::number_types::rational::BigInt::from($denom),
        )
    };
}
