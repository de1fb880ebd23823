use std::fmt::{self, Display};
use std::ops::{AddAssign, Div, Mul, Neg, Sub, SubAssign};

use super::element::Element;

/// Floating-point precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// IEEE-754 binary32.
    Single,
    /// IEEE-754 binary64.
    Double,
}

impl Precision {
    /// Precision of a real scalar type.
    pub const fn of<T: Real>() -> Self {
        T::PRECISION
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Single => write!(f, "single"),
            Precision::Double => write!(f, "double"),
        }
    }
}

/// Real scalar type usable by the kernels.
///
/// Implemented for `f32` (single precision) and `f64` (double precision).
/// Every real scalar is also the real [`Element`] of its own precision, so
/// real vectors go through the same generic kernels as complex ones.
pub trait Real:
    Element<Real = Self>
    + Display
    + Default
    + PartialOrd
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Precision of this type.
    const PRECISION: Precision;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;
}

macro_rules! impl_real {
    ($($t:ident => $precision:ident),* $(,)?) => {
        $(
            impl Real for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const PRECISION: Precision = Precision::$precision;

                #[inline(always)]
                fn abs(self) -> Self {
                    $t::abs(self)
                }

                #[inline(always)]
                fn sqrt(self) -> Self {
                    $t::sqrt(self)
                }
            }
        )*
    };
}

impl_real! {
    f32 => Single,
    f64 => Double,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm<T: Real>(a: T, b: T) -> T {
        (a * a + b * b).sqrt()
    }

    fn l1<T: Real>(v: &[T]) -> T {
        v.iter().fold(T::ZERO, |acc, x| acc + x.cabs1())
    }

    #[test]
    fn test_real_generic_arithmetic() {
        assert_eq!(norm(3.0f32, 4.0), 5.0);
        assert_eq!(norm(3.0f64, 4.0), 5.0);
    }

    #[test]
    fn test_real_is_its_own_element() {
        assert_eq!(l1(&[-1.0f64, 2.0, -3.0]), 6.0);
        assert_eq!(l1(&[0.5f32, -0.5]), 1.0);
    }

    #[test]
    fn test_real_constants() {
        assert_eq!(<f32 as Real>::PRECISION, Precision::Single);
        assert_eq!(<f64 as Real>::PRECISION, Precision::Double);
        assert_eq!(<f64 as Real>::ONE - <f64 as Real>::ZERO, 1.0);
        assert_eq!(Real::abs(-2.5f64), 2.5);
    }

    #[test]
    fn test_precision_display() {
        assert_eq!(Precision::of::<f32>().to_string(), "single");
        assert_eq!(Precision::of::<f64>().to_string(), "double");
    }
}
