use std::fmt::Debug;
use std::ops::Add;

use super::complex::Complex;
use super::scalar::Real;

/// Value stored in a strided vector: a real scalar or a complex pair.
///
/// The methods are the component-wise building blocks of the Level-1
/// formulas. For real elements every method collapses to ordinary scalar
/// arithmetic.
pub trait Element: Copy + Debug + PartialEq + Send + Sync + 'static + Add<Output = Self> {
    /// Real scalar type of the same precision.
    type Real: Real;

    /// L1 magnitude: `|x|` for reals, `|re| + |im|` for complex values.
    fn cabs1(self) -> Self::Real;

    /// Component-wise product (`re*re`, `im*im`).
    fn hadamard(self, other: Self) -> Self;

    /// Multiply every component by a real scalar.
    fn scale(self, alpha: Self::Real) -> Self;

    /// Add a real scalar to the real component only.
    fn shift_re(self, alpha: Self::Real) -> Self;
}

macro_rules! impl_element_real {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                type Real = $t;

                #[inline(always)]
                fn cabs1(self) -> $t {
                    self.abs()
                }

                #[inline(always)]
                fn hadamard(self, other: Self) -> Self {
                    self * other
                }

                #[inline(always)]
                fn scale(self, alpha: $t) -> Self {
                    self * alpha
                }

                #[inline(always)]
                fn shift_re(self, alpha: $t) -> Self {
                    self + alpha
                }
            }
        )*
    };
}

impl_element_real!(f32, f64);

impl<T: Real> Element for Complex<T> {
    type Real = T;

    #[inline(always)]
    fn cabs1(self) -> T {
        Complex::cabs1(self)
    }

    #[inline(always)]
    fn hadamard(self, other: Self) -> Self {
        Complex::new(self.re * other.re, self.im * other.im)
    }

    #[inline(always)]
    fn scale(self, alpha: T) -> Self {
        Complex::scale(self, alpha)
    }

    #[inline(always)]
    fn shift_re(self, alpha: T) -> Self {
        Complex::new(self.re + alpha, self.im)
    }
}
