use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use super::scalar::Real;

/// Complex scalar stored as an interleaved `(re, im)` pair.
///
/// The layout is `#[repr(C)]`, so a `[Complex<f32>]` has the same memory
/// layout as the interleaved single-precision complex arrays CBLAS expects.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex<T> {
    /// Real part.
    pub re: T,
    /// Imaginary part.
    pub im: T,
}

impl<T> Complex<T> {
    /// Create a complex value from its parts.
    #[inline(always)]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: Real> Complex<T> {
    /// `0 + 0i`.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);
    /// `1 + 0i`.
    pub const ONE: Self = Self::new(T::ONE, T::ZERO);

    /// Complex conjugate.
    #[inline(always)]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// L1 magnitude `|re| + |im|`.
    #[inline(always)]
    pub fn cabs1(self) -> T {
        self.re.abs() + self.im.abs()
    }

    /// Multiply both parts by a real scalar.
    #[inline(always)]
    pub fn scale(self, alpha: T) -> Self {
        Self::new(self.re * alpha, self.im * alpha)
    }

    /// Whether both parts are exactly zero.
    #[inline(always)]
    pub fn is_zero(self) -> bool {
        self.re == T::ZERO && self.im == T::ZERO
    }
}

impl<T: Real> Add for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Real> AddAssign for Complex<T> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl<T: Real> Sub for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

/// Full complex multiplication.
impl<T: Real> Mul for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: Real> Neg for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl<T: Real> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Self::new(re, T::ZERO)
    }
}

impl<T: Real> From<(T, T)> for Complex<T> {
    fn from((re, im): (T, T)) -> Self {
        Self::new(re, im)
    }
}

impl<T: Real> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < T::ZERO {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}
