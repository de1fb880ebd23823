//! Execution backends behind the Level-1 routine interface.
//!
//! The [`Level1`] trait is the narrow boundary between the tensor dispatcher
//! and whatever executes the arithmetic. Each method mirrors a BLAS routine:
//! a count, the scalar arguments, then `(buffer, stride)` pairs.
//!
//! | Backend | Feature | Executes |
//! |---------|---------|----------|
//! | [`Builtin`] | (default) | Rayon kernel engine in [`crate::core`] |
//! | `OpenBlas` | `openblas` | CBLAS where its contract matches, [`Builtin`] otherwise |
//!
//! Which backend a build uses is decided in [`crate::gate`]; both produce
//! the same results for every documented formula.

mod builtin;
#[cfg(feature = "openblas")]
mod openblas;

pub use builtin::Builtin;
#[cfg(feature = "openblas")]
pub use openblas::{CblasReal, OpenBlas};

use crate::error::Result;
use crate::types::{Complex, Real};

/// Level-1 routines for one precision `T`.
///
/// Every method validates its operands (`n > 0`, strides > 0, buffers long
/// enough) before touching them and reports violations as
/// [`BlasError::InvalidDimension`](crate::BlasError::InvalidDimension).
#[allow(clippy::too_many_arguments)]
pub trait Level1<T: Real>: Send + Sync {
    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// `y = alpha*x + y`.
    fn axpy(&self, n: usize, alpha: T, x: &[T], incx: usize, y: &mut [T], incy: usize)
        -> Result<()>;

    /// Component-wise complex axpy: `y.re += x.re*alpha.re`, `y.im += x.im*alpha.im`.
    fn caxpy(
        &self,
        n: usize,
        alpha: Complex<T>,
        x: &[Complex<T>],
        incx: usize,
        y: &mut [Complex<T>],
        incy: usize,
    ) -> Result<()>;

    /// `y = x`.
    fn copy(&self, n: usize, x: &[T], incx: usize, y: &mut [T], incy: usize) -> Result<()>;

    /// Complex `y = x`.
    fn ccopy(
        &self,
        n: usize,
        x: &[Complex<T>],
        incx: usize,
        y: &mut [Complex<T>],
        incy: usize,
    ) -> Result<()>;

    /// Exchange `x` and `y`.
    fn swap(&self, n: usize, x: &mut [T], incx: usize, y: &mut [T], incy: usize) -> Result<()>;

    /// Exchange complex `x` and `y`.
    fn cswap(
        &self,
        n: usize,
        x: &mut [Complex<T>],
        incx: usize,
        y: &mut [Complex<T>],
        incy: usize,
    ) -> Result<()>;

    /// `x = alpha*x`.
    fn scal(&self, n: usize, alpha: T, x: &mut [T], incx: usize) -> Result<()>;

    /// Complex `x` scaled by a real `alpha`.
    fn csscal(&self, n: usize, alpha: T, x: &mut [Complex<T>], incx: usize) -> Result<()>;

    /// Complex `x` multiplied by a complex `alpha`.
    fn cscal(&self, n: usize, alpha: Complex<T>, x: &mut [Complex<T>], incx: usize) -> Result<()>;

    /// `x += alpha`.
    fn add(&self, n: usize, alpha: T, x: &mut [T], incx: usize) -> Result<()>;

    /// Complex `x += alpha` on both parts.
    fn cadd(&self, n: usize, alpha: Complex<T>, x: &mut [Complex<T>], incx: usize) -> Result<()>;

    /// Complex `x.re += alpha`.
    fn cadd_re(&self, n: usize, alpha: T, x: &mut [Complex<T>], incx: usize) -> Result<()>;

    /// `Σ x*y`.
    fn dot(&self, n: usize, x: &[T], incx: usize, y: &[T], incy: usize) -> Result<T>;

    /// Complex-by-real dot: `(Σ x.re*y, Σ x.im*y)`.
    fn cdot(&self, n: usize, x: &[Complex<T>], incx: usize, y: &[T], incy: usize)
        -> Result<Complex<T>>;

    /// `Σ conj(x)*y`.
    fn dotc(
        &self,
        n: usize,
        x: &[Complex<T>],
        incx: usize,
        y: &[Complex<T>],
        incy: usize,
    ) -> Result<Complex<T>>;

    /// `Σ x*y` without conjugation.
    fn dotu(
        &self,
        n: usize,
        x: &[Complex<T>],
        incx: usize,
        y: &[Complex<T>],
        incy: usize,
    ) -> Result<Complex<T>>;

    /// `Σ |x|`.
    fn asum(&self, n: usize, x: &[T], incx: usize) -> Result<T>;

    /// `Σ (|re| + |im|)`.
    fn casum(&self, n: usize, x: &[Complex<T>], incx: usize) -> Result<T>;

    /// `sqrt(Σ x²)`.
    fn nrm2(&self, n: usize, x: &[T], incx: usize) -> Result<T>;

    /// `sqrt(Σ cabs1(x)²)`.
    fn cnrm2(&self, n: usize, x: &[Complex<T>], incx: usize) -> Result<T>;

    /// Index of the first maximum `|x|`.
    fn iamax(&self, n: usize, x: &[T], incx: usize) -> Result<usize>;

    /// Index of the first maximum `cabs1(x)`.
    fn icamax(&self, n: usize, x: &[Complex<T>], incx: usize) -> Result<usize>;

    /// Index of the first minimum `|x|`.
    fn iamin(&self, n: usize, x: &[T], incx: usize) -> Result<usize>;

    /// Index of the first minimum `cabs1(x)`.
    fn icamin(&self, n: usize, x: &[Complex<T>], incx: usize) -> Result<usize>;

    /// Symmetric plane rotation `x, y <- c*x + s*y, c*y + s*x`.
    fn rot(
        &self,
        n: usize,
        x: &mut [T],
        incx: usize,
        y: &mut [T],
        incy: usize,
        c: T,
        s: T,
    ) -> Result<()>;

    /// Component-wise complex plane rotation with real `c`, `s`.
    fn crot(
        &self,
        n: usize,
        x: &mut [Complex<T>],
        incx: usize,
        y: &mut [Complex<T>],
        incy: usize,
        c: T,
        s: T,
    ) -> Result<()>;

    /// Rotation-parameter generation; overwrites `a <- r`, `b <- z`.
    fn rotg(&self, a: &mut T, b: &mut T, c: T, s: T) -> Result<()>;

    /// Complex rotation-parameter generation.
    fn crotg(&self, a: &mut Complex<T>, b: &mut Complex<T>, c: T, s: Complex<T>) -> Result<()>;
}
