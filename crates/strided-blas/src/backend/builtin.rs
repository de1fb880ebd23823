use super::Level1;
use crate::core::{kernels, rotation, EngineConfig};
use crate::error::Result;
use crate::types::{Complex, Real};

/// Backend that runs the crate's own kernel engine.
///
/// # Example
///
/// ```
/// use strided_blas::backend::{Builtin, Level1};
///
/// let blas = Builtin::default();
/// let x = [1.0f64, 2.0, 3.0];
/// let mut y = [4.0f64, 5.0, 6.0];
/// blas.axpy(3, 2.0, &x, 1, &mut y, 1).unwrap();
/// assert_eq!(y, [6.0, 9.0, 12.0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Builtin {
    config: EngineConfig,
}

impl Builtin {
    /// Create a backend with explicit loop parameters.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loop parameters in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl<T: Real> Level1<T> for Builtin {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn axpy(&self, n: usize, alpha: T, x: &[T], incx: usize, y: &mut [T], incy: usize) -> Result<()> {
        kernels::axpy(&self.config, n, alpha, x, incx, y, incy)
    }

    fn caxpy(
        &self,
        n: usize,
        alpha: Complex<T>,
        x: &[Complex<T>],
        incx: usize,
        y: &mut [Complex<T>],
        incy: usize,
    ) -> Result<()> {
        kernels::axpy(&self.config, n, alpha, x, incx, y, incy)
    }

    fn copy(&self, n: usize, x: &[T], incx: usize, y: &mut [T], incy: usize) -> Result<()> {
        kernels::copy(&self.config, n, x, incx, y, incy)
    }

    fn ccopy(
        &self,
        n: usize,
        x: &[Complex<T>],
        incx: usize,
        y: &mut [Complex<T>],
        incy: usize,
    ) -> Result<()> {
        kernels::copy(&self.config, n, x, incx, y, incy)
    }

    fn swap(&self, n: usize, x: &mut [T], incx: usize, y: &mut [T], incy: usize) -> Result<()> {
        kernels::swap(&self.config, n, x, incx, y, incy)
    }

    fn cswap(
        &self,
        n: usize,
        x: &mut [Complex<T>],
        incx: usize,
        y: &mut [Complex<T>],
        incy: usize,
    ) -> Result<()> {
        kernels::swap(&self.config, n, x, incx, y, incy)
    }

    fn scal(&self, n: usize, alpha: T, x: &mut [T], incx: usize) -> Result<()> {
        kernels::scal(&self.config, n, alpha, x, incx)
    }

    fn csscal(&self, n: usize, alpha: T, x: &mut [Complex<T>], incx: usize) -> Result<()> {
        kernels::scal(&self.config, n, alpha, x, incx)
    }

    fn cscal(&self, n: usize, alpha: Complex<T>, x: &mut [Complex<T>], incx: usize) -> Result<()> {
        kernels::cscal(&self.config, n, alpha, x, incx)
    }

    fn add(&self, n: usize, alpha: T, x: &mut [T], incx: usize) -> Result<()> {
        kernels::add(&self.config, n, alpha, x, incx)
    }

    fn cadd(&self, n: usize, alpha: Complex<T>, x: &mut [Complex<T>], incx: usize) -> Result<()> {
        kernels::add(&self.config, n, alpha, x, incx)
    }

    fn cadd_re(&self, n: usize, alpha: T, x: &mut [Complex<T>], incx: usize) -> Result<()> {
        kernels::add_re(&self.config, n, alpha, x, incx)
    }

    fn dot(&self, n: usize, x: &[T], incx: usize, y: &[T], incy: usize) -> Result<T> {
        kernels::dot(&self.config, n, x, incx, y, incy)
    }

    fn cdot(
        &self,
        n: usize,
        x: &[Complex<T>],
        incx: usize,
        y: &[T],
        incy: usize,
    ) -> Result<Complex<T>> {
        kernels::cdot(&self.config, n, x, incx, y, incy)
    }

    fn dotc(
        &self,
        n: usize,
        x: &[Complex<T>],
        incx: usize,
        y: &[Complex<T>],
        incy: usize,
    ) -> Result<Complex<T>> {
        kernels::dotc(&self.config, n, x, incx, y, incy)
    }

    fn dotu(
        &self,
        n: usize,
        x: &[Complex<T>],
        incx: usize,
        y: &[Complex<T>],
        incy: usize,
    ) -> Result<Complex<T>> {
        kernels::dotu(&self.config, n, x, incx, y, incy)
    }

    fn asum(&self, n: usize, x: &[T], incx: usize) -> Result<T> {
        kernels::asum(&self.config, n, x, incx)
    }

    fn casum(&self, n: usize, x: &[Complex<T>], incx: usize) -> Result<T> {
        kernels::asum(&self.config, n, x, incx)
    }

    fn nrm2(&self, n: usize, x: &[T], incx: usize) -> Result<T> {
        kernels::nrm2(&self.config, n, x, incx)
    }

    fn cnrm2(&self, n: usize, x: &[Complex<T>], incx: usize) -> Result<T> {
        kernels::nrm2(&self.config, n, x, incx)
    }

    fn iamax(&self, n: usize, x: &[T], incx: usize) -> Result<usize> {
        kernels::iamax(n, x, incx)
    }

    fn icamax(&self, n: usize, x: &[Complex<T>], incx: usize) -> Result<usize> {
        kernels::iamax(n, x, incx)
    }

    fn iamin(&self, n: usize, x: &[T], incx: usize) -> Result<usize> {
        kernels::iamin(n, x, incx)
    }

    fn icamin(&self, n: usize, x: &[Complex<T>], incx: usize) -> Result<usize> {
        kernels::iamin(n, x, incx)
    }

    fn rot(
        &self,
        n: usize,
        x: &mut [T],
        incx: usize,
        y: &mut [T],
        incy: usize,
        c: T,
        s: T,
    ) -> Result<()> {
        kernels::rot(&self.config, n, x, incx, y, incy, c, s)
    }

    fn crot(
        &self,
        n: usize,
        x: &mut [Complex<T>],
        incx: usize,
        y: &mut [Complex<T>],
        incy: usize,
        c: T,
        s: T,
    ) -> Result<()> {
        kernels::rot(&self.config, n, x, incx, y, incy, c, s)
    }

    fn rotg(&self, a: &mut T, b: &mut T, c: T, s: T) -> Result<()> {
        rotation::rotg(a, b, c, s)
    }

    fn crotg(&self, a: &mut Complex<T>, b: &mut Complex<T>, c: T, s: Complex<T>) -> Result<()> {
        rotation::crotg(a, b, c, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_generic_over_precision() {
        let blas = Builtin::default();
        assert_eq!(<Builtin as Level1<f32>>::name(&blas), "builtin");
        assert_eq!(blas.nrm2(2, &[3.0f32, 4.0], 1).unwrap(), 5.0f32);
        assert_eq!(blas.nrm2(2, &[3.0f64, 4.0], 1).unwrap(), 5.0f64);
    }

    #[test]
    fn test_builtin_complex_routines() {
        let blas = Builtin::new(EngineConfig::serial());
        let x = [Complex::new(3.0f64, -4.0), Complex::new(-1.0, 0.0)];
        assert_eq!(blas.casum(2, &x, 1).unwrap(), 8.0);
        assert_eq!(blas.icamax(2, &x, 1).unwrap(), 0);
        assert_eq!(blas.icamin(2, &x, 1).unwrap(), 1);
    }

    #[test]
    fn test_builtin_reports_short_buffers() {
        let blas = Builtin::default();
        let x = [1.0f64, 2.0];
        let mut y = [0.0f64; 2];
        assert!(blas.copy(3, &x, 1, &mut y, 1).is_err());
        assert_eq!(y, [0.0, 0.0]);
    }
}
