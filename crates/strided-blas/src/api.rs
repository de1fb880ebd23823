//! One-call convenience functions over the build's default types.
//!
//! Every function here runs on a fresh [`Dispatcher`] over
//! [`SelectedBackend`] at precision [`Scalar`]. Use a [`Dispatcher`]
//! directly to pick a backend, tune [`EngineConfig`](crate::EngineConfig)
//! or attach an observer.

use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::gate::{CScalar, Scalar, SelectedBackend};
use crate::types::{CMat, CMatMut, Complex, Element, Mat, MatMut};

type DefaultDispatcher = Dispatcher<Scalar, SelectedBackend>;

#[inline]
fn blas() -> DefaultDispatcher {
    DefaultDispatcher::default()
}

/// `y = alpha*x + y`.
///
/// `x` may have a single slice (`d2 == 1`), in which case it is applied to
/// every slice of `y`.
///
/// # Example
///
/// ```
/// use strided_blas::types::{Mat, MatMut};
/// use strided_blas::{axpy, Scalar};
///
/// let x_data: Vec<Scalar> = vec![1.0, 2.0, 3.0, 4.0]; // 2x2x1
/// let mut y_data: Vec<Scalar> = vec![1.0; 8];         // 2x2x2
///
/// let x = Mat::new((2, 2, 1), &x_data).unwrap();
/// let mut y = MatMut::new((2, 2, 2), &mut y_data).unwrap();
/// axpy(2.0, &x, &mut y).unwrap();
///
/// assert_eq!(y_data, vec![3.0, 5.0, 7.0, 9.0, 3.0, 5.0, 7.0, 9.0]);
/// ```
pub fn axpy(alpha: Scalar, x: &Mat<'_, Scalar>, y: &mut MatMut<'_, Scalar>) -> Result<()> {
    blas().axpy(alpha, x, y)
}

/// Component-wise complex `y = alpha*x + y`.
pub fn caxpy(alpha: CScalar, x: &CMat<'_, Scalar>, y: &mut CMatMut<'_, Scalar>) -> Result<()> {
    blas().caxpy(alpha, x, y)
}

/// `y = x`.
pub fn copy(x: &Mat<'_, Scalar>, y: &mut MatMut<'_, Scalar>) -> Result<()> {
    blas().copy(x, y)
}

/// Complex `y = x`.
pub fn ccopy(x: &CMat<'_, Scalar>, y: &mut CMatMut<'_, Scalar>) -> Result<()> {
    blas().ccopy(x, y)
}

/// Exchange `x` and `y`.
pub fn swap(x: &mut MatMut<'_, Scalar>, y: &mut MatMut<'_, Scalar>) -> Result<()> {
    blas().swap(x, y)
}

/// Exchange complex `x` and `y`.
pub fn cswap(x: &mut CMatMut<'_, Scalar>, y: &mut CMatMut<'_, Scalar>) -> Result<()> {
    blas().cswap(x, y)
}

/// Real dot product.
///
/// # Example
///
/// ```
/// use strided_blas::types::Mat;
/// use strided_blas::{dot, Scalar};
///
/// let a: [Scalar; 3] = [1.0, 2.0, 3.0];
/// let b: [Scalar; 3] = [4.0, 5.0, 6.0];
/// let x = Mat::new((3, 1, 1), &a).unwrap();
/// let y = Mat::new((3, 1, 1), &b).unwrap();
/// assert_eq!(dot(&x, &y).unwrap(), 32.0);
/// ```
pub fn dot(x: &Mat<'_, Scalar>, y: &Mat<'_, Scalar>) -> Result<Scalar> {
    blas().dot(x, y)
}

/// Complex-by-real dot product.
pub fn cdot(x: &CMat<'_, Scalar>, y: &Mat<'_, Scalar>) -> Result<CScalar> {
    blas().cdot(x, y)
}

/// Conjugated complex dot product.
pub fn dotc(x: &CMat<'_, Scalar>, y: &CMat<'_, Scalar>) -> Result<CScalar> {
    blas().dotc(x, y)
}

/// Unconjugated complex dot product.
pub fn udot(x: &CMat<'_, Scalar>, y: &CMat<'_, Scalar>) -> Result<CScalar> {
    blas().udot(x, y)
}

/// `Σ |x|`.
pub fn asum(x: &Mat<'_, Scalar>) -> Result<Scalar> {
    blas().asum(x)
}

/// `Σ (|re| + |im|)`.
pub fn casum(x: &CMat<'_, Scalar>) -> Result<Scalar> {
    blas().casum(x)
}

/// Euclidean norm.
pub fn nrm2(x: &Mat<'_, Scalar>) -> Result<Scalar> {
    blas().nrm2(x)
}

/// `sqrt(Σ cabs1(x)²)`.
pub fn cnrm2(x: &CMat<'_, Scalar>) -> Result<Scalar> {
    blas().cnrm2(x)
}

/// Index of the first largest `|x|`.
pub fn amax(x: &Mat<'_, Scalar>) -> Result<usize> {
    blas().amax(x)
}

/// Index of the first largest `cabs1(x)`.
pub fn camax(x: &CMat<'_, Scalar>) -> Result<usize> {
    blas().camax(x)
}

/// Index of the first smallest `|x|`.
pub fn amin(x: &Mat<'_, Scalar>) -> Result<usize> {
    blas().amin(x)
}

/// Index of the first smallest `cabs1(x)`.
pub fn camin(x: &CMat<'_, Scalar>) -> Result<usize> {
    blas().camin(x)
}

/// `Σ |x|` over every `inc`-th element.
pub fn asum_inc(x: &Mat<'_, Scalar>, inc: usize) -> Result<Scalar> {
    blas().asum_inc(x, inc)
}

/// Complex `Σ (|re| + |im|)` over every `inc`-th element.
pub fn casum_inc(x: &CMat<'_, Scalar>, inc: usize) -> Result<Scalar> {
    blas().casum_inc(x, inc)
}

/// Euclidean norm over every `inc`-th element.
pub fn nrm2_inc(x: &Mat<'_, Scalar>, inc: usize) -> Result<Scalar> {
    blas().nrm2_inc(x, inc)
}

/// Complex norm over every `inc`-th element.
pub fn cnrm2_inc(x: &CMat<'_, Scalar>, inc: usize) -> Result<Scalar> {
    blas().cnrm2_inc(x, inc)
}

/// Strided position of the first largest `|x|`.
pub fn amax_inc(x: &Mat<'_, Scalar>, inc: usize) -> Result<usize> {
    blas().amax_inc(x, inc)
}

/// Strided position of the first largest `cabs1(x)`.
pub fn camax_inc(x: &CMat<'_, Scalar>, inc: usize) -> Result<usize> {
    blas().camax_inc(x, inc)
}

/// Strided position of the first smallest `|x|`.
pub fn amin_inc(x: &Mat<'_, Scalar>, inc: usize) -> Result<usize> {
    blas().amin_inc(x, inc)
}

/// Strided position of the first smallest `cabs1(x)`.
pub fn camin_inc(x: &CMat<'_, Scalar>, inc: usize) -> Result<usize> {
    blas().camin_inc(x, inc)
}

/// Dot product of every `incx`-th element of `x` with every `incy`-th
/// element of `y`.
///
/// Both walks must visit the same number of elements.
///
/// # Example
///
/// ```
/// use strided_blas::types::Mat;
/// use strided_blas::{dot_inc, Scalar};
///
/// let a: [Scalar; 5] = [1.0, 0.0, 2.0, 0.0, 3.0];
/// let b: [Scalar; 3] = [4.0, 5.0, 6.0];
/// let x = Mat::new((5, 1, 1), &a).unwrap();
/// let y = Mat::new((3, 1, 1), &b).unwrap();
/// assert_eq!(dot_inc(&x, 2, &y, 1).unwrap(), 32.0);
/// ```
pub fn dot_inc(
    x: &Mat<'_, Scalar>,
    incx: usize,
    y: &Mat<'_, Scalar>,
    incy: usize,
) -> Result<Scalar> {
    blas().dot_inc(x, incx, y, incy)
}

/// Strided complex-by-real dot product.
pub fn cdot_inc(
    x: &CMat<'_, Scalar>,
    incx: usize,
    y: &Mat<'_, Scalar>,
    incy: usize,
) -> Result<CScalar> {
    blas().cdot_inc(x, incx, y, incy)
}

/// Strided conjugated complex dot product.
pub fn dotc_inc(
    x: &CMat<'_, Scalar>,
    incx: usize,
    y: &CMat<'_, Scalar>,
    incy: usize,
) -> Result<CScalar> {
    blas().dotc_inc(x, incx, y, incy)
}

/// Strided unconjugated complex dot product.
pub fn udot_inc(
    x: &CMat<'_, Scalar>,
    incx: usize,
    y: &CMat<'_, Scalar>,
    incy: usize,
) -> Result<CScalar> {
    blas().udot_inc(x, incx, y, incy)
}

/// Exchange every `incx`-th element of `x` with every `incy`-th of `y`.
pub fn swap_inc(
    x: &mut MatMut<'_, Scalar>,
    incx: usize,
    y: &mut MatMut<'_, Scalar>,
    incy: usize,
) -> Result<()> {
    blas().swap_inc(x, incx, y, incy)
}

/// Strided complex swap.
pub fn cswap_inc(
    x: &mut CMatMut<'_, Scalar>,
    incx: usize,
    y: &mut CMatMut<'_, Scalar>,
    incy: usize,
) -> Result<()> {
    blas().cswap_inc(x, incx, y, incy)
}

/// Strided symmetric plane rotation.
pub fn rot_inc(
    x: &mut MatMut<'_, Scalar>,
    incx: usize,
    y: &mut MatMut<'_, Scalar>,
    incy: usize,
    c: Scalar,
    s: Scalar,
) -> Result<()> {
    blas().rot_inc(x, incx, y, incy, c, s)
}

/// Strided component-wise complex plane rotation.
pub fn crot_inc(
    x: &mut CMatMut<'_, Scalar>,
    incx: usize,
    y: &mut CMatMut<'_, Scalar>,
    incy: usize,
    c: Scalar,
    s: Scalar,
) -> Result<()> {
    blas().crot_inc(x, incx, y, incy, c, s)
}

/// Symmetric plane rotation.
pub fn rot(
    x: &mut MatMut<'_, Scalar>,
    y: &mut MatMut<'_, Scalar>,
    c: Scalar,
    s: Scalar,
) -> Result<()> {
    blas().rot(x, y, c, s)
}

/// Component-wise complex plane rotation.
pub fn crot(
    x: &mut CMatMut<'_, Scalar>,
    y: &mut CMatMut<'_, Scalar>,
    c: Scalar,
    s: Scalar,
) -> Result<()> {
    blas().crot(x, y, c, s)
}

/// Rotation-parameter generation.
///
/// # Example
///
/// ```
/// use strided_blas::{rotg, BlasError, Scalar};
///
/// let (mut a, mut b): (Scalar, Scalar) = (3.0, 0.0);
/// rotg(&mut a, &mut b, 1.0, 0.0).unwrap();
/// assert_eq!((a, b), (3.0, 0.0));
///
/// let (mut a, mut b): (Scalar, Scalar) = (1.0, 1.0);
/// let err = rotg(&mut a, &mut b, 1.0, 0.0).unwrap_err();
/// assert!(matches!(err, BlasError::InvalidRotationInput(_)));
/// ```
pub fn rotg(a: &mut Scalar, b: &mut Scalar, c: Scalar, s: Scalar) -> Result<()> {
    blas().rotg(a, b, c, s)
}

/// Complex rotation-parameter generation.
pub fn crotg(a: &mut CScalar, b: &mut CScalar, c: Scalar, s: CScalar) -> Result<()> {
    blas().crotg(a, b, c, s)
}

/// `x = alpha*x`.
pub fn scal(alpha: Scalar, x: &mut MatMut<'_, Scalar>) -> Result<()> {
    blas().scal(alpha, x)
}

/// Complex `x = alpha*x` with complex `alpha`.
pub fn cscal(alpha: CScalar, x: &mut CMatMut<'_, Scalar>) -> Result<()> {
    blas().cscal(alpha, x)
}

/// Complex `x = alpha*x` with real `alpha`.
pub fn csscal(alpha: Scalar, x: &mut CMatMut<'_, Scalar>) -> Result<()> {
    blas().csscal(alpha, x)
}

/// `x += alpha`.
pub fn add(alpha: Scalar, x: &mut MatMut<'_, Scalar>) -> Result<()> {
    blas().add(alpha, x)
}

/// Complex `x += alpha`.
pub fn cadd(alpha: CScalar, x: &mut CMatMut<'_, Scalar>) -> Result<()> {
    blas().cadd(alpha, x)
}

/// Complex `x.re += alpha`.
pub fn cadd_real(alpha: Scalar, x: &mut CMatMut<'_, Scalar>) -> Result<()> {
    blas().cadd_real(alpha, x)
}

/// Scale column `idx` of every slice.
pub fn scal_col(alpha: Scalar, x: &mut MatMut<'_, Scalar>, idx: usize) -> Result<()> {
    blas().scal_col(alpha, x, idx)
}

/// Scale row `idx` of every slice.
pub fn scal_row(alpha: Scalar, x: &mut MatMut<'_, Scalar>, idx: usize) -> Result<()> {
    blas().scal_row(alpha, x, idx)
}

/// Scale complex column `idx` by a real scalar.
pub fn csscal_col(alpha: Scalar, x: &mut CMatMut<'_, Scalar>, idx: usize) -> Result<()> {
    blas().csscal_col(alpha, x, idx)
}

/// Scale complex row `idx` by a real scalar.
pub fn csscal_row(alpha: Scalar, x: &mut CMatMut<'_, Scalar>, idx: usize) -> Result<()> {
    blas().csscal_row(alpha, x, idx)
}

/// Multiply complex column `idx` by a complex scalar.
pub fn cscal_col(alpha: CScalar, x: &mut CMatMut<'_, Scalar>, idx: usize) -> Result<()> {
    blas().cscal_col(alpha, x, idx)
}

/// Multiply complex row `idx` by a complex scalar.
pub fn cscal_row(alpha: CScalar, x: &mut CMatMut<'_, Scalar>, idx: usize) -> Result<()> {
    blas().cscal_row(alpha, x, idx)
}

/// Add `alpha` to column `idx` of every slice.
pub fn add_col(alpha: Scalar, x: &mut MatMut<'_, Scalar>, idx: usize) -> Result<()> {
    blas().add_col(alpha, x, idx)
}

/// Add `alpha` to row `idx` of every slice.
pub fn add_row(alpha: Scalar, x: &mut MatMut<'_, Scalar>, idx: usize) -> Result<()> {
    blas().add_row(alpha, x, idx)
}

/// Add a complex scalar to column `idx`.
pub fn cadd_col(alpha: CScalar, x: &mut CMatMut<'_, Scalar>, idx: usize) -> Result<()> {
    blas().cadd_col(alpha, x, idx)
}

/// Add a complex scalar to row `idx`.
pub fn cadd_row(alpha: CScalar, x: &mut CMatMut<'_, Scalar>, idx: usize) -> Result<()> {
    blas().cadd_row(alpha, x, idx)
}

/// Add a real scalar to the real parts of column `idx`.
pub fn cadd_real_col(alpha: Scalar, x: &mut CMatMut<'_, Scalar>, idx: usize) -> Result<()> {
    blas().cadd_real_col(alpha, x, idx)
}

/// Add a real scalar to the real parts of row `idx`.
pub fn cadd_real_row(alpha: Scalar, x: &mut CMatMut<'_, Scalar>, idx: usize) -> Result<()> {
    blas().cadd_real_row(alpha, x, idx)
}

/// Exchange column `idx` of `x` and `y`.
pub fn swap_col(x: &mut MatMut<'_, Scalar>, y: &mut MatMut<'_, Scalar>, idx: usize) -> Result<()> {
    blas().swap_col(x, y, idx)
}

/// Exchange row `idx` of `x` and `y`.
pub fn swap_row(x: &mut MatMut<'_, Scalar>, y: &mut MatMut<'_, Scalar>, idx: usize) -> Result<()> {
    blas().swap_row(x, y, idx)
}

/// Exchange complex column `idx` of `x` and `y`.
pub fn cswap_col(
    x: &mut CMatMut<'_, Scalar>,
    y: &mut CMatMut<'_, Scalar>,
    idx: usize,
) -> Result<()> {
    blas().cswap_col(x, y, idx)
}

/// Exchange complex row `idx` of `x` and `y`.
pub fn cswap_row(
    x: &mut CMatMut<'_, Scalar>,
    y: &mut CMatMut<'_, Scalar>,
    idx: usize,
) -> Result<()> {
    blas().cswap_row(x, y, idx)
}

/// `|re| + |im|`.
pub fn cabs1(z: Complex<Scalar>) -> Scalar {
    Element::cabs1(z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlasError;

    #[test]
    fn test_asum_and_nrm2() {
        let a: [Scalar; 3] = [-3.0, 4.0, -5.0];
        let x = Mat::new((3, 1, 1), &a).unwrap();
        assert_eq!(asum(&x).unwrap(), 12.0);

        let b: [Scalar; 2] = [3.0, 4.0];
        let x = Mat::new((2, 1, 1), &b).unwrap();
        assert_eq!(nrm2(&x).unwrap(), 5.0);
    }

    #[test]
    fn test_amax_first_occurrence() {
        let a: [Scalar; 4] = [1.0, -9.0, 5.0, 2.0];
        let x = Mat::new((4, 1, 1), &a).unwrap();
        assert_eq!(amax(&x).unwrap(), 1);
        assert_eq!(amin(&x).unwrap(), 0);

        let tie: [Scalar; 3] = [2.0, -2.0, 1.0];
        let x = Mat::new((3, 1, 1), &tie).unwrap();
        assert_eq!(amax(&x).unwrap(), 0);
    }

    #[test]
    fn test_complex_helpers() {
        let z = CScalar::new(3.0, -4.0);
        assert_eq!(cabs1(z), 7.0);

        let data = [z];
        let x = CMat::new((1, 1, 1), &data).unwrap();
        assert_eq!(casum(&x).unwrap(), 7.0);
        assert_eq!(cnrm2(&x).unwrap(), 7.0);
    }

    #[test]
    fn test_strided_complex_pairs() {
        // x at stride 2: (1, 1), (0, 2); y dense: (2, 0), (1, 1)
        let xs = [
            CScalar::new(1.0, 1.0),
            CScalar::new(9.0, 9.0),
            CScalar::new(0.0, 2.0),
        ];
        let ys = [CScalar::new(2.0, 0.0), CScalar::new(1.0, 1.0)];
        let x = CMat::new((3, 1, 1), &xs).unwrap();
        let y = CMat::new((2, 1, 1), &ys).unwrap();
        // (1+i)*2 + 2i*(1+i) = (2+2i) + (-2+2i) = 4i
        assert_eq!(udot_inc(&x, 2, &y, 1).unwrap(), CScalar::new(0.0, 4.0));
        // (1-i)*2 + (-2i)*(1+i) = (2-2i) + (2-2i) = 4-4i
        assert_eq!(dotc_inc(&x, 2, &y, 1).unwrap(), CScalar::new(4.0, -4.0));

        let r: [Scalar; 2] = [3.0, 1.0];
        let r = Mat::new((2, 1, 1), &r).unwrap();
        assert_eq!(cdot_inc(&x, 2, &r, 1).unwrap(), CScalar::new(3.0, 5.0));

        let mut a = xs;
        let mut b = ys;
        {
            let mut ta = CMatMut::new((3, 1, 1), &mut a).unwrap();
            let mut tb = CMatMut::new((2, 1, 1), &mut b).unwrap();
            cswap_inc(&mut ta, 2, &mut tb, 1).unwrap();
        }
        assert_eq!(a, [ys[0], xs[1], ys[1]]);
        assert_eq!(b, [xs[0], xs[2]]);

        {
            let mut ta = CMatMut::new((3, 1, 1), &mut a).unwrap();
            let mut tb = CMatMut::new((2, 1, 1), &mut b).unwrap();
            // c = 0, s = 1 exchanges the pairs again
            crot_inc(&mut ta, 2, &mut tb, 1, 0.0, 1.0).unwrap();
        }
        assert_eq!(a, xs);
        assert_eq!(b, ys);
    }

    #[test]
    fn test_zero_size_rejected() {
        let empty: [Scalar; 0] = [];
        let x = Mat::new((0, 4, 1), &empty).unwrap();
        assert!(matches!(asum(&x), Err(BlasError::InvalidDimension(_))));

        let mut out: [Scalar; 0] = [];
        let mut y = MatMut::new((0, 4, 1), &mut out).unwrap();
        assert!(matches!(copy(&x, &mut y), Err(BlasError::InvalidDimension(_))));
    }
}
