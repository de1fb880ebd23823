//! OpenBLAS backend.
//!
//! Enable with the `openblas` feature:
//! ```toml
//! [dependencies]
//! strided-blas = { version = "0.1", features = ["openblas"] }
//! ```
//!
//! Only the routines whose CBLAS contract is identical to the documented
//! formulas go through CBLAS:
//!
//! | Real | Complex |
//! |------|---------|
//! | axpy, copy, swap, scal, dot, asum, nrm2, iamax | copy, swap, scal, csscal, dotc, dotu, casum, icamax |
//!
//! Everything else (component-wise complex axpy, the symmetric rotation,
//! rotation-parameter generation, the cabs1-based complex norm, add, amin
//! and the complex-by-real dot) has no CBLAS equivalent and runs on the
//! wrapped [`Builtin`] engine.

use std::os::raw::c_void;

use super::{Builtin, Level1};
use crate::core::{check_vector, EngineConfig};
use crate::error::{BlasError, Result};
use crate::types::{Complex, Real};

// ============================================================
// CBLAS FFI Declarations
// ============================================================

#[link(name = "openblas")]
extern "C" {
    fn cblas_saxpy(n: i32, alpha: f32, x: *const f32, incx: i32, y: *mut f32, incy: i32);
    fn cblas_scopy(n: i32, x: *const f32, incx: i32, y: *mut f32, incy: i32);
    fn cblas_sswap(n: i32, x: *mut f32, incx: i32, y: *mut f32, incy: i32);
    fn cblas_sscal(n: i32, alpha: f32, x: *mut f32, incx: i32);
    fn cblas_sdot(n: i32, x: *const f32, incx: i32, y: *const f32, incy: i32) -> f32;
    fn cblas_sasum(n: i32, x: *const f32, incx: i32) -> f32;
    fn cblas_snrm2(n: i32, x: *const f32, incx: i32) -> f32;
    fn cblas_isamax(n: i32, x: *const f32, incx: i32) -> usize;

    fn cblas_daxpy(n: i32, alpha: f64, x: *const f64, incx: i32, y: *mut f64, incy: i32);
    fn cblas_dcopy(n: i32, x: *const f64, incx: i32, y: *mut f64, incy: i32);
    fn cblas_dswap(n: i32, x: *mut f64, incx: i32, y: *mut f64, incy: i32);
    fn cblas_dscal(n: i32, alpha: f64, x: *mut f64, incx: i32);
    fn cblas_ddot(n: i32, x: *const f64, incx: i32, y: *const f64, incy: i32) -> f64;
    fn cblas_dasum(n: i32, x: *const f64, incx: i32) -> f64;
    fn cblas_dnrm2(n: i32, x: *const f64, incx: i32) -> f64;
    fn cblas_idamax(n: i32, x: *const f64, incx: i32) -> usize;

    fn cblas_ccopy(n: i32, x: *const c_void, incx: i32, y: *mut c_void, incy: i32);
    fn cblas_cswap(n: i32, x: *mut c_void, incx: i32, y: *mut c_void, incy: i32);
    fn cblas_cscal(n: i32, alpha: *const c_void, x: *mut c_void, incx: i32);
    fn cblas_csscal(n: i32, alpha: f32, x: *mut c_void, incx: i32);
    fn cblas_cdotc_sub(
        n: i32,
        x: *const c_void,
        incx: i32,
        y: *const c_void,
        incy: i32,
        ret: *mut c_void,
    );
    fn cblas_cdotu_sub(
        n: i32,
        x: *const c_void,
        incx: i32,
        y: *const c_void,
        incy: i32,
        ret: *mut c_void,
    );
    fn cblas_scasum(n: i32, x: *const c_void, incx: i32) -> f32;
    fn cblas_icamax(n: i32, x: *const c_void, incx: i32) -> usize;

    fn cblas_zcopy(n: i32, x: *const c_void, incx: i32, y: *mut c_void, incy: i32);
    fn cblas_zswap(n: i32, x: *mut c_void, incx: i32, y: *mut c_void, incy: i32);
    fn cblas_zscal(n: i32, alpha: *const c_void, x: *mut c_void, incx: i32);
    fn cblas_zdscal(n: i32, alpha: f64, x: *mut c_void, incx: i32);
    fn cblas_zdotc_sub(
        n: i32,
        x: *const c_void,
        incx: i32,
        y: *const c_void,
        incy: i32,
        ret: *mut c_void,
    );
    fn cblas_zdotu_sub(
        n: i32,
        x: *const c_void,
        incx: i32,
        y: *const c_void,
        incy: i32,
        ret: *mut c_void,
    );
    fn cblas_dzasum(n: i32, x: *const c_void, incx: i32) -> f64;
    fn cblas_izamax(n: i32, x: *const c_void, incx: i32) -> usize;
}

// ============================================================
// Per-precision routine table
// ============================================================

/// Real types with a CBLAS routine family (`s`/`c` for `f32`, `d`/`z` for `f64`).
///
/// # Safety
///
/// Implementors forward raw pointers to CBLAS. Callers must have validated
/// every `(pointer, n, inc)` triple with [`check_vector`] first.
#[allow(clippy::missing_safety_doc, missing_docs)]
pub unsafe trait CblasReal: Real {
    unsafe fn axpy(n: i32, alpha: Self, x: *const Self, incx: i32, y: *mut Self, incy: i32);
    unsafe fn copy(n: i32, x: *const Self, incx: i32, y: *mut Self, incy: i32);
    unsafe fn swap(n: i32, x: *mut Self, incx: i32, y: *mut Self, incy: i32);
    unsafe fn scal(n: i32, alpha: Self, x: *mut Self, incx: i32);
    unsafe fn dot(n: i32, x: *const Self, incx: i32, y: *const Self, incy: i32) -> Self;
    unsafe fn asum(n: i32, x: *const Self, incx: i32) -> Self;
    unsafe fn nrm2(n: i32, x: *const Self, incx: i32) -> Self;
    unsafe fn iamax(n: i32, x: *const Self, incx: i32) -> usize;

    unsafe fn ccopy(n: i32, x: *const c_void, incx: i32, y: *mut c_void, incy: i32);
    unsafe fn cswap(n: i32, x: *mut c_void, incx: i32, y: *mut c_void, incy: i32);
    unsafe fn cscal(n: i32, alpha: *const c_void, x: *mut c_void, incx: i32);
    unsafe fn csscal(n: i32, alpha: Self, x: *mut c_void, incx: i32);
    unsafe fn dotc_sub(
        n: i32,
        x: *const c_void,
        incx: i32,
        y: *const c_void,
        incy: i32,
        ret: *mut c_void,
    );
    unsafe fn dotu_sub(
        n: i32,
        x: *const c_void,
        incx: i32,
        y: *const c_void,
        incy: i32,
        ret: *mut c_void,
    );
    unsafe fn casum(n: i32, x: *const c_void, incx: i32) -> Self;
    unsafe fn icamax(n: i32, x: *const c_void, incx: i32) -> usize;
}

macro_rules! impl_cblas_real {
    (
        $t:ty,
        $axpy:ident, $copy:ident, $swap:ident, $scal:ident, $dot:ident,
        $asum:ident, $nrm2:ident, $iamax:ident,
        $ccopy:ident, $cswap:ident, $cscal:ident, $csscal:ident,
        $dotc:ident, $dotu:ident, $casum:ident, $icamax:ident
    ) => {
        unsafe impl CblasReal for $t {
            unsafe fn axpy(n: i32, alpha: $t, x: *const $t, incx: i32, y: *mut $t, incy: i32) {
                $axpy(n, alpha, x, incx, y, incy)
            }
            unsafe fn copy(n: i32, x: *const $t, incx: i32, y: *mut $t, incy: i32) {
                $copy(n, x, incx, y, incy)
            }
            unsafe fn swap(n: i32, x: *mut $t, incx: i32, y: *mut $t, incy: i32) {
                $swap(n, x, incx, y, incy)
            }
            unsafe fn scal(n: i32, alpha: $t, x: *mut $t, incx: i32) {
                $scal(n, alpha, x, incx)
            }
            unsafe fn dot(n: i32, x: *const $t, incx: i32, y: *const $t, incy: i32) -> $t {
                $dot(n, x, incx, y, incy)
            }
            unsafe fn asum(n: i32, x: *const $t, incx: i32) -> $t {
                $asum(n, x, incx)
            }
            unsafe fn nrm2(n: i32, x: *const $t, incx: i32) -> $t {
                $nrm2(n, x, incx)
            }
            unsafe fn iamax(n: i32, x: *const $t, incx: i32) -> usize {
                $iamax(n, x, incx)
            }
            unsafe fn ccopy(n: i32, x: *const c_void, incx: i32, y: *mut c_void, incy: i32) {
                $ccopy(n, x, incx, y, incy)
            }
            unsafe fn cswap(n: i32, x: *mut c_void, incx: i32, y: *mut c_void, incy: i32) {
                $cswap(n, x, incx, y, incy)
            }
            unsafe fn cscal(n: i32, alpha: *const c_void, x: *mut c_void, incx: i32) {
                $cscal(n, alpha, x, incx)
            }
            unsafe fn csscal(n: i32, alpha: $t, x: *mut c_void, incx: i32) {
                $csscal(n, alpha, x, incx)
            }
            unsafe fn dotc_sub(
                n: i32,
                x: *const c_void,
                incx: i32,
                y: *const c_void,
                incy: i32,
                ret: *mut c_void,
            ) {
                $dotc(n, x, incx, y, incy, ret)
            }
            unsafe fn dotu_sub(
                n: i32,
                x: *const c_void,
                incx: i32,
                y: *const c_void,
                incy: i32,
                ret: *mut c_void,
            ) {
                $dotu(n, x, incx, y, incy, ret)
            }
            unsafe fn casum(n: i32, x: *const c_void, incx: i32) -> $t {
                $casum(n, x, incx)
            }
            unsafe fn icamax(n: i32, x: *const c_void, incx: i32) -> usize {
                $icamax(n, x, incx)
            }
        }
    };
}

impl_cblas_real!(
    f32, cblas_saxpy, cblas_scopy, cblas_sswap, cblas_sscal, cblas_sdot, cblas_sasum, cblas_snrm2,
    cblas_isamax, cblas_ccopy, cblas_cswap, cblas_cscal, cblas_csscal, cblas_cdotc_sub,
    cblas_cdotu_sub, cblas_scasum, cblas_icamax
);

impl_cblas_real!(
    f64, cblas_daxpy, cblas_dcopy, cblas_dswap, cblas_dscal, cblas_ddot, cblas_dasum, cblas_dnrm2,
    cblas_idamax, cblas_zcopy, cblas_zswap, cblas_zscal, cblas_zdscal, cblas_zdotc_sub,
    cblas_zdotu_sub, cblas_dzasum, cblas_izamax
);

// ============================================================
// Helper Conversions
// ============================================================

fn to_blas_int(op: &'static str, what: &str, v: usize) -> Result<i32> {
    i32::try_from(v).map_err(|_| {
        BlasError::InvalidDimension(format!("{}: {} = {} exceeds the CBLAS integer range", op, what, v))
    })
}

/// Validate one operand and convert `(n, inc)` to CBLAS integers.
fn blas_args(op: &'static str, name: &str, n: usize, len: usize, inc: usize) -> Result<(i32, i32)> {
    check_vector(op, name, n, len, inc)?;
    Ok((to_blas_int(op, "n", n)?, to_blas_int(op, "inc", inc)?))
}

// ============================================================
// OpenBLAS Provider
// ============================================================

/// OpenBLAS-backed Level-1 provider.
///
/// Routines without a matching CBLAS contract run on the wrapped
/// [`Builtin`] engine, so results agree with the default build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenBlas {
    fallback: Builtin,
}

impl OpenBlas {
    /// Create a provider whose fallback engine uses `config`.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            fallback: Builtin::new(config),
        }
    }

    /// Engine used for routines CBLAS does not cover.
    pub fn fallback(&self) -> &Builtin {
        &self.fallback
    }
}

impl<T: CblasReal> Level1<T> for OpenBlas {
    fn name(&self) -> &'static str {
        "openblas"
    }

    fn axpy(&self, n: usize, alpha: T, x: &[T], incx: usize, y: &mut [T], incy: usize) -> Result<()> {
        let (bn, bx) = blas_args("axpy", "x", n, x.len(), incx)?;
        let (_, by) = blas_args("axpy", "y", n, y.len(), incy)?;
        unsafe { T::axpy(bn, alpha, x.as_ptr(), bx, y.as_mut_ptr(), by) };
        Ok(())
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
        self.fallback.caxpy(n, alpha, x, incx, y, incy)
    }

    fn copy(&self, n: usize, x: &[T], incx: usize, y: &mut [T], incy: usize) -> Result<()> {
        let (bn, bx) = blas_args("copy", "x", n, x.len(), incx)?;
        let (_, by) = blas_args("copy", "y", n, y.len(), incy)?;
        unsafe { T::copy(bn, x.as_ptr(), bx, y.as_mut_ptr(), by) };
        Ok(())
    }

    fn ccopy(
        &self,
        n: usize,
        x: &[Complex<T>],
        incx: usize,
        y: &mut [Complex<T>],
        incy: usize,
    ) -> Result<()> {
        let (bn, bx) = blas_args("copy", "x", n, x.len(), incx)?;
        let (_, by) = blas_args("copy", "y", n, y.len(), incy)?;
        unsafe { T::ccopy(bn, x.as_ptr().cast(), bx, y.as_mut_ptr().cast(), by) };
        Ok(())
    }

    fn swap(&self, n: usize, x: &mut [T], incx: usize, y: &mut [T], incy: usize) -> Result<()> {
        let (bn, bx) = blas_args("swap", "x", n, x.len(), incx)?;
        let (_, by) = blas_args("swap", "y", n, y.len(), incy)?;
        unsafe { T::swap(bn, x.as_mut_ptr(), bx, y.as_mut_ptr(), by) };
        Ok(())
    }

    fn cswap(
        &self,
        n: usize,
        x: &mut [Complex<T>],
        incx: usize,
        y: &mut [Complex<T>],
        incy: usize,
    ) -> Result<()> {
        let (bn, bx) = blas_args("swap", "x", n, x.len(), incx)?;
        let (_, by) = blas_args("swap", "y", n, y.len(), incy)?;
        unsafe { T::cswap(bn, x.as_mut_ptr().cast(), bx, y.as_mut_ptr().cast(), by) };
        Ok(())
    }

    fn scal(&self, n: usize, alpha: T, x: &mut [T], incx: usize) -> Result<()> {
        let (bn, bx) = blas_args("scal", "x", n, x.len(), incx)?;
        unsafe { T::scal(bn, alpha, x.as_mut_ptr(), bx) };
        Ok(())
    }

    fn csscal(&self, n: usize, alpha: T, x: &mut [Complex<T>], incx: usize) -> Result<()> {
        let (bn, bx) = blas_args("scal", "x", n, x.len(), incx)?;
        unsafe { T::csscal(bn, alpha, x.as_mut_ptr().cast(), bx) };
        Ok(())
    }

    fn cscal(&self, n: usize, alpha: Complex<T>, x: &mut [Complex<T>], incx: usize) -> Result<()> {
        let (bn, bx) = blas_args("cscal", "x", n, x.len(), incx)?;
        let alpha_ptr: *const Complex<T> = &alpha;
        unsafe { T::cscal(bn, alpha_ptr.cast(), x.as_mut_ptr().cast(), bx) };
        Ok(())
    }

    fn add(&self, n: usize, alpha: T, x: &mut [T], incx: usize) -> Result<()> {
        self.fallback.add(n, alpha, x, incx)
    }

    fn cadd(&self, n: usize, alpha: Complex<T>, x: &mut [Complex<T>], incx: usize) -> Result<()> {
        self.fallback.cadd(n, alpha, x, incx)
    }

    fn cadd_re(&self, n: usize, alpha: T, x: &mut [Complex<T>], incx: usize) -> Result<()> {
        self.fallback.cadd_re(n, alpha, x, incx)
    }

    fn dot(&self, n: usize, x: &[T], incx: usize, y: &[T], incy: usize) -> Result<T> {
        let (bn, bx) = blas_args("dot", "x", n, x.len(), incx)?;
        let (_, by) = blas_args("dot", "y", n, y.len(), incy)?;
        Ok(unsafe { T::dot(bn, x.as_ptr(), bx, y.as_ptr(), by) })
    }

    fn cdot(
        &self,
        n: usize,
        x: &[Complex<T>],
        incx: usize,
        y: &[T],
        incy: usize,
    ) -> Result<Complex<T>> {
        self.fallback.cdot(n, x, incx, y, incy)
    }

    fn dotc(
        &self,
        n: usize,
        x: &[Complex<T>],
        incx: usize,
        y: &[Complex<T>],
        incy: usize,
    ) -> Result<Complex<T>> {
        let (bn, bx) = blas_args("dotc", "x", n, x.len(), incx)?;
        let (_, by) = blas_args("dotc", "y", n, y.len(), incy)?;
        let mut ret = Complex::<T>::ZERO;
        let ret_ptr: *mut Complex<T> = &mut ret;
        unsafe { T::dotc_sub(bn, x.as_ptr().cast(), bx, y.as_ptr().cast(), by, ret_ptr.cast()) };
        Ok(ret)
    }

    fn dotu(
        &self,
        n: usize,
        x: &[Complex<T>],
        incx: usize,
        y: &[Complex<T>],
        incy: usize,
    ) -> Result<Complex<T>> {
        let (bn, bx) = blas_args("dotu", "x", n, x.len(), incx)?;
        let (_, by) = blas_args("dotu", "y", n, y.len(), incy)?;
        let mut ret = Complex::<T>::ZERO;
        let ret_ptr: *mut Complex<T> = &mut ret;
        unsafe { T::dotu_sub(bn, x.as_ptr().cast(), bx, y.as_ptr().cast(), by, ret_ptr.cast()) };
        Ok(ret)
    }

    fn asum(&self, n: usize, x: &[T], incx: usize) -> Result<T> {
        let (bn, bx) = blas_args("asum", "x", n, x.len(), incx)?;
        Ok(unsafe { T::asum(bn, x.as_ptr(), bx) })
    }

    fn casum(&self, n: usize, x: &[Complex<T>], incx: usize) -> Result<T> {
        let (bn, bx) = blas_args("asum", "x", n, x.len(), incx)?;
        Ok(unsafe { T::casum(bn, x.as_ptr().cast(), bx) })
    }

    fn nrm2(&self, n: usize, x: &[T], incx: usize) -> Result<T> {
        let (bn, bx) = blas_args("nrm2", "x", n, x.len(), incx)?;
        Ok(unsafe { T::nrm2(bn, x.as_ptr(), bx) })
    }

    fn cnrm2(&self, n: usize, x: &[Complex<T>], incx: usize) -> Result<T> {
        self.fallback.cnrm2(n, x, incx)
    }

    fn iamax(&self, n: usize, x: &[T], incx: usize) -> Result<usize> {
        let (bn, bx) = blas_args("amax", "x", n, x.len(), incx)?;
        Ok(unsafe { T::iamax(bn, x.as_ptr(), bx) })
    }

    fn icamax(&self, n: usize, x: &[Complex<T>], incx: usize) -> Result<usize> {
        let (bn, bx) = blas_args("amax", "x", n, x.len(), incx)?;
        Ok(unsafe { T::icamax(bn, x.as_ptr().cast(), bx) })
    }

    fn iamin(&self, n: usize, x: &[T], incx: usize) -> Result<usize> {
        self.fallback.iamin(n, x, incx)
    }

    fn icamin(&self, n: usize, x: &[Complex<T>], incx: usize) -> Result<usize> {
        self.fallback.icamin(n, x, incx)
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
        self.fallback.rot(n, x, incx, y, incy, c, s)
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
        self.fallback.crot(n, x, incx, y, incy, c, s)
    }

    fn rotg(&self, a: &mut T, b: &mut T, c: T, s: T) -> Result<()> {
        self.fallback.rotg(a, b, c, s)
    }

    fn crotg(&self, a: &mut Complex<T>, b: &mut Complex<T>, c: T, s: Complex<T>) -> Result<()> {
        self.fallback.crotg(a, b, c, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blas_int_conversion() {
        assert_eq!(to_blas_int("t", "n", 7).unwrap(), 7);
        assert!(to_blas_int("t", "n", usize::MAX).is_err());
    }

    #[test]
    fn test_openblas_matches_builtin() {
        let blas = OpenBlas::default();
        let builtin = Builtin::default();
        let x = [1.0f64, -9.0, 5.0, 2.0];
        let y = [0.5f64, 0.25, -1.0, 4.0];
        assert_eq!(blas.iamax(4, &x, 1).unwrap(), builtin.iamax(4, &x, 1).unwrap());
        assert_eq!(blas.asum(4, &x, 1).unwrap(), builtin.asum(4, &x, 1).unwrap());
        assert!((blas.dot(4, &x, 1, &y, 1).unwrap() - builtin.dot(4, &x, 1, &y, 1).unwrap()).abs() < 1e-12);

        let z = [Complex::new(1.0f64, 2.0), Complex::new(3.0, -1.0)];
        let w = [Complex::new(2.0f64, 1.0), Complex::new(0.0, 1.0)];
        assert_eq!(blas.dotc(2, &z, 1, &w, 1).unwrap(), Complex::new(3.0, 0.0));
        assert_eq!(blas.dotu(2, &z, 1, &w, 1).unwrap(), Complex::new(1.0, 8.0));
    }
}
