//! Tensor broadcast dispatcher.
//!
//! [`Dispatcher`] turns tensor-level calls into strided-vector calls on a
//! [`Level1`] backend. All shape checks run before the first kernel call.
//!
//! # Decomposition
//!
//! ```text
//!            x: d0 x d1 x 1                 y: d0 x d1 x k
//!          ┌─────────┐                ┌─────────┬─────────┬─────┐
//!          │ slice 0 │  ──kernel──▶   │ slice 0 │ slice 1 │ ... │
//!          └─────────┘  ──kernel──▶   └─────────┴─────────┴─────┘
//!                       (k calls, len d0*d1, stride 1)
//!
//!            x: d0 x d1 x k                 y: d0 x d1 x k
//!          one call over the flattened buffers (len d0*d1*k, stride 1)
//! ```
//!
//! | Operation | Broadcast result |
//! |-----------|------------------|
//! | axpy, copy | `x` applied to every slice of `y` |
//! | swap, rot | slice by slice in order, `x` takes part in every call |
//! | dot, cdot, dotc, udot | sum of the per-slice results |
//!
//! Column and row operations (see [`Lane`]) address one lane per slice:
//!
//! ```text
//! column idx of slice i: base = d0*idx + i*d0*d1, len d0, stride 1
//! row    idx of slice i: base = idx + i*d0*d1,    len d1, stride d0
//! ```
//!
//! # Example
//!
//! ```
//! use strided_blas::backend::Builtin;
//! use strided_blas::types::{Mat, MatMut};
//! use strided_blas::Dispatcher;
//!
//! let blas: Dispatcher<f64, Builtin> = Dispatcher::default();
//!
//! let x_data = [1.0, 2.0];
//! let mut y_data = [0.0; 6];
//! let x = Mat::new((2, 1, 1), &x_data).unwrap();
//! let mut y = MatMut::new((2, 1, 3), &mut y_data).unwrap();
//!
//! blas.axpy(10.0, &x, &mut y).unwrap();
//! assert_eq!(y_data, [10.0, 20.0, 10.0, 20.0, 10.0, 20.0]);
//! ```

mod broadcast;
mod index;

pub use broadcast::SlicePlan;
pub use index::Lane;

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::backend::Level1;
use crate::error::{BlasError, Result};
use crate::gate::SelectedBackend;
use crate::observe::{DispatchEvent, Observer};
use crate::types::{CMat, CMatMut, Complex, Element, Mat, MatMut, Real, Shape};

/// Tensor-level front end over a [`Level1`] backend for precision `T`.
pub struct Dispatcher<T, B = SelectedBackend> {
    backend: B,
    observer: Option<Arc<dyn Observer>>,
    _precision: PhantomData<fn() -> T>,
}

impl<T, B> Dispatcher<T, B> {
    /// Dispatcher over `backend` with no observer.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            observer: None,
            _precision: PhantomData,
        }
    }

    /// Attach an observer that receives an event per call.
    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The backend running the kernels.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<T, B: Default> Default for Dispatcher<T, B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<T, B: Clone> Clone for Dispatcher<T, B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            observer: self.observer.clone(),
            _precision: PhantomData,
        }
    }
}

impl<T, B: fmt::Debug> fmt::Debug for Dispatcher<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("backend", &self.backend)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

/// Element count of a non-empty tensor.
fn require_nonempty(op: &'static str, shape: Shape) -> Result<usize> {
    if shape.is_empty() {
        return Err(BlasError::InvalidDimension(format!(
            "{}: empty tensor ({})",
            op, shape
        )));
    }
    Ok(shape.len())
}

/// Number of elements read when walking the flattened tensor at stride `inc`.
fn strided_count(op: &'static str, shape: Shape, inc: usize) -> Result<usize> {
    let len = require_nonempty(op, shape)?;
    if inc == 0 {
        return Err(BlasError::InvalidDimension(format!(
            "{}: stride must be positive",
            op
        )));
    }
    Ok((len - 1) / inc + 1)
}

impl<T: Real, B: Level1<T>> Dispatcher<T, B> {
    /// Forward the outcome of `op` to the observer and strip the counters.
    fn report<R>(&self, op: &'static str, result: Result<(R, usize, usize)>) -> Result<R> {
        match result {
            Ok((value, elements, kernel_calls)) => {
                if let Some(obs) = &self.observer {
                    obs.on_dispatch(&DispatchEvent {
                        op,
                        backend: self.backend.name(),
                        elements,
                        kernel_calls,
                    });
                }
                Ok(value)
            }
            Err(err) => {
                if let Some(obs) = &self.observer {
                    obs.on_error(op, &err);
                }
                Err(err)
            }
        }
    }

    /// Run `f(x_offset, y_offset, len)` for every kernel call of a two-operand op.
    fn for_slices<F>(&self, op: &'static str, x: Shape, y: Shape, mut f: F) -> Result<()>
    where
        F: FnMut(usize, usize, usize) -> Result<()>,
    {
        let result = SlicePlan::resolve(op, x, y).and_then(|plan| {
            for (xo, yo, len) in plan.calls() {
                f(xo, yo, len)?;
            }
            Ok(((), plan.elements(), plan.kernel_calls()))
        });
        self.report(op, result)
    }

    /// Run `f(n)` once over a whole flattened tensor.
    fn for_whole<R, F>(&self, op: &'static str, shape: Shape, f: F) -> Result<R>
    where
        F: FnOnce(usize) -> Result<R>,
    {
        let result = require_nonempty(op, shape).and_then(|n| f(n).map(|r| (r, n, 1)));
        self.report(op, result)
    }

    /// Run `f(n)` once over every `inc`-th element of a flattened tensor.
    fn for_strided<R, F>(&self, op: &'static str, shape: Shape, inc: usize, f: F) -> Result<R>
    where
        F: FnOnce(usize) -> Result<R>,
    {
        let result = strided_count(op, shape, inc).and_then(|n| f(n).map(|r| (r, n, 1)));
        self.report(op, result)
    }

    /// Run `f(n)` once over every `incx`-th element of `x` paired with every
    /// `incy`-th element of `y`. Both walks must visit the same count.
    fn for_strided_pair<R, F>(
        &self,
        op: &'static str,
        (x, incx): (Shape, usize),
        (y, incy): (Shape, usize),
        f: F,
    ) -> Result<R>
    where
        F: FnOnce(usize) -> Result<R>,
    {
        let result = strided_count(op, x, incx)
            .and_then(|nx| strided_count(op, y, incy).map(|ny| (nx, ny)))
            .and_then(|(nx, ny)| {
                if nx != ny {
                    return Err(BlasError::DimensionMismatch(format!(
                        "{}: x ({}) at stride {} gives {} elements, y ({}) at stride {} gives {}",
                        op, x, incx, nx, y, incy, ny
                    )));
                }
                f(nx).map(|r| (r, nx, 1))
            });
        self.report(op, result)
    }

    // ========================================================================
    // Two-operand operations
    // ========================================================================

    /// `y = alpha*x + y`, broadcasting a single-slice `x` over `y`.
    pub fn axpy(&self, alpha: T, x: &Mat<'_, T>, y: &mut MatMut<'_, T>) -> Result<()> {
        let (xs, ys) = (x.shape(), y.shape());
        let xd = x.data();
        let yd = y.data_mut();
        self.for_slices("axpy", xs, ys, |xo, yo, n| {
            self.backend
                .axpy(n, alpha, &xd[xo..xo + n], 1, &mut yd[yo..yo + n], 1)
        })
    }

    /// Component-wise complex axpy.
    pub fn caxpy(&self, alpha: Complex<T>, x: &CMat<'_, T>, y: &mut CMatMut<'_, T>) -> Result<()> {
        let (xs, ys) = (x.shape(), y.shape());
        let xd = x.data();
        let yd = y.data_mut();
        self.for_slices("caxpy", xs, ys, |xo, yo, n| {
            self.backend
                .caxpy(n, alpha, &xd[xo..xo + n], 1, &mut yd[yo..yo + n], 1)
        })
    }

    /// `y = x`, replicating a single-slice `x` into every slice of `y`.
    pub fn copy(&self, x: &Mat<'_, T>, y: &mut MatMut<'_, T>) -> Result<()> {
        let (xs, ys) = (x.shape(), y.shape());
        let xd = x.data();
        let yd = y.data_mut();
        self.for_slices("copy", xs, ys, |xo, yo, n| {
            self.backend
                .copy(n, &xd[xo..xo + n], 1, &mut yd[yo..yo + n], 1)
        })
    }

    /// Complex copy.
    pub fn ccopy(&self, x: &CMat<'_, T>, y: &mut CMatMut<'_, T>) -> Result<()> {
        let (xs, ys) = (x.shape(), y.shape());
        let xd = x.data();
        let yd = y.data_mut();
        self.for_slices("ccopy", xs, ys, |xo, yo, n| {
            self.backend
                .ccopy(n, &xd[xo..xo + n], 1, &mut yd[yo..yo + n], 1)
        })
    }

    /// Exchange `x` and `y`. Under broadcast the swaps run slice by slice.
    pub fn swap(&self, x: &mut MatMut<'_, T>, y: &mut MatMut<'_, T>) -> Result<()> {
        let (xs, ys) = (x.shape(), y.shape());
        let xd = x.data_mut();
        let yd = y.data_mut();
        self.for_slices("swap", xs, ys, |xo, yo, n| {
            self.backend
                .swap(n, &mut xd[xo..xo + n], 1, &mut yd[yo..yo + n], 1)
        })
    }

    /// Complex swap.
    pub fn cswap(&self, x: &mut CMatMut<'_, T>, y: &mut CMatMut<'_, T>) -> Result<()> {
        let (xs, ys) = (x.shape(), y.shape());
        let xd = x.data_mut();
        let yd = y.data_mut();
        self.for_slices("cswap", xs, ys, |xo, yo, n| {
            self.backend
                .cswap(n, &mut xd[xo..xo + n], 1, &mut yd[yo..yo + n], 1)
        })
    }

    /// Symmetric plane rotation `x, y <- c*x + s*y, c*y + s*x`.
    pub fn rot(&self, x: &mut MatMut<'_, T>, y: &mut MatMut<'_, T>, c: T, s: T) -> Result<()> {
        let (xs, ys) = (x.shape(), y.shape());
        let xd = x.data_mut();
        let yd = y.data_mut();
        self.for_slices("rot", xs, ys, |xo, yo, n| {
            self.backend
                .rot(n, &mut xd[xo..xo + n], 1, &mut yd[yo..yo + n], 1, c, s)
        })
    }

    /// Component-wise complex rotation with real `c`, `s`.
    pub fn crot(&self, x: &mut CMatMut<'_, T>, y: &mut CMatMut<'_, T>, c: T, s: T) -> Result<()> {
        let (xs, ys) = (x.shape(), y.shape());
        let xd = x.data_mut();
        let yd = y.data_mut();
        self.for_slices("crot", xs, ys, |xo, yo, n| {
            self.backend
                .crot(n, &mut xd[xo..xo + n], 1, &mut yd[yo..yo + n], 1, c, s)
        })
    }

    /// `Σ x*y`; under broadcast the per-slice results are summed.
    pub fn dot(&self, x: &Mat<'_, T>, y: &Mat<'_, T>) -> Result<T> {
        let (xd, yd) = (x.data(), y.data());
        let mut acc = T::ZERO;
        self.for_slices("dot", x.shape(), y.shape(), |xo, yo, n| {
            acc += self
                .backend
                .dot(n, &xd[xo..xo + n], 1, &yd[yo..yo + n], 1)?;
            Ok(())
        })?;
        Ok(acc)
    }

    /// Complex-by-real dot: `(Σ x.re*y, Σ x.im*y)`.
    pub fn cdot(&self, x: &CMat<'_, T>, y: &Mat<'_, T>) -> Result<Complex<T>> {
        let (xd, yd) = (x.data(), y.data());
        let mut acc = Complex::ZERO;
        self.for_slices("cdot", x.shape(), y.shape(), |xo, yo, n| {
            acc += self
                .backend
                .cdot(n, &xd[xo..xo + n], 1, &yd[yo..yo + n], 1)?;
            Ok(())
        })?;
        Ok(acc)
    }

    /// Conjugated complex dot `Σ conj(x)*y`.
    pub fn dotc(&self, x: &CMat<'_, T>, y: &CMat<'_, T>) -> Result<Complex<T>> {
        let (xd, yd) = (x.data(), y.data());
        let mut acc = Complex::ZERO;
        self.for_slices("dotc", x.shape(), y.shape(), |xo, yo, n| {
            acc += self
                .backend
                .dotc(n, &xd[xo..xo + n], 1, &yd[yo..yo + n], 1)?;
            Ok(())
        })?;
        Ok(acc)
    }

    /// Unconjugated complex dot `Σ x*y`.
    pub fn udot(&self, x: &CMat<'_, T>, y: &CMat<'_, T>) -> Result<Complex<T>> {
        let (xd, yd) = (x.data(), y.data());
        let mut acc = Complex::ZERO;
        self.for_slices("udot", x.shape(), y.shape(), |xo, yo, n| {
            acc += self
                .backend
                .dotu(n, &xd[xo..xo + n], 1, &yd[yo..yo + n], 1)?;
            Ok(())
        })?;
        Ok(acc)
    }

    // ========================================================================
    // Strided two-operand operations
    // ========================================================================

    /// [`swap`](Self::swap) over every `incx`-th element of `x` and every
    /// `incy`-th element of `y`.
    pub fn swap_inc(
        &self,
        x: &mut MatMut<'_, T>,
        incx: usize,
        y: &mut MatMut<'_, T>,
        incy: usize,
    ) -> Result<()> {
        let (xs, ys) = (x.shape(), y.shape());
        let (xd, yd) = (x.data_mut(), y.data_mut());
        self.for_strided_pair("swap_inc", (xs, incx), (ys, incy), |n| {
            self.backend.swap(n, xd, incx, yd, incy)
        })
    }

    /// Complex [`swap_inc`](Self::swap_inc).
    pub fn cswap_inc(
        &self,
        x: &mut CMatMut<'_, T>,
        incx: usize,
        y: &mut CMatMut<'_, T>,
        incy: usize,
    ) -> Result<()> {
        let (xs, ys) = (x.shape(), y.shape());
        let (xd, yd) = (x.data_mut(), y.data_mut());
        self.for_strided_pair("cswap_inc", (xs, incx), (ys, incy), |n| {
            self.backend.cswap(n, xd, incx, yd, incy)
        })
    }

    /// Strided [`rot`](Self::rot).
    pub fn rot_inc(
        &self,
        x: &mut MatMut<'_, T>,
        incx: usize,
        y: &mut MatMut<'_, T>,
        incy: usize,
        c: T,
        s: T,
    ) -> Result<()> {
        let (xs, ys) = (x.shape(), y.shape());
        let (xd, yd) = (x.data_mut(), y.data_mut());
        self.for_strided_pair("rot_inc", (xs, incx), (ys, incy), |n| {
            self.backend.rot(n, xd, incx, yd, incy, c, s)
        })
    }

    /// Strided [`crot`](Self::crot).
    pub fn crot_inc(
        &self,
        x: &mut CMatMut<'_, T>,
        incx: usize,
        y: &mut CMatMut<'_, T>,
        incy: usize,
        c: T,
        s: T,
    ) -> Result<()> {
        let (xs, ys) = (x.shape(), y.shape());
        let (xd, yd) = (x.data_mut(), y.data_mut());
        self.for_strided_pair("crot_inc", (xs, incx), (ys, incy), |n| {
            self.backend.crot(n, xd, incx, yd, incy, c, s)
        })
    }

    /// `Σ x[i*incx] * y[i*incy]`.
    pub fn dot_inc(&self, x: &Mat<'_, T>, incx: usize, y: &Mat<'_, T>, incy: usize) -> Result<T> {
        self.for_strided_pair("dot_inc", (x.shape(), incx), (y.shape(), incy), |n| {
            self.backend.dot(n, x.data(), incx, y.data(), incy)
        })
    }

    /// Strided [`cdot`](Self::cdot).
    pub fn cdot_inc(
        &self,
        x: &CMat<'_, T>,
        incx: usize,
        y: &Mat<'_, T>,
        incy: usize,
    ) -> Result<Complex<T>> {
        self.for_strided_pair("cdot_inc", (x.shape(), incx), (y.shape(), incy), |n| {
            self.backend.cdot(n, x.data(), incx, y.data(), incy)
        })
    }

    /// Strided [`dotc`](Self::dotc).
    pub fn dotc_inc(
        &self,
        x: &CMat<'_, T>,
        incx: usize,
        y: &CMat<'_, T>,
        incy: usize,
    ) -> Result<Complex<T>> {
        self.for_strided_pair("dotc_inc", (x.shape(), incx), (y.shape(), incy), |n| {
            self.backend.dotc(n, x.data(), incx, y.data(), incy)
        })
    }

    /// Strided [`udot`](Self::udot).
    pub fn udot_inc(
        &self,
        x: &CMat<'_, T>,
        incx: usize,
        y: &CMat<'_, T>,
        incy: usize,
    ) -> Result<Complex<T>> {
        self.for_strided_pair("udot_inc", (x.shape(), incx), (y.shape(), incy), |n| {
            self.backend.dotu(n, x.data(), incx, y.data(), incy)
        })
    }

    // ========================================================================
    // Whole-tensor updates
    // ========================================================================

    /// `x = alpha*x`.
    pub fn scal(&self, alpha: T, x: &mut MatMut<'_, T>) -> Result<()> {
        let shape = x.shape();
        let xd = x.data_mut();
        self.for_whole("scal", shape, |n| self.backend.scal(n, alpha, xd, 1))
    }

    /// Complex `x` scaled by a real `alpha`.
    pub fn csscal(&self, alpha: T, x: &mut CMatMut<'_, T>) -> Result<()> {
        let shape = x.shape();
        let xd = x.data_mut();
        self.for_whole("csscal", shape, |n| self.backend.csscal(n, alpha, xd, 1))
    }

    /// Complex `x` multiplied by a complex `alpha`.
    pub fn cscal(&self, alpha: Complex<T>, x: &mut CMatMut<'_, T>) -> Result<()> {
        let shape = x.shape();
        let xd = x.data_mut();
        self.for_whole("cscal", shape, |n| self.backend.cscal(n, alpha, xd, 1))
    }

    /// `x += alpha`.
    pub fn add(&self, alpha: T, x: &mut MatMut<'_, T>) -> Result<()> {
        let shape = x.shape();
        let xd = x.data_mut();
        self.for_whole("add", shape, |n| self.backend.add(n, alpha, xd, 1))
    }

    /// Complex `x += alpha` on both parts.
    pub fn cadd(&self, alpha: Complex<T>, x: &mut CMatMut<'_, T>) -> Result<()> {
        let shape = x.shape();
        let xd = x.data_mut();
        self.for_whole("cadd", shape, |n| self.backend.cadd(n, alpha, xd, 1))
    }

    /// Complex `x.re += alpha`; imaginary parts are untouched.
    pub fn cadd_real(&self, alpha: T, x: &mut CMatMut<'_, T>) -> Result<()> {
        let shape = x.shape();
        let xd = x.data_mut();
        self.for_whole("cadd_real", shape, |n| self.backend.cadd_re(n, alpha, xd, 1))
    }

    // ========================================================================
    // Reductions
    // ========================================================================

    /// `Σ |x|`.
    pub fn asum(&self, x: &Mat<'_, T>) -> Result<T> {
        self.for_whole("asum", x.shape(), |n| self.backend.asum(n, x.data(), 1))
    }

    /// `Σ (|re| + |im|)`.
    pub fn casum(&self, x: &CMat<'_, T>) -> Result<T> {
        self.for_whole("casum", x.shape(), |n| self.backend.casum(n, x.data(), 1))
    }

    /// `sqrt(Σ x²)`.
    pub fn nrm2(&self, x: &Mat<'_, T>) -> Result<T> {
        self.for_whole("nrm2", x.shape(), |n| self.backend.nrm2(n, x.data(), 1))
    }

    /// `sqrt(Σ cabs1(x)²)`.
    pub fn cnrm2(&self, x: &CMat<'_, T>) -> Result<T> {
        self.for_whole("cnrm2", x.shape(), |n| self.backend.cnrm2(n, x.data(), 1))
    }

    /// Flat index of the first largest `|x|`.
    pub fn amax(&self, x: &Mat<'_, T>) -> Result<usize> {
        self.for_whole("amax", x.shape(), |n| self.backend.iamax(n, x.data(), 1))
    }

    /// Flat index of the first largest `cabs1(x)`.
    pub fn camax(&self, x: &CMat<'_, T>) -> Result<usize> {
        self.for_whole("camax", x.shape(), |n| self.backend.icamax(n, x.data(), 1))
    }

    /// Flat index of the first smallest `|x|`.
    pub fn amin(&self, x: &Mat<'_, T>) -> Result<usize> {
        self.for_whole("amin", x.shape(), |n| self.backend.iamin(n, x.data(), 1))
    }

    /// Flat index of the first smallest `cabs1(x)`.
    pub fn camin(&self, x: &CMat<'_, T>) -> Result<usize> {
        self.for_whole("camin", x.shape(), |n| self.backend.icamin(n, x.data(), 1))
    }

    /// `Σ |x|` over every `inc`-th element of the flattened tensor.
    pub fn asum_inc(&self, x: &Mat<'_, T>, inc: usize) -> Result<T> {
        self.for_strided("asum_inc", x.shape(), inc, |n| {
            self.backend.asum(n, x.data(), inc)
        })
    }

    /// Complex [`asum_inc`](Self::asum_inc).
    pub fn casum_inc(&self, x: &CMat<'_, T>, inc: usize) -> Result<T> {
        self.for_strided("casum_inc", x.shape(), inc, |n| {
            self.backend.casum(n, x.data(), inc)
        })
    }

    /// `sqrt(Σ x²)` over every `inc`-th element.
    pub fn nrm2_inc(&self, x: &Mat<'_, T>, inc: usize) -> Result<T> {
        self.for_strided("nrm2_inc", x.shape(), inc, |n| {
            self.backend.nrm2(n, x.data(), inc)
        })
    }

    /// Complex [`nrm2_inc`](Self::nrm2_inc).
    pub fn cnrm2_inc(&self, x: &CMat<'_, T>, inc: usize) -> Result<T> {
        self.for_strided("cnrm2_inc", x.shape(), inc, |n| {
            self.backend.cnrm2(n, x.data(), inc)
        })
    }

    /// Position (in strided steps) of the first largest `|x|`.
    pub fn amax_inc(&self, x: &Mat<'_, T>, inc: usize) -> Result<usize> {
        self.for_strided("amax_inc", x.shape(), inc, |n| {
            self.backend.iamax(n, x.data(), inc)
        })
    }

    /// Complex [`amax_inc`](Self::amax_inc).
    pub fn camax_inc(&self, x: &CMat<'_, T>, inc: usize) -> Result<usize> {
        self.for_strided("camax_inc", x.shape(), inc, |n| {
            self.backend.icamax(n, x.data(), inc)
        })
    }

    /// Position (in strided steps) of the first smallest `|x|`.
    pub fn amin_inc(&self, x: &Mat<'_, T>, inc: usize) -> Result<usize> {
        self.for_strided("amin_inc", x.shape(), inc, |n| {
            self.backend.iamin(n, x.data(), inc)
        })
    }

    /// Complex [`amin_inc`](Self::amin_inc).
    pub fn camin_inc(&self, x: &CMat<'_, T>, inc: usize) -> Result<usize> {
        self.for_strided("camin_inc", x.shape(), inc, |n| {
            self.backend.icamin(n, x.data(), inc)
        })
    }

    // ========================================================================
    // Scalar operations
    // ========================================================================

    /// Rotation-parameter generation; `a <- r`, `b <- z`.
    pub fn rotg(&self, a: &mut T, b: &mut T, c: T, s: T) -> Result<()> {
        let result = self.backend.rotg(a, b, c, s).map(|()| ((), 1, 1));
        self.report("rotg", result)
    }

    /// Complex rotation-parameter generation.
    pub fn crotg(&self, a: &mut Complex<T>, b: &mut Complex<T>, c: T, s: Complex<T>) -> Result<()> {
        let result = self.backend.crotg(a, b, c, s).map(|()| ((), 1, 1));
        self.report("crotg", result)
    }

    /// `|re| + |im|`.
    pub fn cabs1(&self, z: Complex<T>) -> T {
        Element::cabs1(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Builtin;
    use crate::core::EngineConfig;
    use crate::types::{Tensor, TensorMut};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<DispatchEvent>>,
        errors: Mutex<Vec<&'static str>>,
    }

    impl Observer for Recorder {
        fn on_dispatch(&self, event: &DispatchEvent) {
            self.events.lock().unwrap().push(*event);
        }

        fn on_error(&self, op: &'static str, _error: &BlasError) {
            self.errors.lock().unwrap().push(op);
        }
    }

    fn serial() -> Dispatcher<f64, Builtin> {
        Dispatcher::new(Builtin::new(EngineConfig::serial()))
    }

    #[test]
    fn test_strided_count() {
        let s = Shape::new(2, 5, 1);
        assert_eq!(strided_count("t", s, 1).unwrap(), 10);
        assert_eq!(strided_count("t", s, 3).unwrap(), 4);
        assert_eq!(strided_count("t", s, 10).unwrap(), 1);
        assert_eq!(strided_count("t", s, 11).unwrap(), 1);
        assert!(strided_count("t", s, 0).is_err());
        assert!(strided_count("t", Shape::new(0, 5, 1), 1).is_err());
    }

    #[test]
    fn test_broadcast_dot_sums_slices() {
        let blas = serial();
        let xd = [1.0, 2.0];
        let yd = [1.0, 1.0, 2.0, 2.0, 3.0, 3.0];
        let x = Tensor::new((2, 1, 1), &xd).unwrap();
        let y = Tensor::new((2, 1, 3), &yd).unwrap();
        assert_eq!(blas.dot(&x, &y).unwrap(), 3.0 + 6.0 + 9.0);
    }

    #[test]
    fn test_broadcast_swap_runs_in_slice_order() {
        let blas = serial();
        let mut xd = [1.0, 2.0];
        let mut yd = [10.0, 20.0, 30.0, 40.0];
        let mut x = TensorMut::new((2, 1, 1), &mut xd).unwrap();
        let mut y = TensorMut::new((2, 1, 2), &mut yd).unwrap();
        blas.swap(&mut x, &mut y).unwrap();
        // slice 0: x <-> y0, then slice 1: (old y0) <-> y1
        assert_eq!(xd, [30.0, 40.0]);
        assert_eq!(yd, [1.0, 2.0, 10.0, 20.0]);
    }

    #[test]
    fn test_strided_reductions() {
        let blas = serial();
        let xd = [-3.0, 100.0, 4.0, 100.0, -5.0];
        let x = Tensor::new((5, 1, 1), &xd).unwrap();
        assert_eq!(blas.asum_inc(&x, 2).unwrap(), 12.0);
        assert_eq!(blas.amax_inc(&x, 2).unwrap(), 2);
        assert_eq!(blas.amin_inc(&x, 2).unwrap(), 0);
        assert_eq!(blas.nrm2_inc(&x, 4).unwrap(), (9.0f64 + 25.0).sqrt());
    }

    #[test]
    fn test_strided_pair_ops() {
        let blas = serial();
        // x walks 1, 2, 3 at stride 2; y is dense.
        let xd = [1.0, 100.0, 2.0, 100.0, 3.0];
        let yd = [4.0, 5.0, 6.0];
        let x = Tensor::new((5, 1, 1), &xd).unwrap();
        let y = Tensor::new((3, 1, 1), &yd).unwrap();
        assert_eq!(blas.dot_inc(&x, 2, &y, 1).unwrap(), 32.0);
        assert!(matches!(
            blas.dot_inc(&x, 1, &y, 1),
            Err(BlasError::DimensionMismatch(_))
        ));
        assert!(matches!(
            blas.dot_inc(&x, 0, &y, 1),
            Err(BlasError::InvalidDimension(_))
        ));

        let mut ad = [1.0, -1.0, 2.0, -2.0];
        let mut bd = [10.0, 20.0];
        let mut a = TensorMut::new((2, 2, 1), &mut ad).unwrap();
        let mut b = TensorMut::new((2, 1, 1), &mut bd).unwrap();
        blas.swap_inc(&mut a, 2, &mut b, 1).unwrap();
        assert_eq!(ad, [10.0, -1.0, 20.0, -2.0]);
        assert_eq!(bd, [1.0, 2.0]);
    }

    #[test]
    fn test_strided_pair_mismatch_leaves_operands() {
        let blas = serial();
        let mut ad = [1.0, 2.0, 3.0];
        let mut bd = [4.0, 5.0];
        {
            let mut a = TensorMut::new((3, 1, 1), &mut ad).unwrap();
            let mut b = TensorMut::new((2, 1, 1), &mut bd).unwrap();
            assert!(blas.rot_inc(&mut a, 1, &mut b, 1, 1.0, 1.0).is_err());
        }
        assert_eq!(ad, [1.0, 2.0, 3.0]);
        assert_eq!(bd, [4.0, 5.0]);

        // ceil(3 / 2) == 2 on x, 2 on y
        let mut a = TensorMut::new((3, 1, 1), &mut ad).unwrap();
        let mut b = TensorMut::new((2, 1, 1), &mut bd).unwrap();
        blas.rot_inc(&mut a, 2, &mut b, 1, 1.0, 1.0).unwrap();
        assert_eq!(ad, [5.0, 2.0, 8.0]);
        assert_eq!(bd, [5.0, 8.0]);
    }

    #[test]
    fn test_observer_sees_calls_and_rejections() {
        let recorder = Arc::new(Recorder::default());
        let blas = serial().with_observer(recorder.clone());

        let xd = [1.0, 2.0, 3.0, 4.0];
        let mut yd = [0.0; 12];
        let x = Tensor::new((2, 2, 1), &xd).unwrap();
        let mut y = TensorMut::new((2, 2, 3), &mut yd).unwrap();
        blas.axpy(1.0, &x, &mut y).unwrap();

        let mut bad_data = [0.0; 4];
        let mut bad = TensorMut::new((4, 1, 1), &mut bad_data).unwrap();
        assert!(blas.copy(&x, &mut bad).is_err());

        let events = recorder.events.lock().unwrap();
        assert_eq!(
            events[0],
            DispatchEvent {
                op: "axpy",
                backend: "builtin",
                elements: 12,
                kernel_calls: 3,
            }
        );
        assert_eq!(*recorder.errors.lock().unwrap(), vec!["copy"]);
    }

    #[test]
    fn test_rotg_through_dispatcher() {
        let blas = serial();
        let (mut a, mut b) = (3.0, 0.0);
        blas.rotg(&mut a, &mut b, 1.0, 0.0).unwrap();
        assert_eq!((a, b), (3.0, 0.0));
        assert_eq!(blas.cabs1(Complex::new(-1.5, 2.0)), 3.5);
    }
}
