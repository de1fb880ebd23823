//! Column and row operations.

use super::{Dispatcher, SlicePlan};
use crate::backend::Level1;
use crate::error::{BlasError, Result};
use crate::types::{CMatMut, Complex, MatMut, Real, Shape, TensorMut};

/// One column or one row of every `d0 x d1` slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    /// Column `idx`: `d0` contiguous elements.
    Column,
    /// Row `idx`: `d1` elements at stride `d0`.
    Row,
}

impl Lane {
    /// Reject empty tensors and out-of-range indices.
    pub fn check(self, op: &'static str, shape: Shape, idx: usize) -> Result<()> {
        if shape.is_empty() {
            return Err(BlasError::InvalidDimension(format!(
                "{}: empty tensor ({})",
                op, shape
            )));
        }
        let (bound, what) = match self {
            Lane::Column => (shape.d1, "column"),
            Lane::Row => (shape.d0, "row"),
        };
        if idx >= bound {
            return Err(BlasError::InvalidDimension(format!(
                "{}: {} {} out of range for {}",
                op, what, idx, shape
            )));
        }
        Ok(())
    }

    /// `(offset in slice 0, length, stride)` of lane `idx`.
    pub fn vector(self, shape: Shape, idx: usize) -> (usize, usize, usize) {
        match self {
            Lane::Column => (shape.d0 * idx, shape.d0, 1),
            Lane::Row => (idx, shape.d1, shape.d0),
        }
    }

    /// Buffer offset of lane `idx` in `slice`.
    pub fn base(self, shape: Shape, idx: usize, slice: usize) -> usize {
        self.vector(shape, idx).0 + slice * shape.slice_len()
    }
}

impl<T: Real, B: Level1<T>> Dispatcher<T, B> {
    /// Run `f(lane_buffer, n, inc)` on lane `idx` of every slice of `x`.
    fn for_lanes<E, F>(
        &self,
        op: &'static str,
        lane: Lane,
        x: &mut TensorMut<'_, E>,
        idx: usize,
        mut f: F,
    ) -> Result<()>
    where
        F: FnMut(&mut [E], usize, usize) -> Result<()>,
    {
        let shape = x.shape();
        let data = x.data_mut();
        let result = lane.check(op, shape, idx).and_then(|()| {
            let (_, n, inc) = lane.vector(shape, idx);
            for slice in 0..shape.d2 {
                let base = lane.base(shape, idx, slice);
                f(&mut data[base..], n, inc)?;
            }
            Ok(((), n * shape.d2, shape.d2))
        });
        self.report(op, result)
    }

    /// Run `f(x_lane, y_lane, n, inc)` on lane `idx` of paired slices.
    fn for_lane_pairs<E, F>(
        &self,
        op: &'static str,
        lane: Lane,
        x: &mut TensorMut<'_, E>,
        y: &mut TensorMut<'_, E>,
        idx: usize,
        mut f: F,
    ) -> Result<()>
    where
        F: FnMut(&mut [E], &mut [E], usize, usize) -> Result<()>,
    {
        let (xs, ys) = (x.shape(), y.shape());
        let xd = x.data_mut();
        let yd = y.data_mut();
        let result = SlicePlan::resolve(op, xs, ys).and_then(|plan| {
            lane.check(op, ys, idx)?;
            let (_, n, inc) = lane.vector(ys, idx);
            for (sx, sy) in plan.slice_pairs() {
                let xb = lane.base(xs, idx, sx);
                let yb = lane.base(ys, idx, sy);
                f(&mut xd[xb..], &mut yd[yb..], n, inc)?;
            }
            Ok(((), n * ys.d2, ys.d2))
        });
        self.report(op, result)
    }

    /// Scale column `idx` of every slice by `alpha`.
    pub fn scal_col(&self, alpha: T, x: &mut MatMut<'_, T>, idx: usize) -> Result<()> {
        self.for_lanes("scal_col", Lane::Column, x, idx, |v, n, inc| {
            self.backend.scal(n, alpha, v, inc)
        })
    }

    /// Scale row `idx` of every slice by `alpha`.
    pub fn scal_row(&self, alpha: T, x: &mut MatMut<'_, T>, idx: usize) -> Result<()> {
        self.for_lanes("scal_row", Lane::Row, x, idx, |v, n, inc| {
            self.backend.scal(n, alpha, v, inc)
        })
    }

    /// Scale complex column `idx` by a real `alpha`.
    pub fn csscal_col(&self, alpha: T, x: &mut CMatMut<'_, T>, idx: usize) -> Result<()> {
        self.for_lanes("csscal_col", Lane::Column, x, idx, |v, n, inc| {
            self.backend.csscal(n, alpha, v, inc)
        })
    }

    /// Scale complex row `idx` by a real `alpha`.
    pub fn csscal_row(&self, alpha: T, x: &mut CMatMut<'_, T>, idx: usize) -> Result<()> {
        self.for_lanes("csscal_row", Lane::Row, x, idx, |v, n, inc| {
            self.backend.csscal(n, alpha, v, inc)
        })
    }

    /// Multiply complex column `idx` by `alpha`.
    pub fn cscal_col(&self, alpha: Complex<T>, x: &mut CMatMut<'_, T>, idx: usize) -> Result<()> {
        self.for_lanes("cscal_col", Lane::Column, x, idx, |v, n, inc| {
            self.backend.cscal(n, alpha, v, inc)
        })
    }

    /// Multiply complex row `idx` by `alpha`.
    pub fn cscal_row(&self, alpha: Complex<T>, x: &mut CMatMut<'_, T>, idx: usize) -> Result<()> {
        self.for_lanes("cscal_row", Lane::Row, x, idx, |v, n, inc| {
            self.backend.cscal(n, alpha, v, inc)
        })
    }

    /// Add `alpha` to column `idx` of every slice.
    pub fn add_col(&self, alpha: T, x: &mut MatMut<'_, T>, idx: usize) -> Result<()> {
        self.for_lanes("add_col", Lane::Column, x, idx, |v, n, inc| {
            self.backend.add(n, alpha, v, inc)
        })
    }

    /// Add `alpha` to row `idx` of every slice.
    pub fn add_row(&self, alpha: T, x: &mut MatMut<'_, T>, idx: usize) -> Result<()> {
        self.for_lanes("add_row", Lane::Row, x, idx, |v, n, inc| {
            self.backend.add(n, alpha, v, inc)
        })
    }

    /// Add complex `alpha` to column `idx`.
    pub fn cadd_col(&self, alpha: Complex<T>, x: &mut CMatMut<'_, T>, idx: usize) -> Result<()> {
        self.for_lanes("cadd_col", Lane::Column, x, idx, |v, n, inc| {
            self.backend.cadd(n, alpha, v, inc)
        })
    }

    /// Add complex `alpha` to row `idx`.
    pub fn cadd_row(&self, alpha: Complex<T>, x: &mut CMatMut<'_, T>, idx: usize) -> Result<()> {
        self.for_lanes("cadd_row", Lane::Row, x, idx, |v, n, inc| {
            self.backend.cadd(n, alpha, v, inc)
        })
    }

    /// Add real `alpha` to the real parts of complex column `idx`.
    pub fn cadd_real_col(&self, alpha: T, x: &mut CMatMut<'_, T>, idx: usize) -> Result<()> {
        self.for_lanes("cadd_real_col", Lane::Column, x, idx, |v, n, inc| {
            self.backend.cadd_re(n, alpha, v, inc)
        })
    }

    /// Add real `alpha` to the real parts of complex row `idx`.
    pub fn cadd_real_row(&self, alpha: T, x: &mut CMatMut<'_, T>, idx: usize) -> Result<()> {
        self.for_lanes("cadd_real_row", Lane::Row, x, idx, |v, n, inc| {
            self.backend.cadd_re(n, alpha, v, inc)
        })
    }

    /// Exchange column `idx` of `x` with column `idx` of `y`.
    pub fn swap_col(&self, x: &mut MatMut<'_, T>, y: &mut MatMut<'_, T>, idx: usize) -> Result<()> {
        self.for_lane_pairs("swap_col", Lane::Column, x, y, idx, |xv, yv, n, inc| {
            self.backend.swap(n, xv, inc, yv, inc)
        })
    }

    /// Exchange row `idx` of `x` with row `idx` of `y`.
    pub fn swap_row(&self, x: &mut MatMut<'_, T>, y: &mut MatMut<'_, T>, idx: usize) -> Result<()> {
        self.for_lane_pairs("swap_row", Lane::Row, x, y, idx, |xv, yv, n, inc| {
            self.backend.swap(n, xv, inc, yv, inc)
        })
    }

    /// Complex [`swap_col`](Self::swap_col).
    pub fn cswap_col(&self, x: &mut CMatMut<'_, T>, y: &mut CMatMut<'_, T>, idx: usize) -> Result<()> {
        self.for_lane_pairs("cswap_col", Lane::Column, x, y, idx, |xv, yv, n, inc| {
            self.backend.cswap(n, xv, inc, yv, inc)
        })
    }

    /// Complex [`swap_row`](Self::swap_row).
    pub fn cswap_row(&self, x: &mut CMatMut<'_, T>, y: &mut CMatMut<'_, T>, idx: usize) -> Result<()> {
        self.for_lane_pairs("cswap_row", Lane::Row, x, y, idx, |xv, yv, n, inc| {
            self.backend.cswap(n, xv, inc, yv, inc)
        })
    }
}
