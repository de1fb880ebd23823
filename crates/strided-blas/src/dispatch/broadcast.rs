//! Shape compatibility and slice pairing for two-operand tensor calls.

use crate::error::{BlasError, Result};
use crate::types::Shape;

/// How a two-operand call decomposes into strided-vector kernel calls.
///
/// ```text
/// x.d2 == y.d2            one call over d0*d1*d2 elements
/// x.d2 == 1, y.d2 == k    k calls: x[0..s] against y[i*s..(i+1)*s]
/// anything else           DimensionMismatch
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlicePlan {
    slice_len: usize,
    slices: usize,
    broadcast: bool,
}

impl SlicePlan {
    /// Check `x` against `y` and build the plan.
    ///
    /// Empty operands fail with [`BlasError::InvalidDimension`]; incompatible
    /// shapes fail with [`BlasError::DimensionMismatch`].
    pub fn resolve(op: &'static str, x: Shape, y: Shape) -> Result<Self> {
        if x.is_empty() || y.is_empty() {
            return Err(BlasError::InvalidDimension(format!(
                "{}: empty tensor operand (x is {}, y is {})",
                op, x, y
            )));
        }
        if x.d0 != y.d0 || x.d1 != y.d1 {
            return Err(BlasError::DimensionMismatch(format!(
                "{}: slice shapes differ (x is {}, y is {})",
                op, x, y
            )));
        }

        let slice_len = x.slice_len();
        if x.d2 == y.d2 {
            Ok(Self {
                slice_len,
                slices: y.d2,
                broadcast: false,
            })
        } else if x.d2 == 1 {
            Ok(Self {
                slice_len,
                slices: y.d2,
                broadcast: true,
            })
        } else {
            Err(BlasError::DimensionMismatch(format!(
                "{}: x has {} slices, y has {}; only x.d2 == 1 broadcasts",
                op, x.d2, y.d2
            )))
        }
    }

    /// Whether `x` is reused against every slice of `y`.
    pub fn is_broadcast(&self) -> bool {
        self.broadcast
    }

    /// Number of strided-vector kernel invocations.
    pub fn kernel_calls(&self) -> usize {
        if self.broadcast {
            self.slices
        } else {
            1
        }
    }

    /// Elements of `y` covered by the plan.
    pub fn elements(&self) -> usize {
        self.slice_len * self.slices
    }

    /// Kernel calls as `(x_offset, y_offset, len)`, all at stride 1.
    pub fn calls(&self) -> impl Iterator<Item = (usize, usize, usize)> {
        let len = if self.broadcast {
            self.slice_len
        } else {
            self.elements()
        };
        (0..self.kernel_calls()).map(move |i| (0, i * len, len))
    }

    /// Slice index pairs `(x_slice, y_slice)` for per-slice operations.
    pub fn slice_pairs(&self) -> impl Iterator<Item = (usize, usize)> {
        let broadcast = self.broadcast;
        (0..self.slices).map(move |i| (if broadcast { 0 } else { i }, i))
    }
}
