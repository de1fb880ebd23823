use std::fmt;

use super::complex::Complex;
use crate::error::{BlasError, Result};

/// Dimensions of a 3-d column-major tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    /// Fastest-varying dimension (rows).
    pub d0: usize,
    /// Middle dimension (columns).
    pub d1: usize,
    /// Slowest-varying dimension (slices).
    pub d2: usize,
}

impl Shape {
    /// Create a shape.
    pub const fn new(d0: usize, d1: usize, d2: usize) -> Self {
        Self { d0, d1, d2 }
    }

    /// Elements in one `d0 x d1` slice, or `None` on overflow.
    pub fn checked_slice_len(&self) -> Option<usize> {
        self.d0.checked_mul(self.d1)
    }

    /// Total element count, or `None` on overflow.
    pub fn checked_len(&self) -> Option<usize> {
        self.checked_slice_len()?.checked_mul(self.d2)
    }

    /// Elements in one `d0 x d1` slice (saturating).
    pub fn slice_len(&self) -> usize {
        self.d0.saturating_mul(self.d1)
    }

    /// Total element count `d0*d1*d2` (saturating).
    pub fn len(&self) -> usize {
        self.slice_len().saturating_mul(self.d2)
    }

    /// Whether any dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.d0 == 0 || self.d1 == 0 || self.d2 == 0
    }
}

impl From<(usize, usize, usize)> for Shape {
    fn from((d0, d1, d2): (usize, usize, usize)) -> Self {
        Self::new(d0, d1, d2)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.d0, self.d1, self.d2)
    }
}

fn check_buffer(shape: Shape, len: usize) -> Result<()> {
    let expected = shape
        .checked_len()
        .ok_or_else(|| BlasError::InvalidDimension(format!("shape {} overflows usize", shape)))?;
    if expected != len {
        return Err(BlasError::InvalidDimension(format!(
            "shape {} needs {} elements, buffer holds {}",
            shape, expected, len
        )));
    }
    Ok(())
}

/// Immutable view of a caller-owned tensor buffer.
#[derive(Debug, Clone, Copy)]
pub struct Tensor<'a, E> {
    shape: Shape,
    data: &'a [E],
}

impl<'a, E> Tensor<'a, E> {
    /// Wrap `data` as a tensor of the given shape.
    ///
    /// Fails with [`BlasError::InvalidDimension`] if `data.len()` is not
    /// `d0*d1*d2`. Zero-sized shapes are accepted here and rejected by the
    /// operations that receive them.
    pub fn new(shape: impl Into<Shape>, data: &'a [E]) -> Result<Self> {
        let shape = shape.into();
        check_buffer(shape, data.len())?;
        Ok(Self { shape, data })
    }

    /// Shape of the tensor.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Underlying column-major buffer.
    pub fn data(&self) -> &'a [E] {
        self.data
    }
}

/// Mutable view of a caller-owned tensor buffer.
#[derive(Debug)]
pub struct TensorMut<'a, E> {
    shape: Shape,
    data: &'a mut [E],
}

impl<'a, E> TensorMut<'a, E> {
    /// Wrap `data` as a mutable tensor of the given shape.
    pub fn new(shape: impl Into<Shape>, data: &'a mut [E]) -> Result<Self> {
        let shape = shape.into();
        check_buffer(shape, data.len())?;
        Ok(Self { shape, data })
    }

    /// Shape of the tensor.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Underlying column-major buffer.
    pub fn data(&self) -> &[E] {
        &*self.data
    }

    /// Underlying column-major buffer, mutably.
    pub fn data_mut(&mut self) -> &mut [E] {
        &mut *self.data
    }

    /// Reborrow as an immutable view.
    pub fn as_tensor(&self) -> Tensor<'_, E> {
        Tensor {
            shape: self.shape,
            data: &*self.data,
        }
    }
}

/// Real tensor view.
pub type Mat<'a, T> = Tensor<'a, T>;
/// Mutable real tensor view.
pub type MatMut<'a, T> = TensorMut<'a, T>;
/// Complex tensor view.
pub type CMat<'a, T> = Tensor<'a, Complex<T>>;
/// Mutable complex tensor view.
pub type CMatMut<'a, T> = TensorMut<'a, Complex<T>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_lengths() {
        let s = Shape::new(2, 3, 4);
        assert_eq!(s.slice_len(), 6);
        assert_eq!(s.len(), 24);
        assert!(!s.is_empty());
        assert!(Shape::new(2, 0, 4).is_empty());
        assert_eq!(Shape::new(usize::MAX, 2, 1).checked_len(), None);
    }

    #[test]
    fn test_tensor_rejects_wrong_buffer_length() {
        let data = [0.0f64; 5];
        let err = Tensor::new((2, 3, 1), &data).unwrap_err();
        assert!(matches!(err, BlasError::InvalidDimension(_)));
    }

    #[test]
    fn test_tensor_mut_reborrow() {
        let mut data = vec![1.0f32, 2.0, 3.0, 4.0];
        let mut t = TensorMut::new((2, 2, 1), &mut data).unwrap();
        t.data_mut()[3] = 9.0;
        assert_eq!(t.as_tensor().data(), &[1.0, 2.0, 3.0, 9.0]);
        assert_eq!(t.shape().to_string(), "2x2x1");
    }

    #[test]
    fn test_zero_sized_tensor_is_constructible() {
        let data: [f64; 0] = [];
        let t = Tensor::new((0, 3, 2), &data).unwrap();
        assert!(t.shape().is_empty());
    }
}
