//! Scalar, complex and tensor types.
//!
//! Kernels are written once against two traits and instantiated for both
//! precisions:
//!
//! | Trait | Implemented by | Role |
//! |-------|----------------|------|
//! | [`Real`] | `f32`, `f64` | Real scalar of a given precision |
//! | [`Element`] | `f32`, `f64`, [`Complex<f32>`], [`Complex<f64>`] | Anything a strided vector can hold |
//!
//! # Magnitude
//!
//! Level-1 routines measure complex values with the L1 magnitude
//!
//! ```text
//! cabs1(z) = |z.re| + |z.im|
//! ```
//!
//! which [`Element::cabs1`] returns for complex elements and which reduces
//! to `|x|` for real ones. `asum`, `nrm2`, `amax` and `amin` all use it.
//!
//! # Tensors
//!
//! A tensor is a borrowed, contiguous, column-major buffer with three
//! dimensions `d0 x d1 x d2`:
//!
//! ```text
//! index(r, c, s) = r + c*d0 + s*d0*d1
//! ```
//!
//! [`Tensor`] borrows immutably and [`TensorMut`] mutably. The aliases
//! [`Mat`], [`MatMut`], [`CMat`] and [`CMatMut`] name the real and complex
//! variants.
//!
//! # Example
//!
//! ```rust
//! use strided_blas::types::{Complex, Element, Shape, Tensor};
//!
//! let z = Complex::new(3.0f64, -4.0);
//! assert_eq!(z.cabs1(), 7.0);
//!
//! let data = [1.0f64, 2.0, 3.0, 4.0];
//! let t = Tensor::new(Shape::new(2, 2, 1), &data).unwrap();
//! assert_eq!(t.shape().slice_len(), 4);
//! ```

mod complex;
mod element;
mod scalar;
mod tensor;

pub use complex::Complex;
pub use element::Element;
pub use scalar::{Precision, Real};
pub use tensor::{CMat, CMatMut, Mat, MatMut, Shape, Tensor, TensorMut};
