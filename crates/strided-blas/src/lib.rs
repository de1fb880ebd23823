//! Level-1 BLAS kernels over strided vectors and 3-d tensors.
//!
//! This crate implements the classic vector primitives (axpy, copy, swap,
//! scal, add, dot, asum, nrm2, amax/amin, rot, rotg) for real and complex
//! numbers in single and double precision, and a dispatcher that applies
//! them to column-major `d0 x d1 x d2` tensors with single-slice
//! broadcasting.
//!
//! # Quick Start
//!
//! ```
//! use strided_blas::types::{Mat, MatMut};
//! use strided_blas::{axpy, dot, nrm2, Scalar};
//!
//! let x_data: Vec<Scalar> = vec![3.0, 4.0];
//! let mut y_data: Vec<Scalar> = vec![1.0, 1.0];
//!
//! let x = Mat::new((2, 1, 1), &x_data).unwrap();
//! assert_eq!(nrm2(&x).unwrap(), 5.0);
//!
//! let mut y = MatMut::new((2, 1, 1), &mut y_data).unwrap();
//! axpy(2.0, &x, &mut y).unwrap();
//! assert_eq!(y_data, vec![7.0, 9.0]);
//!
//! let y = Mat::new((2, 1, 1), &y_data).unwrap();
//! assert_eq!(dot(&x, &y).unwrap(), 57.0);
//! ```
//!
//! # Layers
//!
//! ```text
//! api (free functions, gate types)
//!   └─ Dispatcher<T, B>        shapes, broadcast, column/row lanes
//!        └─ B: Level1<T>       Builtin | OpenBlas   (gate::SelectedBackend)
//!             └─ core::kernels  strided loops, rayon when `parallel`
//! ```
//!
//! # Features
//!
//! | Feature | Default | Effect |
//! |---------|---------|--------|
//! | `parallel` | yes | Large vectors run on the rayon pool |
//! | `single-precision` | no | [`Scalar`] is `f32` instead of `f64` |
//! | `openblas` | no | Standard primitives go through CBLAS |
//!
//! # Observing Calls
//!
//! ```
//! use std::sync::Arc;
//! use strided_blas::{Dispatcher, Scalar, TracingObserver};
//!
//! let blas: Dispatcher<Scalar> = Dispatcher::default().with_observer(Arc::new(TracingObserver));
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod backend;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod gate;
pub mod observe;
pub mod types;

pub use api::*;
pub use backend::{Builtin, Level1};
#[cfg(feature = "openblas")]
pub use backend::OpenBlas;
pub use crate::core::EngineConfig;
pub use dispatch::{Dispatcher, Lane, SlicePlan};
pub use error::{BlasError, Result};
pub use gate::{CScalar, Precision, Scalar, SelectedBackend, BACKEND_NAME, PRECISION};
pub use observe::{DispatchEvent, Observer, TracingObserver};
pub use types::{CMat, CMatMut, Complex, Element, Mat, MatMut, Real, Shape, Tensor, TensorMut};
