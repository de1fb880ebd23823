//! Build-time precision and backend selection.
//!
//! Kernels are generic; this module pins the types the convenience API and
//! [`Dispatcher::default`](crate::Dispatcher) use for a given build.
//!
//! | Feature | Off | On |
//! |---------|-----|----|
//! | `single-precision` | [`Scalar`] = `f64` | [`Scalar`] = `f32` |
//! | `openblas` | [`SelectedBackend`] = [`Builtin`](crate::backend::Builtin) | [`SelectedBackend`] = `OpenBlas` |
//!
//! Neither choice can change at runtime.

pub use crate::types::Precision;

use crate::types::{Complex, Real};

/// Real scalar type of this build.
#[cfg(feature = "single-precision")]
pub type Scalar = f32;

/// Real scalar type of this build.
#[cfg(not(feature = "single-precision"))]
pub type Scalar = f64;

/// Complex scalar type of this build.
pub type CScalar = Complex<Scalar>;

/// Backend every default dispatcher uses.
#[cfg(feature = "openblas")]
pub type SelectedBackend = crate::backend::OpenBlas;

/// Backend every default dispatcher uses.
#[cfg(not(feature = "openblas"))]
pub type SelectedBackend = crate::backend::Builtin;

/// Name reported by [`SelectedBackend`].
#[cfg(feature = "openblas")]
pub const BACKEND_NAME: &str = "openblas";

/// Name reported by [`SelectedBackend`].
#[cfg(not(feature = "openblas"))]
pub const BACKEND_NAME: &str = "builtin";

/// Precision of [`Scalar`].
pub const PRECISION: Precision = <Scalar as Real>::PRECISION;
