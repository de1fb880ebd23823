//! Built-in strided kernel engine.
//!
//! This module is the portable implementation of every Level-1 primitive.
//! Kernels are generic over [`Element`](crate::types::Element), so one body
//! serves `f32`, `f64`, `Complex<f32>` and `Complex<f64>`.
//!
//! # Execution Strategy
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ check_vector(x), check_vector(y)    (n > 0, inc > 0, span fits)  │
//! │ n < parallel_threshold ?                                         │
//! │   yes: serial strided loop                                       │
//! │   no:  rayon over inc-sized chunks, min chunk_size per task      │
//! │        elementwise  -> disjoint writes                           │
//! │        reductions   -> per-worker fold, then combine             │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! | Primitive | Parallel | Notes |
//! |-----------|----------|-------|
//! | axpy, scal, cscal, add, add_re, swap, rot | yes | elementwise |
//! | copy | yes | unrolled by 8, serial tail |
//! | dot, cdot, dotc, dotu, asum, nrm2 | yes | fold + combine |
//! | iamax, iamin | no | first occurrence wins ties |
//!
//! Reductions are not bit-reproducible across thread counts: partial sums
//! are combined in whatever order the pool produces them.
//!
//! # Module Contents
//!
//! - `config`: [`EngineConfig`] loop parameters
//! - [`kernels`]: the primitives
//! - [`rotation`]: `rotg` / `crotg`
//! - `stride`: operand validation and loop drivers

mod config;
pub mod kernels;
pub mod rotation;
mod stride;

pub use config::EngineConfig;
pub use kernels::COPY_UNROLL;
pub use rotation::{crotg, rotg};
pub use stride::check_vector;
