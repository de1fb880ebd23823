//! Built-in Level-1 kernels.
//!
//! Every kernel takes an explicit length `n` and strides, validates its
//! operands with [`check_vector`] and only then walks the buffers. Element
//! `i` of an operand is `buf[i * inc]`.

use super::config::EngineConfig;
use super::stride::{
    check_vector, for_each_mut, for_each_pair, for_each_pair_mut, map_reduce, map_reduce_pair,
    span,
};
use crate::error::Result;
use crate::types::{Complex, Element, Real};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Unroll factor of the copy kernel.
pub const COPY_UNROLL: usize = 8;

/// `y[i] = x[i] ⊙ alpha + y[i]`.
///
/// For real elements this is the usual `alpha*x + y`. For complex elements
/// the product is component-wise: `y.re += x.re*alpha.re`,
/// `y.im += x.im*alpha.im`.
pub fn axpy<E: Element>(
    cfg: &EngineConfig,
    n: usize,
    alpha: E,
    x: &[E],
    incx: usize,
    y: &mut [E],
    incy: usize,
) -> Result<()> {
    check_vector("axpy", "x", n, x.len(), incx)?;
    check_vector("axpy", "y", n, y.len(), incy)?;
    for_each_pair(cfg, n, x, incx, y, incy, |xi, yi| {
        *yi = xi.hadamard(alpha) + *yi;
    });
    Ok(())
}

/// `y[i] = x[i]`, unrolled by [`COPY_UNROLL`].
///
/// Full blocks of eight elements are copied with an unrolled body (in
/// parallel when the vector is long enough); the `n % 8` tail is copied
/// serially afterwards.
pub fn copy<E: Element>(
    cfg: &EngineConfig,
    n: usize,
    x: &[E],
    incx: usize,
    y: &mut [E],
    incy: usize,
) -> Result<()> {
    check_vector("copy", "x", n, x.len(), incx)?;
    check_vector("copy", "y", n, y.len(), incy)?;

    let blocks = n / COPY_UNROLL;
    let body = blocks * COPY_UNROLL;

    if blocks > 0 {
        let xs = &x[..span(body, incx)];
        let ys = &mut y[..span(body, incy)];
        if cfg.runs_parallel(n) {
            #[cfg(feature = "parallel")]
            {
                let min_blocks = (cfg.chunk_size / COPY_UNROLL).max(1);
                xs.par_chunks(COPY_UNROLL * incx)
                    .zip(ys.par_chunks_mut(COPY_UNROLL * incy))
                    .with_min_len(min_blocks)
                    .for_each(|(xb, yb)| copy_block(xb, incx, yb, incy));
            }
        } else {
            xs.chunks(COPY_UNROLL * incx)
                .zip(ys.chunks_mut(COPY_UNROLL * incy))
                .for_each(|(xb, yb)| copy_block(xb, incx, yb, incy));
        }
    }

    for i in body..n {
        y[i * incy] = x[i * incx];
    }
    Ok(())
}

/// Copy one block of eight strided elements.
///
/// The last block of a slice may be shorter than `8 * inc` entries but
/// always reaches element 7.
#[inline(always)]
fn copy_block<E: Copy>(x: &[E], incx: usize, y: &mut [E], incy: usize) {
    y[0] = x[0];
    y[incy] = x[incx];
    y[2 * incy] = x[2 * incx];
    y[3 * incy] = x[3 * incx];
    y[4 * incy] = x[4 * incx];
    y[5 * incy] = x[5 * incx];
    y[6 * incy] = x[6 * incx];
    y[7 * incy] = x[7 * incx];
}

/// Exchange `x[i]` and `y[i]`.
pub fn swap<E: Element>(
    cfg: &EngineConfig,
    n: usize,
    x: &mut [E],
    incx: usize,
    y: &mut [E],
    incy: usize,
) -> Result<()> {
    check_vector("swap", "x", n, x.len(), incx)?;
    check_vector("swap", "y", n, y.len(), incy)?;
    for_each_pair_mut(cfg, n, x, incx, y, incy, std::mem::swap);
    Ok(())
}

/// `x[i] = alpha * x[i]` with a real scalar (both parts for complex `x`).
pub fn scal<E: Element>(
    cfg: &EngineConfig,
    n: usize,
    alpha: E::Real,
    x: &mut [E],
    incx: usize,
) -> Result<()> {
    check_vector("scal", "x", n, x.len(), incx)?;
    for_each_mut(cfg, n, x, incx, |xi| *xi = xi.scale(alpha));
    Ok(())
}

/// `x[i] = alpha * x[i]` with a complex scalar (full complex multiply).
pub fn cscal<T: Real>(
    cfg: &EngineConfig,
    n: usize,
    alpha: Complex<T>,
    x: &mut [Complex<T>],
    incx: usize,
) -> Result<()> {
    check_vector("cscal", "x", n, x.len(), incx)?;
    for_each_mut(cfg, n, x, incx, |xi| *xi = alpha * *xi);
    Ok(())
}

/// `x[i] += alpha`, component-wise.
pub fn add<E: Element>(
    cfg: &EngineConfig,
    n: usize,
    alpha: E,
    x: &mut [E],
    incx: usize,
) -> Result<()> {
    check_vector("add", "x", n, x.len(), incx)?;
    for_each_mut(cfg, n, x, incx, |xi| *xi = *xi + alpha);
    Ok(())
}

/// `x[i].re += alpha`; imaginary parts are left alone.
pub fn add_re<E: Element>(
    cfg: &EngineConfig,
    n: usize,
    alpha: E::Real,
    x: &mut [E],
    incx: usize,
) -> Result<()> {
    check_vector("add", "x", n, x.len(), incx)?;
    for_each_mut(cfg, n, x, incx, |xi| *xi = xi.shift_re(alpha));
    Ok(())
}

/// `Σ x[i]*y[i]`.
pub fn dot<T: Real>(
    cfg: &EngineConfig,
    n: usize,
    x: &[T],
    incx: usize,
    y: &[T],
    incy: usize,
) -> Result<T> {
    check_vector("dot", "x", n, x.len(), incx)?;
    check_vector("dot", "y", n, y.len(), incy)?;
    Ok(map_reduce_pair(
        cfg,
        n,
        x,
        incx,
        y,
        incy,
        T::ZERO,
        |&a, &b| a * b,
        |a, b| a + b,
    ))
}

/// Complex-by-real dot: `re = Σ x.re*y`, `im = Σ x.im*y`.
pub fn cdot<T: Real>(
    cfg: &EngineConfig,
    n: usize,
    x: &[Complex<T>],
    incx: usize,
    y: &[T],
    incy: usize,
) -> Result<Complex<T>> {
    check_vector("cdot", "x", n, x.len(), incx)?;
    check_vector("cdot", "y", n, y.len(), incy)?;
    Ok(map_reduce_pair(
        cfg,
        n,
        x,
        incx,
        y,
        incy,
        Complex::ZERO,
        |a, &b| a.scale(b),
        |a, b| a + b,
    ))
}

/// Conjugated dot: `Σ conj(x[i]) * y[i]`.
pub fn dotc<T: Real>(
    cfg: &EngineConfig,
    n: usize,
    x: &[Complex<T>],
    incx: usize,
    y: &[Complex<T>],
    incy: usize,
) -> Result<Complex<T>> {
    check_vector("dotc", "x", n, x.len(), incx)?;
    check_vector("dotc", "y", n, y.len(), incy)?;
    Ok(map_reduce_pair(
        cfg,
        n,
        x,
        incx,
        y,
        incy,
        Complex::ZERO,
        |a, &b| a.conj() * b,
        |a, b| a + b,
    ))
}

/// Unconjugated dot: `Σ x[i] * y[i]`.
pub fn dotu<T: Real>(
    cfg: &EngineConfig,
    n: usize,
    x: &[Complex<T>],
    incx: usize,
    y: &[Complex<T>],
    incy: usize,
) -> Result<Complex<T>> {
    check_vector("dotu", "x", n, x.len(), incx)?;
    check_vector("dotu", "y", n, y.len(), incy)?;
    Ok(map_reduce_pair(
        cfg,
        n,
        x,
        incx,
        y,
        incy,
        Complex::ZERO,
        |&a, &b| a * b,
        |a, b| a + b,
    ))
}

/// `Σ cabs1(x[i])`: `Σ |x|` for reals, `Σ (|re| + |im|)` for complex.
pub fn asum<E: Element>(cfg: &EngineConfig, n: usize, x: &[E], incx: usize) -> Result<E::Real> {
    check_vector("asum", "x", n, x.len(), incx)?;
    Ok(map_reduce(
        cfg,
        n,
        x,
        incx,
        <E::Real as Real>::ZERO,
        |v| v.cabs1(),
        |a, b| a + b,
    ))
}

/// `sqrt(Σ cabs1(x[i])²)`.
///
/// For real vectors this is the Euclidean norm. Complex vectors use the
/// L1 magnitude `|re| + |im|` per element.
pub fn nrm2<E: Element>(cfg: &EngineConfig, n: usize, x: &[E], incx: usize) -> Result<E::Real> {
    check_vector("nrm2", "x", n, x.len(), incx)?;
    let sum = map_reduce(
        cfg,
        n,
        x,
        incx,
        <E::Real as Real>::ZERO,
        |v| {
            let m = v.cabs1();
            m * m
        },
        |a, b| a + b,
    );
    Ok(sum.sqrt())
}

/// Index of the first element with the largest `cabs1`.
pub fn iamax<E: Element>(n: usize, x: &[E], incx: usize) -> Result<usize> {
    check_vector("amax", "x", n, x.len(), incx)?;
    Ok(extremum(n, x, incx, |candidate, best| candidate > best))
}

/// Index of the first element with the smallest `cabs1`.
pub fn iamin<E: Element>(n: usize, x: &[E], incx: usize) -> Result<usize> {
    check_vector("amin", "x", n, x.len(), incx)?;
    Ok(extremum(n, x, incx, |candidate, best| candidate < best))
}

/// Sequential scan; `better` is strict so the first occurrence wins ties.
fn extremum<E, F>(n: usize, x: &[E], incx: usize, better: F) -> usize
where
    E: Element,
    F: Fn(E::Real, E::Real) -> bool,
{
    let mut best_idx = 0;
    let mut best = x[0].cabs1();
    for (i, v) in x.iter().step_by(incx).take(n).enumerate().skip(1) {
        let m = v.cabs1();
        if better(m, best) {
            best_idx = i;
            best = m;
        }
    }
    best_idx
}

/// Plane rotation, applied symmetrically:
///
/// ```text
/// x[i] = c*x[i] + s*y[i]
/// y[i] = c*y[i] + s*x[i]
/// ```
///
/// Complex elements are rotated component-wise.
#[allow(clippy::too_many_arguments)]
pub fn rot<E: Element>(
    cfg: &EngineConfig,
    n: usize,
    x: &mut [E],
    incx: usize,
    y: &mut [E],
    incy: usize,
    c: E::Real,
    s: E::Real,
) -> Result<()> {
    check_vector("rot", "x", n, x.len(), incx)?;
    check_vector("rot", "y", n, y.len(), incy)?;
    for_each_pair_mut(cfg, n, x, incx, y, incy, |xi, yi| {
        let (xv, yv) = (*xi, *yi);
        *xi = xv.scale(c) + yv.scale(s);
        *yi = yv.scale(c) + xv.scale(s);
    });
    Ok(())
}
