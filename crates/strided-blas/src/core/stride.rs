//! Strided-vector validation and loop drivers.
//!
//! A strided vector is `(buffer, n, inc)`: element `i` lives at
//! `buffer[i * inc]`. The drivers below walk one or two such vectors either
//! serially or on the rayon pool. The parallel path splits the buffer into
//! `inc`-sized chunks; element `i` is the first entry of chunk `i`, so
//! workers always own disjoint elements.

use super::config::EngineConfig;
use crate::error::{BlasError, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Number of buffer entries spanned by `n > 0` elements at stride `inc`.
#[inline(always)]
pub(crate) fn span(n: usize, inc: usize) -> usize {
    (n - 1) * inc + 1
}

/// Validate a strided operand before any access.
///
/// Rejects `n == 0`, `inc == 0`, and buffers shorter than
/// `(n - 1) * inc + 1`.
pub fn check_vector(op: &'static str, name: &str, n: usize, len: usize, inc: usize) -> Result<()> {
    if n == 0 {
        return Err(BlasError::InvalidDimension(format!(
            "{}: vector length must be positive",
            op
        )));
    }
    if inc == 0 {
        return Err(BlasError::InvalidDimension(format!(
            "{}: stride of {} must be positive",
            op, name
        )));
    }
    let needed = (n - 1)
        .checked_mul(inc)
        .and_then(|v| v.checked_add(1))
        .ok_or_else(|| {
            BlasError::InvalidDimension(format!("{}: {} elements at stride {} overflow", op, n, inc))
        })?;
    if len < needed {
        return Err(BlasError::InvalidDimension(format!(
            "{}: {} holds {} elements, {} at stride {} needs {}",
            op, name, len, n, inc, needed
        )));
    }
    Ok(())
}

/// Apply `f` to every element of one strided vector.
pub(crate) fn for_each_mut<E, F>(cfg: &EngineConfig, n: usize, x: &mut [E], incx: usize, f: F)
where
    E: Send,
    F: Fn(&mut E) + Send + Sync,
{
    let x = &mut x[..span(n, incx)];

    if cfg.runs_parallel(n) {
        #[cfg(feature = "parallel")]
        {
            x.par_chunks_mut(incx)
                .with_min_len(cfg.chunk_size)
                .for_each(|xc| f(&mut xc[0]));
            return;
        }
    }

    x.iter_mut().step_by(incx).for_each(f);
}

/// Apply `f` to paired elements of a read-only and a mutable vector.
pub(crate) fn for_each_pair<X, Y, F>(
    cfg: &EngineConfig,
    n: usize,
    x: &[X],
    incx: usize,
    y: &mut [Y],
    incy: usize,
    f: F,
) where
    X: Sync,
    Y: Send,
    F: Fn(&X, &mut Y) + Send + Sync,
{
    let x = &x[..span(n, incx)];
    let y = &mut y[..span(n, incy)];

    if cfg.runs_parallel(n) {
        #[cfg(feature = "parallel")]
        {
            x.par_chunks(incx)
                .zip(y.par_chunks_mut(incy))
                .with_min_len(cfg.chunk_size)
                .for_each(|(xc, yc)| f(&xc[0], &mut yc[0]));
            return;
        }
    }

    x.iter()
        .step_by(incx)
        .zip(y.iter_mut().step_by(incy))
        .for_each(|(xi, yi)| f(xi, yi));
}

/// Apply `f` to paired elements of two mutable vectors.
pub(crate) fn for_each_pair_mut<E, F>(
    cfg: &EngineConfig,
    n: usize,
    x: &mut [E],
    incx: usize,
    y: &mut [E],
    incy: usize,
    f: F,
) where
    E: Send,
    F: Fn(&mut E, &mut E) + Send + Sync,
{
    let x = &mut x[..span(n, incx)];
    let y = &mut y[..span(n, incy)];

    if cfg.runs_parallel(n) {
        #[cfg(feature = "parallel")]
        {
            x.par_chunks_mut(incx)
                .zip(y.par_chunks_mut(incy))
                .with_min_len(cfg.chunk_size)
                .for_each(|(xc, yc)| f(&mut xc[0], &mut yc[0]));
            return;
        }
    }

    x.iter_mut()
        .step_by(incx)
        .zip(y.iter_mut().step_by(incy))
        .for_each(|(xi, yi)| f(xi, yi));
}

/// Map every element of one vector and fold the results.
///
/// On the parallel path each worker folds its own range into a partial
/// starting at `identity`; the partials are then combined with `combine`.
pub(crate) fn map_reduce<X, A, M, C>(
    cfg: &EngineConfig,
    n: usize,
    x: &[X],
    incx: usize,
    identity: A,
    map: M,
    combine: C,
) -> A
where
    X: Sync,
    A: Copy + Send + Sync,
    M: Fn(&X) -> A + Send + Sync,
    C: Fn(A, A) -> A + Send + Sync,
{
    let x = &x[..span(n, incx)];

    if cfg.runs_parallel(n) {
        #[cfg(feature = "parallel")]
        {
            return x
                .par_chunks(incx)
                .with_min_len(cfg.chunk_size)
                .fold(|| identity, |acc, xc| combine(acc, map(&xc[0])))
                .reduce(|| identity, &combine);
        }
    }

    x.iter()
        .step_by(incx)
        .fold(identity, |acc, xi| combine(acc, map(xi)))
}

/// Map paired elements of two vectors and fold the results.
#[allow(clippy::too_many_arguments)]
pub(crate) fn map_reduce_pair<X, Y, A, M, C>(
    cfg: &EngineConfig,
    n: usize,
    x: &[X],
    incx: usize,
    y: &[Y],
    incy: usize,
    identity: A,
    map: M,
    combine: C,
) -> A
where
    X: Sync,
    Y: Sync,
    A: Copy + Send + Sync,
    M: Fn(&X, &Y) -> A + Send + Sync,
    C: Fn(A, A) -> A + Send + Sync,
{
    let x = &x[..span(n, incx)];
    let y = &y[..span(n, incy)];

    if cfg.runs_parallel(n) {
        #[cfg(feature = "parallel")]
        {
            return x
                .par_chunks(incx)
                .zip(y.par_chunks(incy))
                .with_min_len(cfg.chunk_size)
                .fold(|| identity, |acc, (xc, yc)| combine(acc, map(&xc[0], &yc[0])))
                .reduce(|| identity, &combine);
        }
    }

    x.iter()
        .step_by(incx)
        .zip(y.iter().step_by(incy))
        .fold(identity, |acc, (xi, yi)| combine(acc, map(xi, yi)))
}
