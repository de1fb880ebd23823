//! Rotation-parameter generation (`rotg`, `crotg`).
//!
//! Given `a`, `b` and a candidate rotation `(c, s)`, these routines compute
//!
//! ```text
//! r = c*a + b*s
//! z = s      if |a| > |b|
//!     1/c    else if c != 0
//!     1      otherwise
//! ```
//!
//! and overwrite `a <- r`, `b <- z`. The inputs must satisfy
//! `b*c - a*s == 0`; anything else is rejected with
//! [`BlasError::InvalidRotationInput`].

use crate::error::{BlasError, Result};
use crate::types::{Complex, Real};

/// Real rotation-parameter generation.
pub fn rotg<T: Real>(a: &mut T, b: &mut T, c: T, s: T) -> Result<()> {
    let r = c * *a + *b * s;
    let residual = *b * c - *a * s;
    if residual != T::ZERO {
        return Err(BlasError::InvalidRotationInput(format!(
            "b*c - a*s = {} (a = {}, b = {}, c = {}, s = {})",
            residual, a, b, c, s
        )));
    }

    let z = if a.abs() > b.abs() {
        s
    } else if c != T::ZERO {
        T::ONE / c
    } else {
        T::ONE
    };

    *a = r;
    *b = z;
    Ok(())
}

/// Complex rotation-parameter generation.
///
/// Cross terms use full complex multiplication; magnitudes use `cabs1`.
/// The fallback values of `z` (`1/c` and `1`) are real.
pub fn crotg<T: Real>(
    a: &mut Complex<T>,
    b: &mut Complex<T>,
    c: T,
    s: Complex<T>,
) -> Result<()> {
    let r = a.scale(c) + *b * s;
    let residual = b.scale(c) - *a * s;
    if !residual.is_zero() {
        return Err(BlasError::InvalidRotationInput(format!(
            "b*c - a*s = {} (a = {}, b = {}, c = {}, s = {})",
            residual, a, b, c, s
        )));
    }

    let z = if a.cabs1() > b.cabs1() {
        s
    } else if c != T::ZERO {
        Complex::new(T::ONE / c, T::ZERO)
    } else {
        Complex::ONE
    };

    *a = r;
    *b = z;
    Ok(())
}
