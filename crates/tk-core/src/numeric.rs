use crate::TkError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TkError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TkError::NonFinite { what, value: v })
    }
}

/// Like [`ensure_finite`], but also rejects zero and negative values.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, TkError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(TkError::NotPositive { what, value: v })
    }
}

/// Evaluate `c[0] + c[1]·x + … + c[n-1]·x^(n-1)` in Horner form.
///
/// An empty coefficient slice evaluates to zero.
pub fn horner(x: Real, coeffs: &[Real]) -> Real {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
