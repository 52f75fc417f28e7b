//! Weighted least-squares polynomial fitting.
//!
//! `polyfit` fits `y ≈ c[0] + c[1]·x + … + c[d]·x^d` to sampled data and
//! reports the weighted RMS residual alongside the coefficients. Coefficients
//! are returned in ascending powers so they can be fed straight to
//! [`crate::horner`].

use nalgebra::{DMatrix, DVector};

use crate::error::{TkError, TkResult};
use crate::numeric::{Real, ensure_finite, horner};

/// Singular values below this are treated as zero by the SVD solve.
const SVD_EPS: Real = 1e-13;

/// Sample weighting for [`polyfit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Weights<'a> {
    /// Every sample has weight one.
    Uniform,
    /// One non-negative weight per sample.
    Given(&'a [Real]),
}

impl<'a> Weights<'a> {
    /// Interpret a raw weight slice, where a leading `-1.0` requests uniform
    /// weighting and the rest of the slice is ignored.
    pub fn from_slice(w: &'a [Real]) -> Self {
        match w.first() {
            Some(&first) if first == -1.0 => Weights::Uniform,
            _ => Weights::Given(w),
        }
    }

    fn resolve(self, n: usize) -> TkResult<Vec<Real>> {
        match self {
            Weights::Uniform => Ok(vec![1.0; n]),
            Weights::Given(w) => {
                if w.len() != n {
                    return Err(TkError::FitInput {
                        what: "weight count must match sample count",
                    });
                }
                if w.iter().any(|wi| !wi.is_finite() || *wi < 0.0) {
                    return Err(TkError::FitInput {
                        what: "weights must be finite and non-negative",
                    });
                }
                if w.iter().sum::<Real>() <= 0.0 {
                    return Err(TkError::FitInput {
                        what: "weights must not all be zero",
                    });
                }
                Ok(w.to_vec())
            }
        }
    }
}

/// Result of a polynomial fit.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyFit {
    /// Coefficients in ascending powers, `degree + 1` of them.
    pub coeffs: Vec<Real>,
    /// Weighted RMS residual `sqrt(Σ wᵢ rᵢ² / Σ wᵢ)`.
    pub rms: Real,
}

impl PolyFit {
    /// Evaluate the fitted polynomial at `x`.
    pub fn eval(&self, x: Real) -> Real {
        horner(x, &self.coeffs)
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }
}

/// Fit a polynomial of exactly `degree` to the samples `(x[i], y[i])`.
///
/// The normal problem is solved through an SVD of the weighted Vandermonde
/// matrix. `degree` must be smaller than the number of samples.
pub fn polyfit(x: &[Real], y: &[Real], weights: Weights<'_>, degree: usize) -> TkResult<PolyFit> {
    let n = x.len();
    if y.len() != n {
        return Err(TkError::FitInput {
            what: "x and y sample counts differ",
        });
    }
    if n == 0 {
        return Err(TkError::FitInput {
            what: "polyfit needs at least one sample",
        });
    }
    if degree >= n {
        return Err(TkError::FitInput {
            what: "polynomial degree must be below the sample count",
        });
    }
    for (&xi, &yi) in x.iter().zip(y) {
        ensure_finite(xi, "polyfit abscissa")?;
        ensure_finite(yi, "polyfit ordinate")?;
    }

    let w = weights.resolve(n)?;
    let sw: Vec<Real> = w.iter().map(|wi| wi.sqrt()).collect();
    let ncoef = degree + 1;

    let a = DMatrix::from_fn(n, ncoef, |i, j| sw[i] * x[i].powi(j as i32));
    let b = DVector::from_fn(n, |i, _| sw[i] * y[i]);

    let svd = a.svd(true, true);
    let solution = svd.solve(&b, SVD_EPS).map_err(|_| TkError::Singular {
        what: "polyfit least-squares solve",
    })?;
    let coeffs: Vec<Real> = solution.iter().copied().collect();

    let mut sum_sq = 0.0;
    for i in 0..n {
        let r = y[i] - horner(x[i], &coeffs);
        sum_sq += w[i] * r * r;
    }
    let rms = ensure_finite((sum_sq / w.iter().sum::<Real>()).sqrt(), "polyfit rms")?;

    Ok(PolyFit { coeffs, rms })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-9,
            rel: 1e-9,
        }
    }

    #[test]
    fn recovers_exact_cubic() {
        let truth = [0.5, -1.25, 0.75, 0.125];
        let x: Vec<f64> = (0..8).map(|i| -1.0 + 0.4 * i as f64).collect();
        let y: Vec<f64> = x.iter().map(|&xi| horner(xi, &truth)).collect();

        let fit = polyfit(&x, &y, Weights::Uniform, 3).unwrap();
        assert_eq!(fit.degree(), 3);
        for (c, t) in fit.coeffs.iter().zip(truth) {
            assert!(nearly_equal(*c, t, tol()), "{c} vs {t}");
        }
        assert!(fit.rms < 1e-10);
    }

    #[test]
    fn straight_line_through_noisy_points_has_residual() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.0, 1.1, 1.9, 3.0];
        let fit = polyfit(&x, &y, Weights::Uniform, 1).unwrap();
        assert!(fit.rms > 0.0);
        assert!((fit.coeffs[1] - 1.0).abs() < 0.1);
    }

    #[test]
    fn leading_minus_one_means_uniform() {
        let w = [-1.0, 7.0, 3.0];
        assert_eq!(Weights::from_slice(&w), Weights::Uniform);
        let w = [2.0, 7.0, 3.0];
        assert_eq!(Weights::from_slice(&w), Weights::Given(&w));
    }

    #[test]
    fn zero_weight_sample_is_ignored() {
        // The outlier at x=3 carries no weight, so the line is exact.
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 5.0, 100.0];
        let w = [1.0, 1.0, 1.0, 0.0];
        let fit = polyfit(&x, &y, Weights::Given(&w), 1).unwrap();
        assert!(nearly_equal(fit.coeffs[0], 1.0, tol()));
        assert!(nearly_equal(fit.coeffs[1], 2.0, tol()));
        assert!(fit.rms < 1e-9);
    }

    #[test]
    fn rejects_bad_input() {
        let x = [0.0, 1.0, 2.0];
        assert!(polyfit(&x, &[1.0, 2.0], Weights::Uniform, 1).is_err());
        assert!(polyfit(&x, &[1.0, 2.0, 3.0], Weights::Uniform, 3).is_err());
        assert!(polyfit(&x, &[1.0, f64::NAN, 3.0], Weights::Uniform, 1).is_err());
        assert!(polyfit(&x, &[1.0, 2.0, 3.0], Weights::Given(&[1.0, -1.0, 1.0]), 1).is_err());
        assert!(polyfit(&[], &[], Weights::Uniform, 0).is_err());
    }
}
