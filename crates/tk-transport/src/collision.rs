//! Collision integrals from the Monchick–Mason tables.
//!
//! Values at arbitrary (T*, δ*) are produced in two stages. At every tabulated
//! T* the δ* dependence is replaced by a polynomial fit (built once, in
//! [`CollisionIntegrals::new`]). A lookup then evaluates three neighbouring
//! rows and interpolates quadratically in ln T*. For δ* = 0 the raw first
//! column is used and the fits are bypassed.
//!
//! The same row values can also be condensed into a single polynomial in
//! ln T* spanning a caller-chosen temperature window, for use in compact
//! transport correlations.

use std::ops::RangeInclusive;

use tk_core::{PolyFit, Weights, horner, polyfit};
use tracing::{debug, info, warn};

use crate::error::{TransportError, TransportResult};
use crate::interp::{WINDOW, quad_interp, window_start};
use crate::tables::{CollisionQuantity, DELTA_STAR, GRID_LEN, TSTAR_GRID};

/// Degree of the per-row fits across δ*.
pub const SHAPE_FIT_DEGREE: usize = 6;

/// Coefficients of a row fit that enter a lookup. The degree-6 term of the
/// row fit is not evaluated.
const SHAPE_EVAL_TERMS: usize = 6;

/// RMS above which a cross-temperature fit is reported as poor.
const POOR_FIT_RMS: f64 = 0.01;

/// Inclusive range of grid rows used by the cross-temperature fits.
///
/// Always satisfies `nmin < nmax <= GRID_LEN - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitWindow {
    nmin: usize,
    nmax: usize,
}

impl FitWindow {
    /// The whole grid.
    pub const FULL: FitWindow = FitWindow {
        nmin: 0,
        nmax: GRID_LEN - 1,
    };

    /// Window bracketing `[ts_min, ts_max]`.
    ///
    /// The lower edge is the last grid point below `ts_min`, the upper edge the
    /// grid point following the last one below `ts_max`. Bounds that leave
    /// the table, or that do not produce a non-empty window, give
    /// [`FitWindow::FULL`].
    pub fn from_bounds(ts_min: f64, ts_max: f64) -> Self {
        let mut nmin = None;
        let mut nmax = None;
        for (n, &grid) in TSTAR_GRID.iter().enumerate() {
            if ts_min > grid {
                nmin = Some(n);
            }
            if ts_max > grid {
                nmax = Some(n + 1);
            }
        }
        match (nmin, nmax) {
            (Some(lo), Some(hi)) if lo < hi && hi < GRID_LEN => FitWindow { nmin: lo, nmax: hi },
            _ => FitWindow::FULL,
        }
    }

    pub fn nmin(&self) -> usize {
        self.nmin
    }

    pub fn nmax(&self) -> usize {
        self.nmax
    }

    /// Number of grid rows in the window.
    pub fn len(&self) -> usize {
        self.nmax - self.nmin + 1
    }

    /// A window always holds at least two rows.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn rows(&self) -> RangeInclusive<usize> {
        self.nmin..=self.nmax
    }

    /// Reduced temperatures at the window edges.
    pub fn tstar_bounds(&self) -> (f64, f64) {
        (TSTAR_GRID[self.nmin], TSTAR_GRID[self.nmax])
    }
}

/// Per-row δ* fits for one quantity.
#[derive(Debug, Clone)]
struct ShapeFits {
    rows: Vec<PolyFit>,
    max_rms: f64,
}

impl ShapeFits {
    fn build(quantity: CollisionQuantity, log_level: u8) -> TransportResult<Self> {
        let mut rows = Vec::with_capacity(GRID_LEN);
        let mut max_rms: f64 = 0.0;
        for (i, &tstar) in TSTAR_GRID.iter().enumerate() {
            let fit = polyfit(
                &DELTA_STAR,
                quantity.row(i),
                Weights::Uniform,
                SHAPE_FIT_DEGREE,
            )
            .map_err(|source| TransportError::Fit {
                quantity: quantity.label(),
                source,
            })?;
            if log_level > 3 {
                debug!(
                    quantity = quantity.label(),
                    tstar,
                    coeffs = ?fit.coeffs,
                    rms = fit.rms,
                    "delta* fit"
                );
            }
            max_rms = max_rms.max(fit.rms);
            rows.push(fit);
        }
        Ok(Self { rows, max_rms })
    }
}

/// Cross-temperature fits of A*, B* and C*, coefficients in powers of ln T*.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioFits {
    pub astar: Vec<f64>,
    pub bstar: Vec<f64>,
    pub cstar: Vec<f64>,
}

/// Initialised collision integral tables.
///
/// Construction performs all fitting; afterwards the value is immutable and
/// every lookup is a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct CollisionIntegrals {
    log_tstar: [f64; GRID_LEN],
    omega22: ShapeFits,
    astar: ShapeFits,
    bstar: ShapeFits,
    cstar: ShapeFits,
    window: FitWindow,
    log_level: u8,
}

impl CollisionIntegrals {
    /// Fit every table row across δ* and fix the cross-temperature window.
    ///
    /// `log_level` controls diagnostics: above 0 the window and the maximum
    /// RMS error per quantity are reported, above 3 every row fit is dumped.
    pub fn new(ts_min: f64, ts_max: f64, log_level: u8) -> TransportResult<Self> {
        let window = FitWindow::from_bounds(ts_min, ts_max);
        if log_level > 0 {
            let (lo, hi) = window.tstar_bounds();
            info!(tstar_min = lo, tstar_max = hi, "collision integral fit window");
        }

        let log_tstar = TSTAR_GRID.map(f64::ln);
        let omega22 = ShapeFits::build(CollisionQuantity::Omega22, log_level)?;
        let astar = ShapeFits::build(CollisionQuantity::AStar, log_level)?;
        let bstar = ShapeFits::build(CollisionQuantity::BStar, log_level)?;
        let cstar = ShapeFits::build(CollisionQuantity::CStar, log_level)?;

        if log_level > 0 {
            info!(
                omega22 = omega22.max_rms,
                astar = astar.max_rms,
                bstar = bstar.max_rms,
                cstar = cstar.max_rms,
                "max RMS errors in fits vs. delta*"
            );
        }

        Ok(Self {
            log_tstar,
            omega22,
            astar,
            bstar,
            cstar,
            window,
            log_level,
        })
    }

    pub fn window(&self) -> FitWindow {
        self.window
    }

    /// Largest RMS residual over the δ* fits of `quantity`.
    pub fn max_shape_rms(&self, quantity: CollisionQuantity) -> f64 {
        self.shape_fits(quantity).max_rms
    }

    /// δ* fit of `quantity` at grid row `row`, if the row exists.
    pub fn shape_fit(&self, quantity: CollisionQuantity, row: usize) -> Option<&PolyFit> {
        self.shape_fits(quantity).rows.get(row)
    }

    /// Reduced collision integral Ω(2,2)*.
    pub fn omega22(&self, ts: f64, deltastar: f64) -> f64 {
        self.value(CollisionQuantity::Omega22, ts, deltastar)
    }

    pub fn astar(&self, ts: f64, deltastar: f64) -> f64 {
        self.value(CollisionQuantity::AStar, ts, deltastar)
    }

    pub fn bstar(&self, ts: f64, deltastar: f64) -> f64 {
        self.value(CollisionQuantity::BStar, ts, deltastar)
    }

    pub fn cstar(&self, ts: f64, deltastar: f64) -> f64 {
        self.value(CollisionQuantity::CStar, ts, deltastar)
    }

    /// Interpolated value of `quantity` at reduced temperature `ts`.
    ///
    /// Temperatures outside the table use the nearest boundary window.
    pub fn value(&self, quantity: CollisionQuantity, ts: f64, deltastar: f64) -> f64 {
        let i1 = window_start(ts);
        let x: [f64; WINDOW] = std::array::from_fn(|k| self.log_tstar[i1 + k]);
        let y: [f64; WINDOW] = std::array::from_fn(|k| self.row_value(quantity, i1 + k, deltastar));
        quad_interp(ts.ln(), &x, &y)
    }

    /// Polynomial in ln T* for Ω(2,2)* over the fit window.
    pub fn fit_omega22(&self, degree: usize, deltastar: f64) -> TransportResult<Vec<f64>> {
        let fit = self.fit_quantity(CollisionQuantity::Omega22, degree, deltastar)?;
        if self.log_level > 0 && fit.rms > POOR_FIT_RMS {
            warn!(rms = fit.rms, deltastar, "poor omega22 fit");
        }
        Ok(fit.coeffs)
    }

    /// Polynomials in ln T* for A*, B* and C* over the fit window.
    pub fn fit(&self, degree: usize, deltastar: f64) -> TransportResult<RatioFits> {
        let a = self.fit_quantity(CollisionQuantity::AStar, degree, deltastar)?;
        let b = self.fit_quantity(CollisionQuantity::BStar, degree, deltastar)?;
        let c = self.fit_quantity(CollisionQuantity::CStar, degree, deltastar)?;

        if self.log_level > 2 {
            for (quantity, fit) in [("astar", &a), ("bstar", &b), ("cstar", &c)] {
                debug!(quantity, deltastar, coeffs = ?fit.coeffs, "tstar fit");
                if fit.rms > POOR_FIT_RMS {
                    warn!(quantity, rms = fit.rms, deltastar, "poor tstar fit");
                }
            }
        }

        Ok(RatioFits {
            astar: a.coeffs,
            bstar: b.coeffs,
            cstar: c.coeffs,
        })
    }

    /// Fit `quantity` across the window rows at fixed δ*.
    pub fn fit_quantity(
        &self,
        quantity: CollisionQuantity,
        degree: usize,
        deltastar: f64,
    ) -> TransportResult<PolyFit> {
        if !deltastar.is_finite() {
            return Err(TransportError::InvalidArg {
                what: "deltastar must be finite",
            });
        }
        let x = &self.log_tstar[self.window.rows()];
        let y: Vec<f64> = self
            .window
            .rows()
            .map(|row| self.row_value(quantity, row, deltastar))
            .collect();
        polyfit(x, &y, Weights::Uniform, degree).map_err(|source| TransportError::Fit {
            quantity: quantity.label(),
            source,
        })
    }

    fn row_value(&self, quantity: CollisionQuantity, row: usize, deltastar: f64) -> f64 {
        if deltastar == 0.0 {
            quantity.spherical(row)
        } else {
            let coeffs = &self.shape_fits(quantity).rows[row].coeffs;
            horner(deltastar, &coeffs[..SHAPE_EVAL_TERMS])
        }
    }

    fn shape_fits(&self, quantity: CollisionQuantity) -> &ShapeFits {
        match quantity {
            CollisionQuantity::Omega22 => &self.omega22,
            CollisionQuantity::AStar => &self.astar,
            CollisionQuantity::BStar => &self.bstar,
            CollisionQuantity::CStar => &self.cstar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tk_core::{Tolerances, nearly_equal};

    fn table() -> CollisionIntegrals {
        CollisionIntegrals::new(0.5, 10.0, 0).unwrap()
    }

    #[test]
    fn window_brackets_requested_range() {
        let w = FitWindow::from_bounds(0.5, 10.0);
        assert_eq!((w.nmin(), w.nmax()), (3, 24));
        assert_eq!(w.tstar_bounds(), (0.4, 10.0));
        assert_eq!(w.len(), 22);
    }

    #[test]
    fn window_falls_back_to_full_range() {
        // Reversed bounds.
        assert_eq!(FitWindow::from_bounds(10.0, 0.5), FitWindow::FULL);
        // Lower bound at or below the first grid point.
        assert_eq!(FitWindow::from_bounds(0.05, 10.0), FitWindow::FULL);
        // Upper bound beyond the last grid point.
        assert_eq!(FitWindow::from_bounds(0.5, 200.0), FitWindow::FULL);
        // Non-finite input.
        assert_eq!(FitWindow::from_bounds(f64::NAN, f64::NAN), FitWindow::FULL);
        assert_eq!((FitWindow::FULL.nmin(), FitWindow::FULL.nmax()), (0, 36));
    }

    #[test]
    fn init_records_the_fallback_window() {
        let ci = CollisionIntegrals::new(20.0, 2.0, 0).unwrap();
        assert_eq!(ci.window(), FitWindow::FULL);
    }

    #[test]
    fn one_fit_per_grid_row() {
        let ci = table();
        for q in CollisionQuantity::ALL {
            assert!(ci.shape_fit(q, GRID_LEN - 1).is_some());
            assert!(ci.shape_fit(q, GRID_LEN).is_none());
            assert_eq!(
                ci.shape_fit(q, 0).unwrap().coeffs.len(),
                SHAPE_FIT_DEGREE + 1
            );
            assert!(ci.max_shape_rms(q).is_finite());
        }
    }

    #[test]
    fn tabulated_point_returns_raw_value() {
        let ci = table();
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-12,
        };
        assert!(nearly_equal(ci.omega22(1.0, 0.0), 1.5929, tol));
        assert!(nearly_equal(ci.astar(1.0, 0.0), 1.1063, tol));
        assert!(nearly_equal(ci.bstar(1.0, 0.0), 1.1919, tol));
        assert!(nearly_equal(ci.cstar(1.0, 0.0), 0.8363, tol));
    }

    #[test]
    fn spherical_column_bypasses_fits() {
        let ci = table();
        for (row, &ts) in TSTAR_GRID.iter().enumerate().skip(1).take(30) {
            let expected = CollisionQuantity::Omega22.spherical(row);
            assert!(
                nearly_equal(ci.omega22(ts, 0.0), expected, Tolerances::default()),
                "row {row}"
            );
        }
    }

    #[test]
    fn omega22_decreases_with_temperature() {
        let ci = table();
        let mut prev = f64::INFINITY;
        for ts in [0.3, 0.7, 1.5, 3.0, 8.0, 20.0, 60.0] {
            let v = ci.omega22(ts, 0.0);
            assert!(v < prev, "omega22({ts}) = {v}");
            prev = v;
        }
    }

    #[test]
    fn fits_reject_degree_beyond_window() {
        let ci = table();
        let n = ci.window().len();
        assert!(matches!(
            ci.fit_omega22(n, 0.0),
            Err(TransportError::Fit {
                quantity: "omega22",
                ..
            })
        ));
    }

    #[test]
    fn fits_reject_non_finite_deltastar() {
        let ci = table();
        for deltastar in [f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ci.fit(4, deltastar),
                Err(TransportError::InvalidArg { .. })
            ));
            assert!(matches!(
                ci.fit_omega22(4, deltastar),
                Err(TransportError::InvalidArg { .. })
            ));
        }
        assert!(ci.fit(4, 0.5).is_ok());
    }
}
