//! Integration tests for the collision integral tables.

use tk_core::{Tolerances, horner, nearly_equal};
use tk_transport::{CollisionIntegrals, CollisionQuantity, FitWindow, TSTAR_GRID};

fn relative_gap(a: f64, b: f64) -> f64 {
    (a - b).abs() / a.abs().max(b.abs())
}

#[test]
fn lookups_are_continuous_across_window_switches() {
    let ci = CollisionIntegrals::new(0.5, 50.0, 0).unwrap();

    // The interpolation window moves whenever T* crosses a grid point.
    for &ts in &TSTAR_GRID[1..=33] {
        for deltastar in [0.0, 0.5, 1.75] {
            for q in CollisionQuantity::ALL {
                let below = ci.value(q, ts * (1.0 - 1e-9), deltastar);
                let above = ci.value(q, ts * (1.0 + 1e-9), deltastar);
                assert!(
                    relative_gap(below, above) < 1e-4,
                    "{} jumps at T*={ts}, delta*={deltastar}: {below} vs {above}",
                    q.label()
                );
            }
        }
    }
}

#[test]
fn out_of_range_temperatures_use_boundary_windows() {
    let ci = CollisionIntegrals::new(0.5, 50.0, 0).unwrap();
    for q in CollisionQuantity::ALL {
        let low = ci.value(q, 0.05, 0.0);
        let high = ci.value(q, 250.0, 0.0);
        assert!(low.is_finite() && low > 0.0, "{} at low T*", q.label());
        assert!(high.is_finite() && high > 0.0, "{} at high T*", q.label());
    }
}

#[test]
fn omega22_fit_tracks_the_table() {
    let ci = CollisionIntegrals::new(0.5, 10.0, 0).unwrap();
    let window = ci.window();
    assert_eq!(window, FitWindow::from_bounds(0.5, 10.0));

    let coeffs = ci.fit_omega22(6, 0.0).unwrap();
    assert_eq!(coeffs.len(), 7);

    for row in window.rows() {
        let ts = TSTAR_GRID[row];
        let fitted = horner(ts.ln(), &coeffs);
        let table = CollisionQuantity::Omega22.spherical(row);
        assert!(
            relative_gap(fitted, table) < 1e-2,
            "T*={ts}: fit {fitted} vs table {table}"
        );
    }
}

#[test]
fn ratio_fits_track_the_table() {
    let ci = CollisionIntegrals::new(1.0, 40.0, 0).unwrap();
    let fits = ci.fit(4, 0.0).unwrap();
    assert_eq!(fits.astar.len(), 5);
    assert_eq!(fits.bstar.len(), 5);
    assert_eq!(fits.cstar.len(), 5);

    for row in ci.window().rows() {
        let x = TSTAR_GRID[row].ln();
        for (q, coeffs) in [
            (CollisionQuantity::AStar, &fits.astar),
            (CollisionQuantity::BStar, &fits.bstar),
            (CollisionQuantity::CStar, &fits.cstar),
        ] {
            let gap = relative_gap(horner(x, coeffs), q.spherical(row));
            assert!(gap < 1e-2, "{} row {row}: gap {gap}", q.label());
        }
    }
}

#[test]
fn nonzero_deltastar_fits_follow_the_row_polynomials() {
    let ci = CollisionIntegrals::new(0.5, 10.0, 0).unwrap();
    let deltastar = 0.5;

    let fit = ci
        .fit_quantity(CollisionQuantity::Omega22, 6, deltastar)
        .unwrap();
    assert!(fit.rms < 0.05, "rms {}", fit.rms);

    // Samples are the interpolated values at the grid nodes.
    for row in ci.window().rows() {
        let ts = TSTAR_GRID[row];
        let sample = ci.omega22(ts, deltastar);
        assert!(relative_gap(fit.eval(ts.ln()), sample) < 5e-2, "T*={ts}");
    }

    let coarse = ci.fit_omega22(5, deltastar).unwrap();
    assert!(coarse.iter().all(|c| c.is_finite()));
}

#[test]
fn identical_bounds_give_identical_tables() {
    let a = CollisionIntegrals::new(0.5, 10.0, 0).unwrap();
    let b = CollisionIntegrals::new(0.5, 10.0, 4).unwrap();
    let tol = Tolerances::default();
    for ts in [0.3, 1.1, 7.7, 42.0] {
        assert!(nearly_equal(a.omega22(ts, 0.3), b.omega22(ts, 0.3), tol));
        assert!(nearly_equal(a.cstar(ts, 2.0), b.cstar(ts, 2.0), tol));
    }
}
