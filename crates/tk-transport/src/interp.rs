//! Three-point interpolation in ln T*.

use crate::tables::{GRID_LEN, TSTAR_GRID};

/// Number of grid rows used by one interpolation.
pub const WINDOW: usize = 3;

/// Highest permitted window start. The last grid row is never part of a
/// lookup window; the top window is rows 33..=35.
const LAST_WINDOW_START: usize = GRID_LEN - WINDOW - 1;

/// Quadratic through three unequally spaced points, evaluated at `x0`.
///
/// Newton form anchored on the middle node:
/// `a·(x0−x₀)(x0−x₁) + ((y₁−y₀)/(x₁−x₀))·(x0−x₁) + y₁`.
pub fn quad_interp(x0: f64, x: &[f64; 3], y: &[f64; 3]) -> f64 {
    let dx21 = x[1] - x[0];
    let dx32 = x[2] - x[1];
    let dx31 = dx21 + dx32;
    let dy32 = y[2] - y[1];
    let dy21 = y[1] - y[0];
    let a = (dx21 * dy32 - dy21 * dx32) / (dx21 * dx31 * dx32);
    a * (x0 - x[0]) * (x0 - x[1]) + (dy21 / dx21) * (x0 - x[1]) + y[1]
}

/// First grid row of the interpolation window for reduced temperature `ts`.
///
/// Scans for the first grid point strictly above `ts` and starts the window
/// one row below it, clamped so the window stays inside the table.
pub fn window_start(ts: f64) -> usize {
    let above = TSTAR_GRID
        .iter()
        .position(|&grid| ts < grid)
        .unwrap_or(GRID_LEN);
    above.saturating_sub(1).min(LAST_WINDOW_START)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use tk_core::{Tolerances, nearly_equal};

    proptest! {
        #[test]
        fn interpolant_hits_its_nodes(
            x0 in -5.0_f64..5.0,
            d1 in 0.05_f64..3.0,
            d2 in 0.05_f64..3.0,
            y in prop::array::uniform3(-10.0_f64..10.0),
        ) {
            let x = [x0, x0 + d1, x0 + d1 + d2];
            let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
            for k in 0..3 {
                prop_assert!(nearly_equal(quad_interp(x[k], &x, &y), y[k], tol));
            }
            // The middle node is reproduced bit for bit.
            prop_assert_eq!(quad_interp(x[1], &x, &y), y[1]);
        }
    }
}
