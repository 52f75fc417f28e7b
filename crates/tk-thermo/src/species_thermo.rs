//! Reference-state thermodynamics of individual species.
//!
//! The standard-state models only correct reference-state properties for
//! pressure; the reference values themselves come from a [`SpeciesThermo`]
//! implementation.

use serde::Serialize;
use tk_core::constants::{GAS_CONSTANT, ONE_ATM};
use tk_core::ensure_positive;

use crate::error::{ThermoError, ThermoResult};

/// Dimensionless reference-state properties at one temperature.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ReferenceState {
    /// cp⁰/R
    pub cp_r: f64,
    /// H⁰/RT
    pub h_rt: f64,
    /// S⁰/R
    pub s_r: f64,
}

impl ReferenceState {
    /// G⁰/RT = H⁰/RT − S⁰/R
    pub fn g_rt(&self) -> f64 {
        self.h_rt - self.s_r
    }
}

/// Source of reference-state properties for every species of a phase.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait SpeciesThermo: Send + Sync {
    /// Reference pressure [Pa] of species `k`.
    fn ref_pressure(&self, k: usize) -> ThermoResult<f64>;

    /// Lowest temperature [K] at which species `k` is valid.
    fn min_temp(&self, k: usize) -> ThermoResult<f64>;

    /// Highest temperature [K] at which species `k` is valid.
    fn max_temp(&self, k: usize) -> ThermoResult<f64>;

    /// Evaluate the reference state of species `k` at temperature `t` [K].
    fn update_one(&self, k: usize, t: f64) -> ThermoResult<ReferenceState>;
}

/// Constant heat capacity parameters of one species.
///
/// Molar units: h0 in J/kmol, s0 and cp0 in J/(kmol·K).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstCpParams {
    pub t0: f64,
    pub h0: f64,
    pub s0: f64,
    pub cp0: f64,
    pub t_min: f64,
    pub t_max: f64,
    pub p_ref: f64,
}

impl ConstCpParams {
    /// Parameters valid over `[t_min, t_max]` at one atmosphere.
    pub fn new(t0: f64, h0: f64, s0: f64, cp0: f64) -> Self {
        Self {
            t0,
            h0,
            s0,
            cp0,
            t_min: 0.0,
            t_max: f64::INFINITY,
            p_ref: ONE_ATM,
        }
    }

    pub fn with_limits(mut self, t_min: f64, t_max: f64) -> Self {
        self.t_min = t_min;
        self.t_max = t_max;
        self
    }

    pub fn with_ref_pressure(mut self, p_ref: f64) -> Self {
        self.p_ref = p_ref;
        self
    }

    fn validate(&self) -> ThermoResult<()> {
        ensure_positive(self.t0, "reference temperature")?;
        ensure_positive(self.p_ref, "reference pressure")?;
        if !self.h0.is_finite() || !self.s0.is_finite() || !self.cp0.is_finite() {
            return Err(ThermoError::config("constant-cp parameters must be finite"));
        }
        if self.t_min.is_nan() || self.t_max.is_nan() || self.t_min >= self.t_max {
            return Err(ThermoError::config(format!(
                "temperature limits [{}, {}] are empty",
                self.t_min, self.t_max
            )));
        }
        Ok(())
    }

    pub fn evaluate(&self, t: f64) -> ReferenceState {
        let rt = GAS_CONSTANT * t;
        ReferenceState {
            cp_r: self.cp0 / GAS_CONSTANT,
            h_rt: (self.h0 + self.cp0 * (t - self.t0)) / rt,
            s_r: (self.s0 + self.cp0 * (t / self.t0).ln()) / GAS_CONSTANT,
        }
    }
}

/// Species thermo with a temperature-independent heat capacity per species.
#[derive(Debug, Clone, Default)]
pub struct ConstCpThermo {
    species: Vec<ConstCpParams>,
}

impl ConstCpThermo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a species and return its index.
    pub fn add(&mut self, params: ConstCpParams) -> ThermoResult<usize> {
        params.validate()?;
        self.species.push(params);
        Ok(self.species.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    fn params(&self, k: usize) -> ThermoResult<&ConstCpParams> {
        self.species.get(k).ok_or(ThermoError::IndexOob {
            index: k,
            len: self.species.len(),
        })
    }
}

impl SpeciesThermo for ConstCpThermo {
    fn ref_pressure(&self, k: usize) -> ThermoResult<f64> {
        Ok(self.params(k)?.p_ref)
    }

    fn min_temp(&self, k: usize) -> ThermoResult<f64> {
        Ok(self.params(k)?.t_min)
    }

    fn max_temp(&self, k: usize) -> ThermoResult<f64> {
        Ok(self.params(k)?.t_max)
    }

    fn update_one(&self, k: usize, t: f64) -> ThermoResult<ReferenceState> {
        let t = ensure_positive(t, "temperature")?;
        Ok(self.params(k)?.evaluate(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tk_core::{Tolerances, nearly_equal};

    fn water() -> ConstCpParams {
        ConstCpParams::new(298.15, -2.858e8, 6.995e4, 7.53e4)
    }

    #[test]
    fn reference_point_reproduces_inputs() {
        let rs = water().evaluate(298.15);
        let rt = GAS_CONSTANT * 298.15;
        let tol = Tolerances::default();
        assert!(nearly_equal(rs.h_rt * rt, -2.858e8, tol));
        assert!(nearly_equal(rs.s_r * GAS_CONSTANT, 6.995e4, tol));
        assert!(nearly_equal(rs.cp_r * GAS_CONSTANT, 7.53e4, tol));
        assert_eq!(rs.g_rt(), rs.h_rt - rs.s_r);
    }

    #[test]
    fn enthalpy_grows_linearly_with_cp() {
        let p = water();
        let h = |t: f64| p.evaluate(t).h_rt * GAS_CONSTANT * t;
        let tol = Tolerances {
            abs: 1e-3,
            rel: 1e-10,
        };
        assert!(nearly_equal(h(398.15) - h(298.15), 100.0 * p.cp0, tol));
    }

    #[test]
    fn lookups_check_species_index() {
        let mut thermo = ConstCpThermo::new();
        let k = thermo
            .add(water().with_limits(273.16, 647.0).with_ref_pressure(1.0e5))
            .unwrap();
        assert_eq!(k, 0);
        assert_eq!(thermo.len(), 1);
        assert_eq!(thermo.ref_pressure(0).unwrap(), 1.0e5);
        assert_eq!(thermo.min_temp(0).unwrap(), 273.16);
        assert_eq!(thermo.max_temp(0).unwrap(), 647.0);
        assert!(matches!(
            thermo.update_one(1, 300.0),
            Err(ThermoError::IndexOob { index: 1, len: 1 })
        ));
        assert!(thermo.update_one(0, -5.0).is_err());
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let mut thermo = ConstCpThermo::new();
        assert!(thermo.add(water().with_limits(500.0, 400.0)).is_err());
        assert!(thermo.add(water().with_ref_pressure(0.0)).is_err());
        assert!(thermo.add(ConstCpParams::new(0.0, 0.0, 0.0, 1.0)).is_err());
        assert!(thermo.is_empty());
    }
}
