//! Pressure-dependent standard state built on a molar volume model.
//!
//! The reference-state properties at P⁰ come from a [`SpeciesThermo`]. For a
//! pressure P ≠ P⁰ they are corrected with the volume and its temperature
//! derivatives:
//!
//! ```text
//! H/RT  = H⁰/RT − ΔP/R · dV/dT + ΔP·V/(R T)
//! S/R   = S⁰/R  − ΔP/R · dV/dT
//! G/RT  = H/RT − S/R
//! Cp/R  = Cp⁰/R − T·ΔP · d²V/dT²
//! ```
//!
//! A [`VolumeStandardState`] holds the scalar state of one species. The
//! property values themselves live in the species' row of the phase table and
//! are handed in by the phase on every state change.

use serde::Serialize;
use tk_core::constants::GAS_CONSTANT;
use tk_core::ensure_positive;
use tracing::warn;

use crate::error::{ThermoError, ThermoResult};
use crate::properties::SpeciesProperties;
use crate::species_thermo::{ReferenceState, SpeciesThermo};
use crate::volume::{MolarVolume, VolumeModel};

/// Temperature [K] at which new standard states are evaluated.
pub const INITIAL_TEMPERATURE: f64 = 298.15;

/// Pressure offsets smaller than this [Pa] leave the reference state
/// uncorrected.
const DELTA_P_ZERO: f64 = 1.0e-10;

/// Relative density mismatch tolerated by [`VolumeStandardState::set_state_tr`].
const DENSITY_TOLERANCE: f64 = 1.0e-4;

/// Saturation pressure reported for every condensed species [Pa].
const SAT_PRESSURE: f64 = 1.0e-200;

/// Reference state and volume at one temperature, evaluated but not yet
/// stored.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TemperatureUpdate {
    t: f64,
    reference: ReferenceState,
    volume: MolarVolume,
}

/// Standard state of one species with a volume model.
#[derive(Debug, Clone)]
pub struct VolumeStandardState {
    species_index: usize,
    name: String,
    model: VolumeModel,
    mw: f64,
    p0: f64,
    t_min: f64,
    t_max: f64,
    temperature: f64,
    pressure: f64,
    volume: MolarVolume,
}

impl VolumeStandardState {
    /// Build the standard state of species `k` and evaluate it at
    /// [`INITIAL_TEMPERATURE`] and the species reference pressure.
    pub fn new(
        thermo: &dyn SpeciesThermo,
        props: &mut SpeciesProperties,
        k: usize,
        name: impl Into<String>,
        model: VolumeModel,
        mw: f64,
    ) -> ThermoResult<Self> {
        let mw = ensure_positive(mw, "molecular weight")?;
        let p0 = ensure_positive(thermo.ref_pressure(k)?, "reference pressure")?;
        let mut state = Self {
            species_index: k,
            name: name.into(),
            model,
            mw,
            p0,
            t_min: thermo.min_temp(k)?,
            t_max: thermo.max_temp(k)?,
            temperature: INITIAL_TEMPERATURE,
            pressure: p0,
            volume: MolarVolume::default(),
        };
        state.set_temperature(thermo, props, INITIAL_TEMPERATURE)?;
        Ok(state)
    }

    pub fn species_index(&self) -> usize {
        self.species_index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &VolumeModel {
        &self.model
    }

    /// Molecular weight [kg/kmol].
    pub fn molecular_weight(&self) -> f64 {
        self.mw
    }

    /// Reference pressure [Pa].
    pub fn ref_pressure(&self) -> f64 {
        self.p0
    }

    pub fn min_temp(&self) -> f64 {
        self.t_min
    }

    pub fn max_temp(&self) -> f64 {
        self.t_max
    }

    /// Temperature [K].
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Pressure [Pa].
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Molar volume and derivatives at the current temperature.
    pub fn volume(&self) -> MolarVolume {
        self.volume
    }

    /// Re-evaluate the volume model at the current temperature.
    pub fn calc_molar_volume(&mut self) -> ThermoResult<MolarVolume> {
        self.volume = self.model.evaluate(self.temperature, self.mw)?;
        Ok(self.volume)
    }

    /// Evaluate the reference state and volume at `t` without touching the
    /// stored state.
    pub(crate) fn evaluate_temperature(
        &self,
        thermo: &dyn SpeciesThermo,
        t: f64,
    ) -> ThermoResult<TemperatureUpdate> {
        let t = ensure_positive(t, "temperature")?;
        if t < self.t_min || t > self.t_max {
            warn!(
                species = %self.name,
                t,
                t_min = self.t_min,
                t_max = self.t_max,
                "temperature outside species thermo limits"
            );
        }
        Ok(TemperatureUpdate {
            t,
            reference: thermo.update_one(self.species_index, t)?,
            volume: self.model.evaluate(t, self.mw)?,
        })
    }

    /// Store `update` and pressure `p`, then refresh the corrected row.
    pub(crate) fn commit(
        &mut self,
        props: &mut SpeciesProperties,
        update: TemperatureUpdate,
        p: f64,
    ) {
        let TemperatureUpdate {
            t,
            reference,
            volume,
        } = update;
        self.temperature = t;
        self.pressure = p;
        self.volume = volume;
        props.cp0_r = reference.cp_r;
        props.h0_rt = reference.h_rt;
        props.s0_r = reference.s_r;
        props.g0_rt = reference.g_rt();
        props.vss = volume.volume;
        props.v0 = volume.volume;
        self.apply_pressure_correction(props);
    }

    /// Set the temperature [K]: refresh the reference state, the volume and
    /// the pressure correction at the current pressure. On error nothing
    /// changes.
    pub fn set_temperature(
        &mut self,
        thermo: &dyn SpeciesThermo,
        props: &mut SpeciesProperties,
        t: f64,
    ) -> ThermoResult<()> {
        let update = self.evaluate_temperature(thermo, t)?;
        self.commit(props, update, self.pressure);
        Ok(())
    }

    /// Set the pressure [Pa]. Only the correction is recomputed; the cached
    /// volume derivatives stay valid because they depend on temperature only.
    pub fn set_pressure(&mut self, props: &mut SpeciesProperties, p: f64) -> ThermoResult<()> {
        self.pressure = ensure_positive(p, "pressure")?;
        self.apply_pressure_correction(props);
        Ok(())
    }

    /// Set pressure and temperature together. On error nothing changes.
    pub fn set_state_tp(
        &mut self,
        thermo: &dyn SpeciesThermo,
        props: &mut SpeciesProperties,
        t: f64,
        p: f64,
    ) -> ThermoResult<()> {
        let p = ensure_positive(p, "pressure")?;
        let update = self.evaluate_temperature(thermo, t)?;
        self.commit(props, update, p);
        Ok(())
    }

    /// Set the temperature after checking that `rho` [kg/m³] matches the
    /// model density. Only available for the constant-volume model, whose
    /// density does not depend on the state.
    pub fn set_state_tr(
        &mut self,
        thermo: &dyn SpeciesThermo,
        props: &mut SpeciesProperties,
        t: f64,
        rho: f64,
    ) -> ThermoResult<()> {
        let Some(molar_volume) = self.model.constant_volume() else {
            return Err(ThermoError::NotImplemented {
                what: "density-temperature state for a temperature-dependent volume model",
            });
        };
        let rho = ensure_positive(rho, "density")?;
        let rho_stored = self.mw / molar_volume;
        let mismatch = (rho_stored - rho).abs() / (rho_stored + rho);
        if mismatch > DENSITY_TOLERANCE {
            return Err(ThermoError::Inconsistent {
                what: format!(
                    "supplied density {rho} kg/m3 differs from {rho_stored} kg/m3 for {}",
                    self.name
                ),
            });
        }
        self.set_temperature(thermo, props, t)
    }

    /// Saturation pressure [Pa]. Condensed species modelled this way are
    /// treated as non-volatile.
    pub fn sat_pressure(&self, _t: f64) -> f64 {
        SAT_PRESSURE
    }

    pub fn crit_temperature(&self) -> ThermoResult<f64> {
        Err(ThermoError::NotImplemented {
            what: "critical temperature",
        })
    }

    pub fn crit_pressure(&self) -> ThermoResult<f64> {
        Err(ThermoError::NotImplemented {
            what: "critical pressure",
        })
    }

    pub fn crit_density(&self) -> ThermoResult<f64> {
        Err(ThermoError::NotImplemented {
            what: "critical density",
        })
    }

    /// Read-only accessors over this state and its property row.
    pub fn view<'a>(&'a self, props: &'a SpeciesProperties) -> StandardStateView<'a> {
        StandardStateView { state: self, props }
    }

    fn apply_pressure_correction(&self, props: &mut SpeciesProperties) {
        let reference = ReferenceState {
            cp_r: props.cp0_r,
            h_rt: props.h0_rt,
            s_r: props.s0_r,
        };
        let corrected = pressure_correction(
            reference,
            self.volume,
            self.temperature,
            self.pressure - self.p0,
        );
        props.hss_rt = corrected.h_rt;
        props.sss_r = corrected.s_r;
        props.gss_rt = corrected.g_rt();
        props.cpss_r = corrected.cp_r;
    }
}

/// Correct reference properties for a pressure offset `delta_p` [Pa].
fn pressure_correction(
    reference: ReferenceState,
    volume: MolarVolume,
    t: f64,
    delta_p: f64,
) -> ReferenceState {
    if delta_p.abs() < DELTA_P_ZERO {
        return reference;
    }
    let del_p_rt = delta_p / (GAS_CONSTANT * t);
    let s_v_term = -delta_p / GAS_CONSTANT * volume.dvdt;
    ReferenceState {
        cp_r: reference.cp_r - t * delta_p * volume.d2vdt2,
        h_rt: reference.h_rt + s_v_term + del_p_rt * volume.volume,
        s_r: reference.s_r + s_v_term,
    }
}

/// Property accessors for one species.
#[derive(Debug, Clone, Copy)]
pub struct StandardStateView<'a> {
    state: &'a VolumeStandardState,
    props: &'a SpeciesProperties,
}

impl StandardStateView<'_> {
    fn rt(&self) -> f64 {
        GAS_CONSTANT * self.state.temperature
    }

    pub fn name(&self) -> &str {
        self.state.name()
    }

    pub fn temperature(&self) -> f64 {
        self.state.temperature
    }

    pub fn pressure(&self) -> f64 {
        self.state.pressure
    }

    pub fn properties(&self) -> &SpeciesProperties {
        self.props
    }

    /// H/RT
    pub fn enthalpy_rt(&self) -> f64 {
        self.props.hss_rt
    }

    /// H [J/kmol]
    pub fn enthalpy_mole(&self) -> f64 {
        self.props.hss_rt * self.rt()
    }

    /// U [J/kmol], formed from the reference enthalpy.
    pub fn int_energy_mole(&self) -> f64 {
        let rt = self.rt();
        let pv_rt = self.state.pressure * self.props.vss / rt;
        (self.props.h0_rt - pv_rt) * rt
    }

    /// S/R
    pub fn entropy_r(&self) -> f64 {
        self.props.sss_r
    }

    /// S [J/(kmol·K)]
    pub fn entropy_mole(&self) -> f64 {
        self.props.sss_r * GAS_CONSTANT
    }

    /// G/RT
    pub fn gibbs_rt(&self) -> f64 {
        self.props.gss_rt
    }

    /// G [J/kmol]
    pub fn gibbs_mole(&self) -> f64 {
        self.props.gss_rt * self.rt()
    }

    /// Cp/R
    pub fn cp_r(&self) -> f64 {
        self.props.cpss_r
    }

    /// Cp [J/(kmol·K)]
    pub fn cp_mole(&self) -> f64 {
        self.props.cpss_r * GAS_CONSTANT
    }

    /// Cp minus the reference molar volume.
    // FIXME: subtracts a volume from a heat capacity.
    pub fn cv_mole(&self) -> f64 {
        self.cp_mole() - self.props.v0
    }

    /// V [m³/kmol]
    pub fn molar_volume(&self) -> f64 {
        self.props.vss
    }

    /// ρ [kg/m³]
    pub fn density(&self) -> f64 {
        self.state.mw / self.props.vss
    }

    pub fn gibbs_rt_ref(&self) -> f64 {
        self.props.g0_rt
    }

    pub fn enthalpy_rt_ref(&self) -> f64 {
        self.props.h0_rt
    }

    pub fn entropy_r_ref(&self) -> f64 {
        self.props.s0_r
    }

    pub fn cp_r_ref(&self) -> f64 {
        self.props.cp0_r
    }

    pub fn molar_volume_ref(&self) -> f64 {
        self.props.v0
    }

    /// Snapshot of the molar properties.
    pub fn report(&self) -> StandardStateReport {
        StandardStateReport {
            species: self.name().to_string(),
            model: self.state.model.kind_name(),
            temperature: self.temperature(),
            pressure: self.pressure(),
            molar_volume: self.molar_volume(),
            density: self.density(),
            enthalpy_mole: self.enthalpy_mole(),
            int_energy_mole: self.int_energy_mole(),
            entropy_mole: self.entropy_mole(),
            gibbs_mole: self.gibbs_mole(),
            cp_mole: self.cp_mole(),
            cv_mole: self.cv_mole(),
            dimensionless: *self.props,
        }
    }
}

/// Molar properties of one species at one state, SI units per kmol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardStateReport {
    pub species: String,
    pub model: &'static str,
    pub temperature: f64,
    pub pressure: f64,
    pub molar_volume: f64,
    pub density: f64,
    pub enthalpy_mole: f64,
    pub int_energy_mole: f64,
    pub entropy_mole: f64,
    pub gibbs_mole: f64,
    pub cp_mole: f64,
    pub cv_mole: f64,
    pub dimensionless: SpeciesProperties,
}
