//! Standard-state molar volume models.
//!
//! Each model gives V(T) together with its first two temperature derivatives,
//! which drive the finite-ΔP corrections of the standard-state properties.
//! Volumes are in m³/kmol and molecular weights in kg/kmol, so densities come
//! out in kg/m³.

use serde::Serialize;
use tk_core::ensure_finite;

use crate::error::{ThermoError, ThermoResult};

/// Number of coefficients in the cubic temperature polynomials.
pub const POLY_COEFFS: usize = 4;

/// Molar volume and temperature derivatives at one temperature.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MolarVolume {
    /// V [m³/kmol]
    pub volume: f64,
    /// dV/dT [m³/(kmol·K)]
    pub dvdt: f64,
    /// d²V/dT² [m³/(kmol·K²)]
    pub d2vdt2: f64,
}

/// How the standard-state molar volume depends on temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumeModel {
    /// V is fixed.
    Constant { molar_volume: f64 },
    /// V(T) = c0 + c1·T + c2·T² + c3·T³.
    TemperaturePolynomial { coeffs: [f64; POLY_COEFFS] },
    /// ρ(T) = c0 + c1·T + c2·T² + c3·T³ [kg/m³] and V = MW/ρ.
    DensityTemperaturePolynomial { coeffs: [f64; POLY_COEFFS] },
}

impl VolumeModel {
    /// Constant molar volume, which must be positive.
    pub fn constant(molar_volume: f64) -> ThermoResult<Self> {
        if !molar_volume.is_finite() || molar_volume <= 0.0 {
            return Err(ThermoError::config(format!(
                "constant molar volume must be positive and finite, got {molar_volume}"
            )));
        }
        Ok(VolumeModel::Constant { molar_volume })
    }

    /// Cubic volume polynomial from exactly four coefficients.
    pub fn temperature_polynomial(coeffs: &[f64]) -> ThermoResult<Self> {
        Ok(VolumeModel::TemperaturePolynomial {
            coeffs: cubic_coeffs(coeffs, "volume")?,
        })
    }

    /// Cubic density polynomial from exactly four coefficients.
    pub fn density_temperature_polynomial(coeffs: &[f64]) -> ThermoResult<Self> {
        Ok(VolumeModel::DensityTemperaturePolynomial {
            coeffs: cubic_coeffs(coeffs, "density")?,
        })
    }

    /// Configuration tag of this model.
    pub fn kind_name(&self) -> &'static str {
        match self {
            VolumeModel::Constant { .. } => "constant",
            VolumeModel::TemperaturePolynomial { .. } => "temperature_polynomial",
            VolumeModel::DensityTemperaturePolynomial { .. } => "density_temperature_polynomial",
        }
    }

    /// The fixed molar volume, for the constant model only.
    pub fn constant_volume(&self) -> Option<f64> {
        match *self {
            VolumeModel::Constant { molar_volume } => Some(molar_volume),
            _ => None,
        }
    }

    /// Evaluate V, dV/dT and d²V/dT² at temperature `t` for a species of
    /// molecular weight `mw`.
    pub fn evaluate(&self, t: f64, mw: f64) -> ThermoResult<MolarVolume> {
        let mv = match *self {
            VolumeModel::Constant { molar_volume } => MolarVolume {
                volume: molar_volume,
                dvdt: 0.0,
                d2vdt2: 0.0,
            },
            VolumeModel::TemperaturePolynomial { coeffs } => {
                let (volume, dvdt, d2vdt2) = cubic(&coeffs, t);
                MolarVolume {
                    volume,
                    dvdt,
                    d2vdt2,
                }
            }
            VolumeModel::DensityTemperaturePolynomial { coeffs } => {
                let (dens, ddens_dt, d2dens_dt2) = cubic(&coeffs, t);
                if !dens.is_finite() || dens <= 0.0 {
                    return Err(ThermoError::NonPhysical {
                        what: "density polynomial must stay positive",
                    });
                }
                let dens2 = dens * dens;
                MolarVolume {
                    volume: mw / dens,
                    dvdt: -mw / dens2 * ddens_dt,
                    d2vdt2: 2.0 * mw / (dens2 * dens) * ddens_dt * ddens_dt
                        - mw / dens2 * d2dens_dt2,
                }
            }
        };
        if ensure_finite(mv.volume, "molar volume")? <= 0.0 {
            return Err(ThermoError::NonPhysical {
                what: "molar volume must stay positive",
            });
        }
        ensure_finite(mv.dvdt, "dV/dT")?;
        ensure_finite(mv.d2vdt2, "d2V/dT2")?;
        Ok(mv)
    }
}

/// Value, first and second derivative of `c0 + T(c1 + T(c2 + T c3))`.
fn cubic(c: &[f64; POLY_COEFFS], t: f64) -> (f64, f64, f64) {
    let value = c[0] + t * (c[1] + t * (c[2] + t * c[3]));
    let first = c[1] + 2.0 * t * c[2] + 3.0 * t * t * c[3];
    let second = 2.0 * c[2] + 6.0 * t * c[3];
    (value, first, second)
}

fn cubic_coeffs(coeffs: &[f64], what: &str) -> ThermoResult<[f64; POLY_COEFFS]> {
    let array: [f64; POLY_COEFFS] = coeffs.try_into().map_err(|_| {
        ThermoError::config(format!(
            "expected {POLY_COEFFS} {what} polynomial coefficients, got {}",
            coeffs.len()
        ))
    })?;
    if array.iter().any(|c| !c.is_finite()) {
        return Err(ThermoError::config(format!(
            "{what} polynomial coefficients must be finite"
        )));
    }
    Ok(array)
}
