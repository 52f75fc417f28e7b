//! Phase definition files.
//!
//! A phase file lists species with their molecular weight, reference-state
//! thermo parameters and standard-state volume model:
//!
//! ```yaml
//! name: brine
//! species:
//!   - name: H2O(l)
//!     molecular_weight: 18.015
//!     thermo: { type: ConstCp, t0: 298.15, h0: -2.858e8, s0: 6.995e4, cp0: 7.53e4 }
//!     standard_state:
//!       model: constant_incompressible
//!       molar_volume: 0.018068
//! ```
//!
//! Files are deserialised with serde and then validated into typed models;
//! every configuration problem surfaces as [`ThermoError::Config`] at load
//! time.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tk_core::constants::ONE_ATM;

use crate::error::{ThermoError, ThermoResult};
use crate::phase::{SpeciesList, StandardStatePhase};
use crate::species_thermo::{ConstCpParams, ConstCpThermo};
use crate::volume::VolumeModel;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PhaseDef {
    pub name: String,
    #[serde(default)]
    pub species: Vec<SpeciesDef>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpeciesDef {
    pub name: String,
    /// kg/kmol
    pub molecular_weight: f64,
    pub thermo: ThermoDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_state: Option<StandardStateDef>,
}

fn default_ref_pressure() -> f64 {
    ONE_ATM
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ThermoDef {
    /// Constant heat capacity; h0 [J/kmol], s0 and cp0 [J/(kmol·K)] at t0 [K].
    ConstCp {
        t0: f64,
        h0: f64,
        s0: f64,
        cp0: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        t_min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        t_max: Option<f64>,
        #[serde(default = "default_ref_pressure")]
        p_ref: f64,
    },
}

impl ThermoDef {
    fn to_params(&self) -> ConstCpParams {
        match *self {
            ThermoDef::ConstCp {
                t0,
                h0,
                s0,
                cp0,
                t_min,
                t_max,
                p_ref,
            } => ConstCpParams::new(t0, h0, s0, cp0)
                .with_limits(t_min.unwrap_or(0.0), t_max.unwrap_or(f64::INFINITY))
                .with_ref_pressure(p_ref),
        }
    }
}

/// Standard-state node of a species.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct StandardStateDef {
    pub model: String,
    /// m³/kmol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molar_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_temperature_polynomial: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_temperature_polynomial: Option<Vec<f64>>,
}

impl StandardStateDef {
    /// Typed volume model for `species`.
    pub fn to_model(&self, species: &str) -> ThermoResult<VolumeModel> {
        let in_species = |err: ThermoError| match err {
            ThermoError::Config { what } => ThermoError::config(format!("species {species}: {what}")),
            other => other,
        };
        match self.model.as_str() {
            "constant" | "constant_incompressible" => {
                let v = self.molar_volume.ok_or_else(|| {
                    ThermoError::config(format!("species {species}: missing molar_volume"))
                })?;
                VolumeModel::constant(v).map_err(in_species)
            }
            "temperature_polynomial" => {
                let coeffs = self.volume_temperature_polynomial.as_deref().ok_or_else(|| {
                    ThermoError::config(format!(
                        "species {species}: missing volume_temperature_polynomial"
                    ))
                })?;
                VolumeModel::temperature_polynomial(coeffs).map_err(in_species)
            }
            "density_temperature_polynomial" => {
                let coeffs = self.density_temperature_polynomial.as_deref().ok_or_else(|| {
                    ThermoError::config(format!(
                        "species {species}: missing density_temperature_polynomial"
                    ))
                })?;
                VolumeModel::density_temperature_polynomial(coeffs).map_err(in_species)
            }
            other => Err(ThermoError::config(format!(
                "species {species}: unknown standard-state model '{other}'"
            ))),
        }
    }
}

impl PhaseDef {
    pub fn species_def(&self, name: &str) -> ThermoResult<&SpeciesDef> {
        self.species
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ThermoError::config(format!("unknown species {name}")))
    }
}

/// Check names, molecular weights and standard-state nodes without building
/// the phase.
pub fn validate_phase(def: &PhaseDef) -> ThermoResult<()> {
    if def.species.is_empty() {
        return Err(ThermoError::config(format!("phase {} has no species", def.name)));
    }
    let mut names = HashSet::new();
    for species in &def.species {
        if !names.insert(species.name.as_str()) {
            return Err(ThermoError::config(format!(
                "duplicate species {}",
                species.name
            )));
        }
        if !species.molecular_weight.is_finite() || species.molecular_weight <= 0.0 {
            return Err(ThermoError::config(format!(
                "species {}: molecular weight must be positive",
                species.name
            )));
        }
        standard_state_node(species)?.to_model(&species.name)?;
    }
    Ok(())
}

fn standard_state_node(species: &SpeciesDef) -> ThermoResult<&StandardStateDef> {
    species.standard_state.as_ref().ok_or_else(|| {
        ThermoError::config(format!("no standard state for species {}", species.name))
    })
}

/// Build the phase described by `def`.
pub fn build_phase(def: &PhaseDef) -> ThermoResult<StandardStatePhase> {
    validate_phase(def)?;
    let mut species = SpeciesList::new();
    let mut thermo = ConstCpThermo::new();
    let mut models = Vec::with_capacity(def.species.len());
    for sp in &def.species {
        species.push(sp.name.as_str(), sp.molecular_weight)?;
        thermo.add(sp.thermo.to_params()).map_err(|err| match err {
            ThermoError::Config { what } => {
                ThermoError::config(format!("species {}: {what}", sp.name))
            }
            other => other,
        })?;
        models.push(standard_state_node(sp)?.to_model(&sp.name)?);
    }
    StandardStatePhase::new(def.name.as_str(), species, Box::new(thermo), models)
}

pub fn from_yaml_str(content: &str) -> ThermoResult<PhaseDef> {
    let def: PhaseDef = serde_yaml::from_str(content)?;
    validate_phase(&def)?;
    Ok(def)
}

pub fn from_json_str(content: &str) -> ThermoResult<PhaseDef> {
    let def: PhaseDef = serde_json::from_str(content)?;
    validate_phase(&def)?;
    Ok(def)
}

pub fn load_yaml(path: &Path) -> ThermoResult<PhaseDef> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn load_json(path: &Path) -> ThermoResult<PhaseDef> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

/// Load a YAML or JSON phase file, chosen by extension.
pub fn load_phase_file(path: &Path) -> ThermoResult<PhaseDef> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER: &str = r#"
name: water
species:
  - name: H2O(l)
    molecular_weight: 18.015
    thermo: { type: ConstCp, t0: 298.15, h0: -2.858e8, s0: 6.995e4, cp0: 7.53e4 }
    standard_state:
      model: constant_incompressible
      molar_volume: 0.018068
"#;

    fn with_node(node: StandardStateDef) -> PhaseDef {
        let mut def = from_yaml_str(WATER).unwrap();
        def.species[0].standard_state = Some(node);
        def
    }

    #[test]
    fn yaml_phase_loads() {
        let def = from_yaml_str(WATER).unwrap();
        assert_eq!(def.species.len(), 1);
        let ThermoDef::ConstCp { p_ref, t_min, .. } = def.species[0].thermo;
        assert_eq!(p_ref, ONE_ATM);
        assert_eq!(t_min, None);

        let phase = build_phase(&def).unwrap();
        let view = phase.species_by_name("H2O(l)").unwrap();
        assert_eq!(view.molar_volume(), 0.018068);
    }

    #[test]
    fn json_round_trip_of_definition() {
        let def = from_yaml_str(WATER).unwrap();
        let json = serde_json::to_string(&def).unwrap();
        assert_eq!(from_json_str(&json).unwrap(), def);
    }

    #[test]
    fn unknown_model_is_rejected() {
        let def = with_node(StandardStateDef {
            model: "ideal_gas".to_string(),
            ..Default::default()
        });
        let err = validate_phase(&def).unwrap_err();
        assert!(matches!(err, ThermoError::Config { .. }));
        assert!(err.to_string().contains("ideal_gas"));
    }

    #[test]
    fn wrong_coefficient_count_names_the_species() {
        let def = with_node(StandardStateDef {
            model: "density_temperature_polynomial".to_string(),
            density_temperature_polynomial: Some(vec![1000.0, -0.1, 0.0]),
            ..Default::default()
        });
        let err = build_phase(&def).unwrap_err();
        assert!(err.to_string().contains("H2O(l)"));
        assert!(err.to_string().contains("got 3"));
    }

    #[test]
    fn missing_nodes_are_configuration_errors() {
        let mut def = from_yaml_str(WATER).unwrap();
        def.species[0].standard_state = None;
        assert!(matches!(
            validate_phase(&def),
            Err(ThermoError::Config { .. })
        ));

        let def = with_node(StandardStateDef {
            model: "temperature_polynomial".to_string(),
            ..Default::default()
        });
        assert!(validate_phase(&def)
            .unwrap_err()
            .to_string()
            .contains("volume_temperature_polynomial"));

        let def = with_node(StandardStateDef {
            model: "constant".to_string(),
            ..Default::default()
        });
        assert!(validate_phase(&def).is_err());
    }

    #[test]
    fn duplicate_species_are_rejected() {
        let mut def = from_yaml_str(WATER).unwrap();
        def.species.push(def.species[0].clone());
        assert!(validate_phase(&def)
            .unwrap_err()
            .to_string()
            .contains("duplicate"));
        assert!(def.species_def("H2O(l)").is_ok());
        assert!(def.species_def("NaCl(aq)").is_err());
    }

    #[test]
    fn unknown_thermo_type_is_a_parse_error() {
        let content = WATER.replace("ConstCp", "Shomate");
        assert!(matches!(
            from_yaml_str(&content),
            Err(ThermoError::Yaml(_))
        ));
    }
}
