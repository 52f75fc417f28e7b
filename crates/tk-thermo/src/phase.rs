//! A phase whose species all carry volume-based standard states.

use tk_core::ensure_positive;
use tk_core::units::{Density, Pressure, Temperature};
use tracing::debug;

use crate::error::{ThermoError, ThermoResult};
use crate::properties::SpeciesPropertyTable;
use crate::species_thermo::SpeciesThermo;
use crate::standard_state::{StandardStateView, VolumeStandardState};
use crate::volume::VolumeModel;

/// Species-level data the standard states need from their phase.
pub trait HostPhase {
    /// Molecular weight [kg/kmol] of species `k`.
    fn molecular_weight(&self, k: usize) -> ThermoResult<f64>;

    fn species_names(&self) -> &[String];

    fn n_species(&self) -> usize {
        self.species_names().len()
    }

    fn species_index(&self, name: &str) -> Option<usize> {
        self.species_names().iter().position(|n| n == name)
    }
}

/// Names and molecular weights, in species order.
#[derive(Debug, Clone, Default)]
pub struct SpeciesList {
    names: Vec<String>,
    molecular_weights: Vec<f64>,
}

impl SpeciesList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a species and return its index.
    pub fn push(&mut self, name: impl Into<String>, mw: f64) -> ThermoResult<usize> {
        let name = name.into();
        if self.names.contains(&name) {
            return Err(ThermoError::config(format!("duplicate species {name}")));
        }
        if !mw.is_finite() || mw <= 0.0 {
            return Err(ThermoError::config(format!(
                "molecular weight of {name} must be positive, got {mw}"
            )));
        }
        self.names.push(name);
        self.molecular_weights.push(mw);
        Ok(self.names.len() - 1)
    }
}

impl HostPhase for SpeciesList {
    fn molecular_weight(&self, k: usize) -> ThermoResult<f64> {
        self.molecular_weights
            .get(k)
            .copied()
            .ok_or(ThermoError::IndexOob {
                index: k,
                len: self.molecular_weights.len(),
            })
    }

    fn species_names(&self) -> &[String] {
        &self.names
    }
}

/// State specification for one species.
#[derive(Clone, Copy, Debug)]
pub enum StateInput {
    TP { t: Temperature, p: Pressure },
    TR { t: Temperature, rho: Density },
}

/// Phase owning the species thermo, one standard state per species and the
/// property table the standard states write into.
pub struct StandardStatePhase {
    name: String,
    species: SpeciesList,
    thermo: Box<dyn SpeciesThermo>,
    states: Vec<VolumeStandardState>,
    table: SpeciesPropertyTable,
}

impl std::fmt::Debug for StandardStatePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardStatePhase")
            .field("name", &self.name)
            .field("species", &self.species)
            .field("states", &self.states)
            .finish_non_exhaustive()
    }
}

impl StandardStatePhase {
    /// Build a phase with one volume model per species, in species order.
    pub fn new(
        name: impl Into<String>,
        species: SpeciesList,
        thermo: Box<dyn SpeciesThermo>,
        models: Vec<VolumeModel>,
    ) -> ThermoResult<Self> {
        let name = name.into();
        if models.len() != species.n_species() {
            return Err(ThermoError::config(format!(
                "phase {name}: {} species but {} standard-state models",
                species.n_species(),
                models.len()
            )));
        }
        let mut table = SpeciesPropertyTable::new(species.n_species());
        let mut states = Vec::with_capacity(models.len());
        for (k, model) in models.into_iter().enumerate() {
            let mw = species.molecular_weight(k)?;
            let species_name = &species.species_names()[k];
            let state = VolumeStandardState::new(
                thermo.as_ref(),
                table.row_mut(k)?,
                k,
                species_name.as_str(),
                model,
                mw,
            )?;
            debug!(phase = %name, species = %species_name, model = model.kind_name(), "standard state installed");
            states.push(state);
        }
        Ok(Self {
            name,
            species,
            thermo,
            states,
            table,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &SpeciesPropertyTable {
        &self.table
    }

    pub fn standard_state(&self, k: usize) -> ThermoResult<&VolumeStandardState> {
        self.states.get(k).ok_or(ThermoError::IndexOob {
            index: k,
            len: self.states.len(),
        })
    }

    /// Property accessors for species `k`.
    pub fn species(&self, k: usize) -> ThermoResult<StandardStateView<'_>> {
        let state = self.standard_state(k)?;
        Ok(state.view(self.table.row(k)?))
    }

    /// Property accessors for the species called `name`.
    pub fn species_by_name(&self, name: &str) -> ThermoResult<StandardStateView<'_>> {
        let k = self
            .species_index(name)
            .ok_or_else(|| ThermoError::config(format!("unknown species {name}")))?;
        self.species(k)
    }

    /// Set every species to temperature `t` and pressure `p`. Every species
    /// is evaluated before any is updated, so on error the phase is unchanged.
    pub fn set_state_tp(&mut self, t: Temperature, p: Pressure) -> ThermoResult<()> {
        let p = ensure_positive(p.value, "pressure")?;
        self.update_all(t.value, Some(p))
    }

    /// Set every species to temperature `t` at its current pressure.
    pub fn set_temperature(&mut self, t: Temperature) -> ThermoResult<()> {
        self.update_all(t.value, None)
    }

    pub fn set_pressure(&mut self, p: Pressure) -> ThermoResult<()> {
        let p = ensure_positive(p.value, "pressure")?;
        for (state, props) in self.states.iter_mut().zip(self.table.rows_mut()) {
            state.set_pressure(props, p)?;
        }
        Ok(())
    }

    fn update_all(&mut self, t: f64, p: Option<f64>) -> ThermoResult<()> {
        let thermo = self.thermo.as_ref();
        let updates = self
            .states
            .iter()
            .map(|state| state.evaluate_temperature(thermo, t))
            .collect::<ThermoResult<Vec<_>>>()?;
        for ((state, props), update) in self
            .states
            .iter_mut()
            .zip(self.table.rows_mut())
            .zip(updates)
        {
            let p = p.unwrap_or(state.pressure());
            state.commit(props, update, p);
        }
        Ok(())
    }

    /// Set the state of one species.
    pub fn set_species_state(&mut self, k: usize, input: StateInput) -> ThermoResult<()> {
        let len = self.states.len();
        let state = self
            .states
            .get_mut(k)
            .ok_or(ThermoError::IndexOob { index: k, len })?;
        let props = self.table.row_mut(k)?;
        let thermo = self.thermo.as_ref();
        match input {
            StateInput::TP { t, p } => state.set_state_tp(thermo, props, t.value, p.value),
            StateInput::TR { t, rho } => state.set_state_tr(thermo, props, t.value, rho.value),
        }
    }
}

impl HostPhase for StandardStatePhase {
    fn molecular_weight(&self, k: usize) -> ThermoResult<f64> {
        self.species.molecular_weight(k)
    }

    fn species_names(&self) -> &[String] {
        self.species.species_names()
    }
}
