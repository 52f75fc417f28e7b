//! Per-species property rows owned by a phase.

use serde::Serialize;

use crate::error::{ThermoError, ThermoResult};

/// Reference and pressure-corrected standard-state properties of one species.
///
/// Dimensionless except the molar volumes [m³/kmol].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SpeciesProperties {
    pub cp0_r: f64,
    pub h0_rt: f64,
    pub s0_r: f64,
    pub g0_rt: f64,
    pub v0: f64,
    pub cpss_r: f64,
    pub hss_rt: f64,
    pub sss_r: f64,
    pub gss_rt: f64,
    pub vss: f64,
}

/// One row of [`SpeciesProperties`] per species.
#[derive(Debug, Clone, Default)]
pub struct SpeciesPropertyTable {
    rows: Vec<SpeciesProperties>,
}

impl SpeciesPropertyTable {
    pub fn new(n_species: usize) -> Self {
        Self {
            rows: vec![SpeciesProperties::default(); n_species],
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, k: usize) -> ThermoResult<&SpeciesProperties> {
        let len = self.rows.len();
        self.rows.get(k).ok_or(ThermoError::IndexOob { index: k, len })
    }

    pub fn row_mut(&mut self, k: usize) -> ThermoResult<&mut SpeciesProperties> {
        let len = self.rows.len();
        self.rows
            .get_mut(k)
            .ok_or(ThermoError::IndexOob { index: k, len })
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut SpeciesProperties> {
        self.rows.iter_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpeciesProperties> {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_independent() {
        let mut table = SpeciesPropertyTable::new(3);
        assert_eq!(table.len(), 3);
        table.row_mut(1).unwrap().vss = 0.018;
        assert_eq!(table.row(0).unwrap().vss, 0.0);
        assert_eq!(table.row(1).unwrap().vss, 0.018);
        assert_eq!(table.iter().filter(|r| r.vss > 0.0).count(), 1);
    }

    #[test]
    fn out_of_range_row_is_an_error() {
        let mut table = SpeciesPropertyTable::new(2);
        assert!(matches!(
            table.row(2),
            Err(ThermoError::IndexOob { index: 2, len: 2 })
        ));
        assert!(table.row_mut(5).is_err());
        assert!(SpeciesPropertyTable::new(0).is_empty());
    }
}
