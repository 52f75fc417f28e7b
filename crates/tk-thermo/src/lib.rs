//! tk-thermo: volume-based standard states for condensed species.
//!
//! Provides:
//! - Molar volume models (constant, cubic in T, density cubic in T)
//! - A standard state that corrects reference-state properties for pressure
//! - A phase owning one property row per species
//! - Phase definition files (YAML/JSON)
//!
//! # Example
//!
//! ```
//! use tk_core::{k, pa};
//! use tk_thermo::config::{build_phase, from_yaml_str};
//!
//! let def = from_yaml_str(
//!     r#"
//! name: water
//! species:
//!   - name: H2O(l)
//!     molecular_weight: 18.015
//!     thermo: { type: ConstCp, t0: 298.15, h0: -2.858e8, s0: 6.995e4, cp0: 7.53e4 }
//!     standard_state: { model: constant, molar_volume: 0.018068 }
//! "#,
//! )?;
//! let mut phase = build_phase(&def)?;
//! phase.set_state_tp(k(300.0), pa(1.0e6))?;
//!
//! let water = phase.species_by_name("H2O(l)")?;
//! assert!((water.density() - 18.015 / 0.018068).abs() < 1e-9);
//! # Ok::<(), tk_thermo::ThermoError>(())
//! ```

pub mod config;
pub mod error;
pub mod phase;
pub mod properties;
pub mod species_thermo;
pub mod standard_state;
pub mod volume;

pub use error::{ThermoError, ThermoResult};
pub use phase::{HostPhase, SpeciesList, StandardStatePhase, StateInput};
pub use properties::{SpeciesProperties, SpeciesPropertyTable};
pub use species_thermo::{ConstCpParams, ConstCpThermo, ReferenceState, SpeciesThermo};
pub use standard_state::{StandardStateReport, StandardStateView, VolumeStandardState};
pub use volume::{MolarVolume, VolumeModel};
