//! End-to-end checks on a phase loaded from a definition file.

use std::path::{Path, PathBuf};

use tk_core::{Tolerances, k, nearly_equal, pa};
use tk_thermo::config::{build_phase, load_json, load_phase_file, load_yaml};
use tk_thermo::{HostPhase, StandardStatePhase, ThermoError};

const SPECIES: [&str; 3] = ["H2O(l)", "Na+", "glycerol(l)"];

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/aqueous.yaml")
}

fn phase() -> StandardStatePhase {
    build_phase(&load_yaml(&fixture()).unwrap()).unwrap()
}

/// Molar G, H and S of every species at (t, p).
fn molar_properties(phase: &mut StandardStatePhase, t: f64, p: f64) -> Vec<(f64, f64, f64)> {
    phase.set_state_tp(k(t), pa(p)).unwrap();
    SPECIES
        .iter()
        .map(|name| {
            let view = phase.species_by_name(name).unwrap();
            (view.gibbs_mole(), view.enthalpy_mole(), view.entropy_mole())
        })
        .collect()
}

#[test]
fn fixture_loads_every_model_kind() {
    let phase = phase();
    assert_eq!(phase.name(), "aqueous");
    assert_eq!(phase.n_species(), 3);
    assert_eq!(phase.species_index("glycerol(l)"), Some(2));

    let kinds: Vec<_> = (0..3)
        .map(|i| phase.standard_state(i).unwrap().model().kind_name())
        .collect();
    assert_eq!(
        kinds,
        [
            "constant",
            "temperature_polynomial",
            "density_temperature_polynomial"
        ]
    );
    assert_eq!(phase.standard_state(1).unwrap().ref_pressure(), 1.0e5);
    assert_eq!(phase.standard_state(0).unwrap().min_temp(), 273.16);
}

#[test]
fn entropy_is_minus_the_temperature_derivative_of_gibbs() {
    let mut phase = phase();
    let (t, p, h) = (350.0, 5.0e7, 1.0e-2);
    let up = molar_properties(&mut phase, t + h, p);
    let down = molar_properties(&mut phase, t - h, p);
    let here = molar_properties(&mut phase, t, p);

    let tol = Tolerances {
        abs: 1e-6,
        rel: 1e-6,
    };
    for (i, name) in SPECIES.iter().enumerate() {
        let s_fd = -(up[i].0 - down[i].0) / (2.0 * h);
        assert!(nearly_equal(here[i].2, s_fd, tol), "{name}: S {} vs {s_fd}", here[i].2);
    }
}

#[test]
fn heat_capacity_is_the_temperature_derivative_of_enthalpy() {
    let mut phase = phase();
    let (t, p, h) = (350.0, 5.0e7, 1.0e-2);
    let up = molar_properties(&mut phase, t + h, p);
    let down = molar_properties(&mut phase, t - h, p);
    phase.set_state_tp(k(t), pa(p)).unwrap();

    let tol = Tolerances {
        abs: 1e-6,
        rel: 1e-5,
    };
    for (i, name) in SPECIES.iter().enumerate() {
        let cp_fd = (up[i].1 - down[i].1) / (2.0 * h);
        let cp = phase.species_by_name(name).unwrap().cp_mole();
        assert!(nearly_equal(cp, cp_fd, tol), "{name}: Cp {cp} vs {cp_fd}");
    }
}

#[test]
fn volume_is_the_pressure_derivative_of_gibbs() {
    let mut phase = phase();
    let (t, p, h) = (320.0, 2.0e7, 1.0e3);
    let up = molar_properties(&mut phase, t, p + h);
    let down = molar_properties(&mut phase, t, p - h);
    phase.set_state_tp(k(t), pa(p)).unwrap();

    let tol = Tolerances {
        abs: 1e-10,
        rel: 1e-5,
    };
    for (i, name) in SPECIES.iter().enumerate() {
        let v_fd = (up[i].0 - down[i].0) / (2.0 * h);
        let v = phase.species_by_name(name).unwrap().molar_volume();
        assert!(nearly_equal(v, v_fd, tol), "{name}: V {v} vs {v_fd}");
    }
}

#[test]
fn json_definitions_load_like_yaml() {
    let def = load_yaml(&fixture()).unwrap();
    let path = std::env::temp_dir().join("tk_thermo_aqueous_phase.json");
    std::fs::write(&path, serde_json::to_string_pretty(&def).unwrap()).unwrap();

    assert_eq!(load_json(&path).unwrap(), def);
    assert_eq!(load_phase_file(&path).unwrap(), def);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_yaml(Path::new("does/not/exist.yaml")).unwrap_err();
    assert!(matches!(err, ThermoError::Io(_)));
}
