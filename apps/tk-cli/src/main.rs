use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tk_core::{k, pa};
use tk_thermo::config::{build_phase, load_phase_file};
use tk_thermo::{HostPhase, StandardStateReport, ThermoError};
use tk_transport::{CollisionIntegrals, CollisionQuantity, TransportError};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Thermo(#[from] ThermoError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "tk-cli")]
#[command(about = "ThermoKin CLI - collision integrals and standard-state properties", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up Ω(2,2)*, A*, B* and C* at a reduced temperature
    Collision {
        /// Reduced temperature T*
        #[arg(long)]
        tstar: f64,
        /// Reduced dipole moment δ*
        #[arg(long, default_value_t = 0.0)]
        delta: f64,
    },
    /// Fit the collision integrals as polynomials in ln T*
    CollisionFit {
        /// Lower reduced temperature of the fit window
        #[arg(long, default_value_t = 0.1)]
        ts_min: f64,
        /// Upper reduced temperature of the fit window
        #[arg(long, default_value_t = 100.0)]
        ts_max: f64,
        /// Polynomial degree
        #[arg(long, default_value_t = 6)]
        degree: usize,
        /// Reduced dipole moment δ*
        #[arg(long, default_value_t = 0.0)]
        delta: f64,
        /// Print the coefficients as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate standard-state properties from a phase file
    StandardState {
        /// Path to the phase YAML or JSON file
        phase_path: PathBuf,
        /// Species name (all species when omitted)
        #[arg(short, long)]
        species: Option<String>,
        /// Temperature in K
        #[arg(short, long, default_value_t = 298.15)]
        temperature: f64,
        /// Pressure in Pa
        #[arg(short, long, default_value_t = 101_325.0)]
        pressure: f64,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Collision { tstar, delta } => cmd_collision(tstar, delta, cli.verbose),
        Commands::CollisionFit {
            ts_min,
            ts_max,
            degree,
            delta,
            json,
        } => cmd_collision_fit(ts_min, ts_max, degree, delta, json, cli.verbose),
        Commands::StandardState {
            phase_path,
            species,
            temperature,
            pressure,
            json,
        } => cmd_standard_state(
            &phase_path,
            species.as_deref(),
            temperature,
            pressure,
            json,
        ),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_collision(tstar: f64, delta: f64, log_level: u8) -> CliResult<()> {
    let ci = CollisionIntegrals::new(0.1, 100.0, log_level)?;
    println!("T* = {tstar}, delta* = {delta}");
    for q in CollisionQuantity::ALL {
        println!("  {:<8} {:.6}", q.label(), ci.value(q, tstar, delta));
    }
    Ok(())
}

#[derive(Serialize)]
struct FitReport {
    ts_min: f64,
    ts_max: f64,
    degree: usize,
    deltastar: f64,
    omega22: Vec<f64>,
    astar: Vec<f64>,
    bstar: Vec<f64>,
    cstar: Vec<f64>,
}

fn cmd_collision_fit(
    ts_min: f64,
    ts_max: f64,
    degree: usize,
    delta: f64,
    json: bool,
    log_level: u8,
) -> CliResult<()> {
    let ci = CollisionIntegrals::new(ts_min, ts_max, log_level)?;
    let (lo, hi) = ci.window().tstar_bounds();
    info!(lo, hi, rows = ci.window().len(), "fit window");

    let omega22 = ci.fit_omega22(degree, delta)?;
    let ratios = ci.fit(degree, delta)?;
    let report = FitReport {
        ts_min: lo,
        ts_max: hi,
        degree,
        deltastar: delta,
        omega22,
        astar: ratios.astar,
        bstar: ratios.bstar,
        cstar: ratios.cstar,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!(
        "Fit over T* in [{}, {}], degree {}, delta* = {}",
        report.ts_min, report.ts_max, report.degree, report.deltastar
    );
    for (label, coeffs) in [
        ("omega22", &report.omega22),
        ("astar", &report.astar),
        ("bstar", &report.bstar),
        ("cstar", &report.cstar),
    ] {
        let formatted: Vec<String> = coeffs.iter().map(|c| format!("{c:.8e}")).collect();
        println!("  {:<8} [{}]", label, formatted.join(", "));
    }
    Ok(())
}

fn cmd_standard_state(
    phase_path: &Path,
    species: Option<&str>,
    temperature: f64,
    pressure: f64,
    json: bool,
) -> CliResult<()> {
    let def = load_phase_file(phase_path)?;
    let mut phase = build_phase(&def)?;
    phase.set_state_tp(k(temperature), pa(pressure))?;

    let names: Vec<String> = match species {
        Some(name) => vec![name.to_string()],
        None => phase.species_names().to_vec(),
    };
    let reports = names
        .iter()
        .map(|name| -> CliResult<StandardStateReport> {
            Ok(phase.species_by_name(name)?.report())
        })
        .collect::<CliResult<Vec<_>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }
    println!(
        "Phase {} at T = {temperature} K, P = {pressure} Pa",
        phase.name()
    );
    for r in &reports {
        println!("  {} ({})", r.species, r.model);
        println!("    V   = {:.6e} m3/kmol, rho = {:.4} kg/m3", r.molar_volume, r.density);
        println!("    H   = {:.6e} J/kmol", r.enthalpy_mole);
        println!("    U   = {:.6e} J/kmol", r.int_energy_mole);
        println!("    S   = {:.6e} J/kmol/K", r.entropy_mole);
        println!("    G   = {:.6e} J/kmol", r.gibbs_mole);
        println!("    Cp  = {:.6e} J/kmol/K", r.cp_mole);
    }
    Ok(())
}
