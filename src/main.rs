//! Ohm Lab - command-line front-end for the electricity lab solvers.
//!
//! Starts a lab at its default control values, applies each `--set`, and
//! prints the solved circuit.
//!
//! # Usage
//!
//! ```bash
//! ohm-lab kirchhoff --set v2=18 --set r3=2.5
//! ohm-lab series-parallel --topology parallel --format json
//! ohm-lab closed-circuit --controls
//! ```

use std::error::Error;

use clap::{Parser, ValueEnum};
use ohm_lab::{
    circuit::Topology,
    LabConfig, LabSession, Simulation, SimulationKind, Solution, DEFAULT_KCL_TOLERANCE,
};
use tracing_subscriber::EnvFilter;

/// Output format for the solved lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Electricity lab circuit solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Simulation to run: wire, ohm, series-parallel, closed-circuit or kirchhoff
    #[arg(value_name = "SIMULATION")]
    simulation: SimulationKind,

    /// Set a control, e.g. `r1=4.5` (repeatable)
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Resistor topology (series-parallel only)
    #[arg(short, long)]
    topology: Option<Topology>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Reject values outside a control's range instead of clamping them
    #[arg(long)]
    strict: bool,

    /// Largest node imbalance |I1 + I2 - I3| reported as balanced (amps)
    #[arg(long, value_name = "AMPS", default_value_t = DEFAULT_KCL_TOLERANCE)]
    kcl_tolerance: f64,

    /// List the simulation's controls and their ranges, then exit
    #[arg(long)]
    controls: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(serde::Serialize)]
struct Output<'a> {
    simulation: &'a Simulation,
    solution: &'a Solution,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_controls(simulation: &Simulation) {
    println!("{}", simulation.kind());
    for &key in simulation.kind().params() {
        if let (Some(domain), Some(value)) = (simulation.domain(key), simulation.get(key)) {
            println!(
                "  {:<10} {:>6} in [{}, {}] step {}",
                key.name(),
                value,
                domain.min,
                domain.max,
                domain.step
            );
        }
    }
    if let Some(topology) = simulation.topology() {
        println!("  {:<10} {:>6} (series | parallel)", "topology", topology);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = LabConfig::new()
        .with_clamp_inputs(!args.strict)
        .with_kcl_tolerance(args.kcl_tolerance);
    let mut session = LabSession::with_config(Simulation::new(args.simulation), config)?;

    if args.controls {
        print_controls(session.simulation());
        return Ok(());
    }

    if let Some(topology) = args.topology {
        session.set_topology(topology)?;
    }
    for assignment in &args.set {
        session.apply(assignment)?;
    }

    match args.format {
        Format::Text => print!("{}", session.summary()),
        Format::Json => {
            let output = Output {
                simulation: session.simulation(),
                solution: session.solution(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    tracing::debug!(?args, "starting");

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
