mod text_renderer;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use text_renderer::TextRenderer;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wildfire_rd_core::{CoolingPolicy, FireSimulation, SimulationConfig, SimulationError};

/// Reaction–diffusion wildfire demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "wildfire-demo")]
#[command(about = "Headless reaction-diffusion wildfire simulation", long_about = None)]
struct Args {
    /// JSON configuration file (missing keys use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of steps to run
    #[arg(short, long, default_value_t = 600)]
    steps: u64,

    /// Grid side length N
    #[arg(long)]
    size: Option<usize>,

    /// Seed for the random hot spots
    #[arg(long)]
    seed: Option<u64>,

    /// Number of random hot spots
    #[arg(long)]
    hotspots: Option<usize>,

    /// Cooling variant
    #[arg(long, value_enum)]
    cooling: Option<CoolingArg>,

    /// Clamp negative fuel to zero after each step
    #[arg(long)]
    clamp_fuel: bool,

    /// Abort when any temperature exceeds this magnitude
    #[arg(long)]
    divergence_limit: Option<f64>,

    /// Print statistics every N steps
    #[arg(short, long, default_value_t = 50)]
    report_interval: u64,

    /// Print a grid frame every N steps (0 = never)
    #[arg(short, long, default_value_t = 100)]
    frame_interval: u64,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CoolingArg {
    Unconditional,
    AmbientFloor,
}

impl From<CoolingArg> for CoolingPolicy {
    fn from(arg: CoolingArg) -> Self {
        match arg {
            CoolingArg::Unconditional => CoolingPolicy::Unconditional,
            CoolingArg::AmbientFloor => CoolingPolicy::AmbientFloor,
        }
    }
}

fn build_config(args: &Args) -> Result<SimulationConfig, SimulationError> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(size) = args.size {
        config.grid_size = size;
    }
    if let Some(seed) = args.seed {
        config.initial_condition.seed = seed;
    }
    if let Some(hotspots) = args.hotspots {
        config.initial_condition.seeded_hotspots = hotspots;
    }
    if let Some(cooling) = args.cooling {
        config.solver.cooling = cooling.into();
    }
    if args.clamp_fuel {
        config.solver.clamp_fuel = true;
    }
    if args.divergence_limit.is_some() {
        config.solver.divergence_limit = args.divergence_limit;
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<(), SimulationError> {
    let config = build_config(args)?;
    if args.print_config {
        println!("{}", config.to_json_string_pretty()?);
        return Ok(());
    }

    println!("=== Wildfire Reaction-Diffusion Demo ===\n");
    let mut sim = FireSimulation::new(&config)?;
    println!(
        "Created {0}x{0} grid, fuel {1:.2}/cell, {2} steps",
        config.grid_size, config.initial_fuel, args.steps
    );

    let mut renderer = TextRenderer::stdout(args.frame_interval);
    renderer.start(sim.temperature(), sim.fuel(), sim.params().ignition_temperature);

    println!("\n  Step |   Time | Alive | Burning | Burnt |  Max T  | Fuel used");
    println!("-------|--------|-------|---------|-------|---------|----------");

    let interval = args.report_interval.max(1);
    let mut remaining = args.steps;
    while remaining > 0 {
        let chunk = remaining.min(interval);
        sim.run(chunk, &mut renderer)?;
        if let Some(err) = renderer.take_error() {
            return Err(err.into());
        }
        remaining -= chunk;

        let stats = sim.stats();
        println!(
            "{:6} | {:6.2} | {:5} | {:7} | {:5} | {:7.1} | {:9.3}",
            stats.step,
            stats.time,
            stats.alive_cells,
            stats.burning_cells,
            stats.burnt_cells,
            stats.max_temperature,
            stats.fuel_consumed
        );

        if stats.burning_cells == 0 && stats.max_temperature < sim.params().ignition_temperature {
            info!("Fire is out after {} steps", stats.step);
            break;
        }
    }

    let stats = sim.stats();
    println!("\n=== Simulation Complete ===");
    println!("Steps run: {}", stats.step);
    println!("Burnt cells: {}", stats.burnt_cells);
    println!("Fuel consumed: {:.3}", stats.fuel_consumed);
    println!("Mean temperature: {:.1}", stats.mean_temperature);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
