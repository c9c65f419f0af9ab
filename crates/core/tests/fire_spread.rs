//! Whole-run behaviour of the driver: a fire lit in the middle of the grid
//! spreads, burns out, and leaves burnt cells behind

use wildfire_rd_core::simulation::{CellState, Ignition};
use wildfire_rd_core::{FireSimulation, InitialCondition, SimulationConfig, SolverParams};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn centre_fire(size: usize) -> SimulationConfig {
    SimulationConfig {
        grid_size: size,
        initial_condition: InitialCondition::centered(size, 1, 900.0),
        solver: SolverParams {
            divergence_limit: Some(1.0e7),
            ..SolverParams::default()
        },
        ..SimulationConfig::default()
    }
}

#[test]
fn test_fire_spreads_from_centre() {
    init_tracing();
    let mut sim = FireSimulation::new(&centre_fire(15)).unwrap();
    let start = sim.stats();
    assert_eq!(start.burning_cells, 5);

    for _ in 0..40 {
        sim.step().unwrap();
    }

    let stats = sim.stats();
    assert!(
        stats.burning_cells + stats.burnt_cells > start.burning_cells,
        "fire did not spread: {stats:?}"
    );
    assert!(stats.fuel_consumed > 0.0);
    assert!(stats.max_temperature.is_finite());
}

#[test]
fn test_fire_burns_out_and_leaves_burnt_cells() {
    init_tracing();
    let mut sim = FireSimulation::new(&centre_fire(9)).unwrap();

    // Fuel 2 at β = 15 with Δt_V = 0.01 lasts ~14 burning steps per cell
    for _ in 0..1500 {
        sim.step().unwrap();
    }

    let stats = sim.stats();
    assert_eq!(stats.burning_cells, 0, "{stats:?}");
    assert!(stats.burnt_cells > 0);
    assert!(sim
        .fuel()
        .as_slice()
        .iter()
        .any(|&v| v <= 0.0));

    let centre = sim
        .burn_tracker()
        .classify(sim.temperature(), sim.fuel(), 4, 4);
    assert_eq!(centre, CellState::Burnt);
}

#[test]
fn test_runs_are_reproducible() {
    let config = SimulationConfig {
        grid_size: 12,
        initial_condition: InitialCondition {
            seeded_hotspots: 4,
            seed: 99,
            ignitions: vec![Ignition {
                row: 0,
                col: 0,
                radius: 2,
                temperature: 750.0,
            }],
            ..InitialCondition::default()
        },
        ..SimulationConfig::default()
    };

    let mut a = FireSimulation::new(&config).unwrap();
    let mut b = FireSimulation::new(&config).unwrap();
    for _ in 0..30 {
        a.step().unwrap();
        b.step().unwrap();
    }
    assert_eq!(a.temperature(), b.temperature());
    assert_eq!(a.fuel(), b.fuel());
}

#[test]
fn test_clamped_fuel_stays_non_negative() {
    let mut config = centre_fire(7);
    config.solver.clamp_fuel = true;
    let mut sim = FireSimulation::new(&config).unwrap();
    for _ in 0..300 {
        sim.step().unwrap();
        assert!(sim.fuel().as_slice().iter().all(|&v| v >= 0.0));
    }
}
