//! Simulation driver
//!
//! `FireSimulation` owns the temperature and fuel grids, calls the
//! integrator once per step and swaps in the new grids. A failed step leaves
//! the previous state untouched.

use super::burn_state::{BurnTracker, Renderer};
use super::config::SimulationConfig;
use super::initial_condition::{ignite_disc, Ignition};
use crate::error::SimulationError;
use crate::solver::{ForwardEuler, Grid, SolverParams, DIFFUSION_STABILITY_LIMIT};
use tracing::{debug, info, warn};

/// Snapshot of the run for reporting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationStats {
    pub step: u64,
    /// Elapsed time measured in temperature steps (`step * dt_temperature`)
    pub time: f64,
    pub alive_cells: usize,
    pub burning_cells: usize,
    pub burnt_cells: usize,
    pub total_fuel: f64,
    /// Fuel consumed since the start of the run
    pub fuel_consumed: f64,
    pub max_temperature: f64,
    pub mean_temperature: f64,
}

/// Fire simulation over a pair of N×N grids
pub struct FireSimulation {
    integrator: ForwardEuler,
    temperature: Grid,
    fuel: Grid,
    burn_tracker: BurnTracker,
    initial_fuel_total: f64,
    step_count: u64,
}

impl FireSimulation {
    /// Create a simulation from a configuration
    ///
    /// # Errors
    ///
    /// Returns any validation error from [`SimulationConfig::validate`].
    pub fn new(config: &SimulationConfig) -> Result<Self, SimulationError> {
        info!("Creating new fire simulation");
        config.validate()?;

        let temperature = config.initial_condition.build(config.grid_size)?;
        let fuel = Grid::with_value(config.grid_size, config.initial_fuel)?;
        Self::from_grids(temperature, fuel, config.solver.clone())
    }

    /// Create a simulation from explicit starting grids
    ///
    /// # Errors
    ///
    /// - [`SimulationError::DimensionMismatch`] if the grids differ in size
    /// - [`SimulationError::InvalidParameter`] if `params` is invalid
    pub fn from_grids(
        temperature: Grid,
        fuel: Grid,
        params: SolverParams,
    ) -> Result<Self, SimulationError> {
        if !temperature.same_dimensions(&fuel) {
            return Err(SimulationError::DimensionMismatch {
                temperature: temperature.size(),
                fuel: fuel.size(),
            });
        }

        let stability = params.diffusion_stability_number();
        if stability > DIFFUSION_STABILITY_LIMIT {
            warn!(
                "Diffusion number κΔt/h² = {:.3} exceeds {:.2}; explicit stepping may oscillate",
                stability, DIFFUSION_STABILITY_LIMIT
            );
        }

        let integrator = ForwardEuler::new(params)?;
        let burn_tracker =
            BurnTracker::new(&temperature, integrator.params().ignition_temperature);
        let initial_fuel_total = fuel.sum();

        info!(
            "Fire simulation initialized: {}x{} grid, dt_T={}, dt_V={}, cooling={:?}",
            temperature.size(),
            temperature.size(),
            integrator.params().dt_temperature,
            integrator.params().dt_fuel,
            integrator.params().cooling
        );

        Ok(Self {
            integrator,
            temperature,
            fuel,
            burn_tracker,
            initial_fuel_total,
            step_count: 0,
        })
    }

    /// Advance one step
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Diverged`] if the divergence check fails.
    /// The grids are unchanged in that case.
    pub fn step(&mut self) -> Result<(), SimulationError> {
        let (temperature, fuel) = match self.integrator.step(&self.temperature, &self.fuel) {
            Ok(next) => next,
            Err(err) => {
                warn!("Step {} failed: {}", self.step_count + 1, err);
                return Err(err);
            }
        };

        self.temperature = temperature;
        self.fuel = fuel;
        self.burn_tracker.update(&self.temperature);
        self.step_count += 1;

        debug!(
            "Step {}: max T={:.1}, total fuel={:.3}",
            self.step_count,
            self.temperature.max(),
            self.fuel.sum()
        );
        Ok(())
    }

    /// Run `steps` steps, handing each new state to `renderer`
    ///
    /// # Errors
    ///
    /// Stops at the first failing step and returns its error; steps already
    /// taken are kept.
    pub fn run(&mut self, steps: u64, renderer: &mut dyn Renderer) -> Result<(), SimulationError> {
        let ignition = self.params().ignition_temperature;
        for _ in 0..steps {
            self.step()?;
            renderer.render(&self.temperature, &self.fuel, ignition);
        }
        Ok(())
    }

    /// Raise a disc of cells to at least `temperature`
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::OutOfBounds`] if the centre is outside the grid.
    pub fn ignite_at(
        &mut self,
        row: usize,
        col: usize,
        radius: usize,
        temperature: f64,
    ) -> Result<(), SimulationError> {
        info!(
            "Igniting fire at ({}, {}) with radius {} at T={:.1}",
            row, col, radius, temperature
        );
        ignite_disc(
            &mut self.temperature,
            Ignition {
                row,
                col,
                radius,
                temperature,
            },
        )?;
        self.burn_tracker.observe(&self.temperature);
        Ok(())
    }

    #[must_use]
    pub fn temperature(&self) -> &Grid {
        &self.temperature
    }

    #[must_use]
    pub fn fuel(&self) -> &Grid {
        &self.fuel
    }

    #[must_use]
    pub fn params(&self) -> &SolverParams {
        self.integrator.params()
    }

    #[must_use]
    pub fn burn_tracker(&self) -> &BurnTracker {
        &self.burn_tracker
    }

    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Elapsed time in temperature-step units
    #[must_use]
    pub fn simulation_time(&self) -> f64 {
        self.step_count as f64 * self.params().dt_temperature
    }

    /// Current statistics
    #[must_use]
    pub fn stats(&self) -> SimulationStats {
        let counts = self.burn_tracker.counts(&self.temperature, &self.fuel);
        let total_fuel = self.fuel.sum();
        SimulationStats {
            step: self.step_count,
            time: self.simulation_time(),
            alive_cells: counts.alive,
            burning_cells: counts.burning,
            burnt_cells: counts.burnt,
            total_fuel,
            fuel_consumed: self.initial_fuel_total - total_fuel,
            max_temperature: self.temperature.max(),
            mean_temperature: self.temperature.mean(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{CellState, InitialCondition};
    use approx::assert_relative_eq;

    struct CountingRenderer {
        frames: usize,
        last_max: f64,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, temperature: &Grid, _fuel: &Grid, _ignition_temperature: f64) {
            self.frames += 1;
            self.last_max = temperature.max();
        }
    }

    fn small_config() -> SimulationConfig {
        SimulationConfig {
            grid_size: 9,
            initial_condition: InitialCondition::centered(9, 1, 800.0),
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_simulation_creation() {
        let sim = FireSimulation::new(&small_config()).unwrap();
        assert_eq!(sim.temperature().size(), 9);
        assert_eq!(sim.fuel().size(), 9);
        assert_eq!(sim.step_count(), 0);

        let stats = sim.stats();
        assert_eq!(stats.burning_cells, 5);
        assert_eq!(stats.alive_cells, 76);
        assert_eq!(stats.burnt_cells, 0);
        assert_relative_eq!(stats.fuel_consumed, 0.0);
    }

    #[test]
    fn test_step_advances_counters() {
        let mut sim = FireSimulation::new(&small_config()).unwrap();
        sim.step().unwrap();
        sim.step().unwrap();
        assert_eq!(sim.step_count(), 2);
        assert_relative_eq!(sim.simulation_time(), 0.1, epsilon = 1e-12);
        assert!(sim.stats().fuel_consumed > 0.0);
    }

    #[test]
    fn test_run_renders_every_step() {
        let mut sim = FireSimulation::new(&small_config()).unwrap();
        let mut renderer = CountingRenderer {
            frames: 0,
            last_max: 0.0,
        };
        sim.run(5, &mut renderer).unwrap();
        assert_eq!(renderer.frames, 5);
        assert_eq!(renderer.last_max, sim.temperature().max());
    }

    #[test]
    fn test_mismatched_grids_rejected() {
        let result = FireSimulation::from_grids(
            Grid::zeros(3).unwrap(),
            Grid::zeros(4).unwrap(),
            SolverParams::default(),
        );
        assert!(matches!(
            result,
            Err(SimulationError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_failed_step_keeps_state() {
        let params = SolverParams {
            dt_temperature: 10.0,
            divergence_limit: Some(1.0e4),
            ..SolverParams::default()
        };
        let mut sim = FireSimulation::from_grids(
            Grid::with_value(3, 600.0).unwrap(),
            Grid::with_value(3, 2.0).unwrap(),
            params,
        )
        .unwrap();

        assert!(matches!(sim.step(), Err(SimulationError::Diverged { .. })));
        assert_eq!(sim.step_count(), 0);
        assert!(sim.temperature().as_slice().iter().all(|&t| t == 600.0));
        assert!(sim.fuel().as_slice().iter().all(|&v| v == 2.0));
    }

    #[test]
    fn test_ignite_at() {
        let config = SimulationConfig {
            grid_size: 5,
            initial_condition: InitialCondition {
                seeded_hotspots: 0,
                ..InitialCondition::default()
            },
            ..SimulationConfig::default()
        };
        let mut sim = FireSimulation::new(&config).unwrap();
        assert_eq!(sim.stats().burning_cells, 0);

        sim.ignite_at(0, 4, 0, 900.0).unwrap();
        assert_eq!(sim.temperature().get(0, 4), 900.0);
        assert_eq!(sim.stats().burning_cells, 1);

        assert!(matches!(
            sim.ignite_at(5, 0, 1, 900.0),
            Err(SimulationError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_ignited_cell_burnt_after_cooling() {
        let config = SimulationConfig {
            grid_size: 5,
            initial_condition: InitialCondition {
                seeded_hotspots: 0,
                ..InitialCondition::default()
            },
            ..SimulationConfig::default()
        };
        let mut sim = FireSimulation::new(&config).unwrap();

        // A lone cell at ignition loses more heat to its neighbours than it
        // releases, so it drops below 572 with fuel left
        sim.ignite_at(2, 2, 0, 572.0).unwrap();
        sim.step().unwrap();

        assert!(sim.temperature().get(2, 2) < 572.0);
        assert!(sim.fuel().get(2, 2) > 0.0);
        assert!(sim.burn_tracker().has_burnt(2, 2));
        assert_eq!(
            sim.burn_tracker().classify(sim.temperature(), sim.fuel(), 2, 2),
            CellState::Burnt
        );
        assert_eq!(sim.stats().burnt_cells, 1);
    }
}
