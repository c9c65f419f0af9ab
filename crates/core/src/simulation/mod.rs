//! Simulation driver, configuration and renderer support
//!
//! [`FireSimulation`] owns the grids and steps them with the solver.
//! [`SimulationConfig`] describes a reproducible run and loads from JSON.
//! [`BurnTracker`] and [`Renderer`] form the boundary to whatever draws
//! the grids.

mod burn_state;
mod config;
mod field_simulation;
mod initial_condition;

pub use burn_state::{BurnTracker, CellCounts, CellState, Renderer};
pub use config::SimulationConfig;
pub use field_simulation::{FireSimulation, SimulationStats};
pub use initial_condition::{ignite_disc, Ignition, InitialCondition};
