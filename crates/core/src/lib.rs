//! Reaction–diffusion wildfire simulation core
//!
//! Fire spread over a square grid of cells, modelled as a pair of coupled
//! equations for cell temperature `T` and remaining fuel `V`:
//!
//! ```text
//! dT/dt = κ∇²T − k·T + δ·R(T, V)
//! dV/dt = −β·R(T, V)
//! ```
//!
//! `R` is 1 while a cell is at or above ignition and still has fuel, 0
//! otherwise. The Laplacian uses a 5-point stencil with edge-replicated
//! boundaries, and the system is advanced with fixed-step forward Euler.
//!
//! ## Layout
//!
//! - [`solver`]: grids, combustion predicate, derivatives, integrator
//! - [`simulation`]: driver, configuration, initial condition, burn tracking

pub mod error;
pub mod simulation;
pub mod solver;

// Re-export core types
pub use error::SimulationError;
pub use simulation::{
    BurnTracker, CellState, FireSimulation, InitialCondition, Renderer, SimulationConfig,
    SimulationStats,
};
pub use solver::{
    CombustionModel, CoolingPolicy, ForwardEuler, FuelDepletionRule, Grid, SolverParams,
    IGNITION_TEMPERATURE,
};
