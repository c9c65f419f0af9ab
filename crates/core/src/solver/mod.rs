//! Reaction–diffusion solver for the temperature and fuel fields
//!
//! The solver is a chain of stateless pieces:
//!
//! 1. [`CombustionModel`]: per-cell "is this cell burning" predicate
//! 2. [`temperature_derivative`]: diffusion, cooling and heat release
//! 3. [`fuel_derivative`]: fuel consumption while burning
//! 4. [`ForwardEuler`]: advances both grids by one explicit step
//!
//! Grids are never modified in place: each step reads the pre-step pair and
//! returns a new pair. Per-cell work inside a step runs on Rayon.
//!
//! # Example
//!
//! ```rust
//! use wildfire_rd_core::solver::{ForwardEuler, Grid, SolverParams};
//!
//! let euler = ForwardEuler::new(SolverParams::default()).unwrap();
//! let temperature = Grid::with_value(3, 600.0).unwrap();
//! let fuel = Grid::with_value(3, 2.0).unwrap();
//!
//! let (temperature, fuel) = euler.step(&temperature, &fuel).unwrap();
//! assert!((temperature.get(1, 1) - 847.0).abs() < 1e-9);
//! assert!((fuel.get(1, 1) - 1.85).abs() < 1e-12);
//! ```

mod boundary;
mod combustion;
mod fields;
mod forward_euler;
mod fuel_consumption;
mod heat_transfer;
mod params;

// Re-exports
pub use boundary::Neighbors;
pub use combustion::{CombustionModel, FuelDepletionRule, IGNITION_TEMPERATURE};
pub use fields::Grid;
pub use forward_euler::ForwardEuler;
pub use fuel_consumption::fuel_derivative;
pub use heat_transfer::{temperature_derivative, CoolingPolicy};
pub use params::{SolverParams, DIFFUSION_STABILITY_LIMIT};
