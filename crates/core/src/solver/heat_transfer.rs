//! Temperature derivative
//!
//! Per cell:
//! ```text
//! dT/dt = (κ/h²)·(T[i+1,j] + T[i-1,j] + T[i,j+1] + T[i,j-1] − 4T[i,j])
//!       − cooling(T)
//!       + δ·R(T, V)
//! ```
//!
//! Where:
//! - the Laplacian uses edge-replicated neighbours (see [`super::boundary`])
//! - `cooling(T)` is `k·T`, optionally only above ambient ([`CoolingPolicy`])
//! - `R(T, V)` is the combustion indicator from [`CombustionModel`]

use super::boundary::Neighbors;
use super::combustion::CombustionModel;
use super::fields::Grid;
use super::params::SolverParams;
use crate::error::SimulationError;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Newtonian cooling variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoolingPolicy {
    /// Always lose `k·T`, even below ambient
    Unconditional,
    /// Lose `k·T` only while hotter than ambient
    #[default]
    AmbientFloor,
}

impl CoolingPolicy {
    /// Heat lost per unit time at temperature `t` (subtracted from dT/dt)
    #[inline]
    #[must_use]
    pub fn loss(self, t: f64, ambient: f64, rate: f64) -> f64 {
        match self {
            Self::Unconditional => rate * t,
            Self::AmbientFloor if t > ambient => rate * t,
            Self::AmbientFloor => 0.0,
        }
    }
}

/// dT/dt for a single cell, reading only the pre-step buffers
#[inline]
pub(crate) fn cell_temperature_rate(
    temperature: &[f64],
    fuel: &[f64],
    size: usize,
    row: usize,
    col: usize,
    params: &SolverParams,
    model: &CombustionModel,
) -> f64 {
    let idx = row * size + col;
    let t = temperature[idx];

    // 1. Diffusion (5-point stencil, edge-replicated)
    let diffusion = params.diffusion_coefficient()
        * Neighbors::edge_replicated(temperature, size, row, col).laplacian(t);

    // 2. Cooling
    let cooling = params
        .cooling
        .loss(t, params.ambient_temperature, params.cooling_rate);

    // 3. Combustion heat release
    let combustion = params.heat_release * model.reaction(t, fuel[idx]);

    diffusion - cooling + combustion
}

/// Compute dT/dt for every cell
///
/// Rows are evaluated in parallel with Rayon. Each output cell depends only
/// on the input grids, so the result is identical to a serial sweep.
///
/// # Errors
///
/// Returns [`SimulationError::DimensionMismatch`] if the grids differ in size.
pub fn temperature_derivative(
    temperature: &Grid,
    fuel: &Grid,
    params: &SolverParams,
) -> Result<Grid, SimulationError> {
    if !temperature.same_dimensions(fuel) {
        return Err(SimulationError::DimensionMismatch {
            temperature: temperature.size(),
            fuel: fuel.size(),
        });
    }

    let size = temperature.size();
    let model = params.combustion_model();
    let temp_in = temperature.as_slice();
    let fuel_in = fuel.as_slice();
    let mut out = Grid::zeros(size)?;

    out.as_mut_slice()
        .par_chunks_mut(size)
        .enumerate()
        .for_each(|(row, out_row)| {
            for (col, rate) in out_row.iter_mut().enumerate() {
                *rate = cell_temperature_rate(temp_in, fuel_in, size, row, col, params, &model);
            }
        });

    Ok(out)
}
