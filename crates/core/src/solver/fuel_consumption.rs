//! Fuel derivative
//!
//! `dV/dt = -β` while a cell burns and `0` otherwise. Fuel never regrows.

use super::fields::Grid;
use super::params::SolverParams;
use crate::error::SimulationError;
use rayon::prelude::*;

/// Compute dV/dt for every cell
///
/// # Errors
///
/// Returns [`SimulationError::DimensionMismatch`] if the grids differ in size.
pub fn fuel_derivative(
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

    let model = params.combustion_model();
    let beta = params.fuel_consumption_rate;
    let mut out = Grid::zeros(fuel.size())?;

    out.as_mut_slice()
        .par_iter_mut()
        .zip(temperature.as_slice().par_iter())
        .zip(fuel.as_slice().par_iter())
        .for_each(|((rate, &t), &v)| {
            *rate = if model.is_burning(t, v) { -beta } else { 0.0 };
        });

    Ok(out)
}
