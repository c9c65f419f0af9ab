//! Solver parameters
//!
//! Immutable for the duration of a run. Defaults are the constants the
//! original tile demo ran with.

use super::combustion::{CombustionModel, FuelDepletionRule, IGNITION_TEMPERATURE};
use super::heat_transfer::CoolingPolicy;
use crate::error::SimulationError;
use serde::{Deserialize, Serialize};

/// Explicit 2-D diffusion is only stable while `κ Δt / h²` stays at or below this
pub const DIFFUSION_STABILITY_LIMIT: f64 = 0.25;

/// Parameters shared by every derivative evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverParams {
    /// Thermal diffusivity κ
    pub thermal_diffusivity: f64,
    /// Newtonian cooling-rate constant k
    pub cooling_rate: f64,
    /// Heat-release rate δ while a cell burns
    pub heat_release: f64,
    /// Fuel-consumption rate β while a cell burns
    pub fuel_consumption_rate: f64,
    pub ambient_temperature: f64,
    pub ignition_temperature: f64,
    /// Cell width/height h
    pub cell_size: f64,
    /// Euler step applied to temperature
    pub dt_temperature: f64,
    /// Euler step applied to fuel
    pub dt_fuel: f64,
    pub cooling: CoolingPolicy,
    pub fuel_depletion: FuelDepletionRule,
    /// Set negative fuel back to zero after each step
    pub clamp_fuel: bool,
    /// Fail the step if any temperature leaves `[-limit, limit]` or any value
    /// turns non-finite. `None` disables the check.
    pub divergence_limit: Option<f64>,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            thermal_diffusivity: 5.0,
            cooling_rate: 0.1,
            heat_release: 5000.0,
            fuel_consumption_rate: 15.0,
            ambient_temperature: 110.0,
            ignition_temperature: IGNITION_TEMPERATURE,
            cell_size: 1.0,
            dt_temperature: 0.05,
            dt_fuel: 0.01,
            cooling: CoolingPolicy::AmbientFloor,
            fuel_depletion: FuelDepletionRule::Strict,
            clamp_fuel: false,
            divergence_limit: None,
        }
    }
}

impl SolverParams {
    /// Combustion predicate configured from these parameters
    #[must_use]
    pub fn combustion_model(&self) -> CombustionModel {
        CombustionModel::new(self.ignition_temperature, self.fuel_depletion)
    }

    /// `κ / h²`, the coefficient in front of the undivided Laplacian
    #[must_use]
    pub fn diffusion_coefficient(&self) -> f64 {
        self.thermal_diffusivity / (self.cell_size * self.cell_size)
    }

    /// `κ Δt / h²` for the temperature step
    #[must_use]
    pub fn diffusion_stability_number(&self) -> f64 {
        self.diffusion_coefficient() * self.dt_temperature
    }

    /// Check every parameter against its valid range
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] naming the first
    /// parameter that is out of range.
    pub fn validate(&self) -> Result<(), SimulationError> {
        non_negative("thermal_diffusivity", self.thermal_diffusivity)?;
        non_negative("cooling_rate", self.cooling_rate)?;
        non_negative("heat_release", self.heat_release)?;
        non_negative("fuel_consumption_rate", self.fuel_consumption_rate)?;
        finite("ambient_temperature", self.ambient_temperature)?;
        finite("ignition_temperature", self.ignition_temperature)?;
        positive("cell_size", self.cell_size)?;
        positive("dt_temperature", self.dt_temperature)?;
        positive("dt_fuel", self.dt_fuel)?;
        if let Some(limit) = self.divergence_limit {
            positive("divergence_limit", limit)?;
        }
        Ok(())
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter {
            name,
            value,
            reason: "must be finite and non-negative",
        })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter {
            name,
            value,
            reason: "must be finite and positive",
        })
    }
}
