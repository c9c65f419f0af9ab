//! Run configuration
//!
//! Everything needed to reproduce a run: grid size, initial fuel load,
//! initial temperature field and solver parameters. Loaded from JSON;
//! missing keys fall back to the defaults.

use super::initial_condition::InitialCondition;
use crate::error::SimulationError;
use crate::solver::SolverParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Side length N of the square grid
    pub grid_size: usize,
    /// Uniform fuel load every cell starts with
    pub initial_fuel: f64,
    pub initial_condition: InitialCondition,
    pub solver: SolverParams,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            // 600x810 window of 17x23 tiles in the original demo
            grid_size: 35,
            initial_fuel: 2.0,
            initial_condition: InitialCondition::default(),
            solver: SolverParams::default(),
        }
    }
}

impl SimulationConfig {
    /// Parse a configuration from a JSON string
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Config`] if the JSON is malformed, or any
    /// validation error from [`SimulationConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, SimulationError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`SimulationConfig::from_json_str`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serialize as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Config`] if serialization fails.
    pub fn to_json_string_pretty(&self) -> Result<String, SimulationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check grid size, fuel load, initial condition and solver parameters
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidGrid`] for a zero grid size and
    /// [`SimulationError::InvalidParameter`] for any out-of-range value.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.grid_size == 0 {
            return Err(SimulationError::InvalidGrid(
                "grid_size must be at least 1".to_string(),
            ));
        }
        if !self.initial_fuel.is_finite() {
            return Err(SimulationError::InvalidParameter {
                name: "initial_fuel",
                value: self.initial_fuel,
                reason: "must be finite",
            });
        }
        self.initial_condition.validate(self.grid_size)?;
        self.solver.validate()
    }
}
