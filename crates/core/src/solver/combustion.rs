//! Combustion predicate
//!
//! A cell burns when it is at or above the ignition temperature and still
//! holds fuel. This is the only nonlinearity coupling the temperature and
//! fuel equations: it switches on the heat-release term in `dT/dt` and the
//! consumption term in `dV/dt`. It is evaluated cell by cell.

use serde::{Deserialize, Serialize};

/// Ignition temperature of the fuel bed, in the units of the temperature grid
pub const IGNITION_TEMPERATURE: f64 = 572.0;

/// How an empty cell (fuel exactly zero) is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelDepletionRule {
    /// Burning requires `fuel > 0`; a cell at exactly zero is exhausted
    #[default]
    Strict,
    /// Burning requires `fuel >= 0`; only negative fuel stops combustion
    Inclusive,
}

impl FuelDepletionRule {
    /// True if `fuel` is enough to keep a hot cell burning
    #[inline]
    #[must_use]
    pub fn has_fuel(self, fuel: f64) -> bool {
        match self {
            Self::Strict => fuel > 0.0,
            Self::Inclusive => fuel >= 0.0,
        }
    }
}

/// Per-cell combustion predicate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustionModel {
    ignition_temperature: f64,
    depletion: FuelDepletionRule,
}

impl Default for CombustionModel {
    fn default() -> Self {
        Self::new(IGNITION_TEMPERATURE, FuelDepletionRule::Strict)
    }
}

impl CombustionModel {
    #[must_use]
    pub const fn new(ignition_temperature: f64, depletion: FuelDepletionRule) -> Self {
        Self {
            ignition_temperature,
            depletion,
        }
    }

    #[must_use]
    pub fn ignition_temperature(&self) -> f64 {
        self.ignition_temperature
    }

    #[must_use]
    pub fn depletion(&self) -> FuelDepletionRule {
        self.depletion
    }

    /// True iff `temperature >= ignition` and the cell still has fuel
    ///
    /// A NaN temperature never burns.
    #[inline]
    #[must_use]
    pub fn is_burning(&self, temperature: f64, fuel: f64) -> bool {
        temperature >= self.ignition_temperature && self.depletion.has_fuel(fuel)
    }

    /// Reaction indicator: 1.0 while burning, 0.0 otherwise
    #[inline]
    #[must_use]
    pub fn reaction(&self, temperature: f64, fuel: f64) -> f64 {
        if self.is_burning(temperature, fuel) {
            1.0
        } else {
            0.0
        }
    }
}
