//! Error type shared by the solver and the simulation driver

use thiserror::Error;

/// Errors raised by grid construction, parameter validation and stepping
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Temperature and fuel grids do not have the same dimensions
    #[error(
        "grid dimension mismatch: temperature is {temperature}x{temperature}, fuel is {fuel}x{fuel}"
    )]
    DimensionMismatch {
        /// Side length of the temperature grid
        temperature: usize,
        /// Side length of the fuel grid
        fuel: usize,
    },

    /// A grid could not be built from the supplied size or data
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// A solver or configuration parameter is out of its valid range
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A cell coordinate lies outside the grid
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// The post-step bound check found a non-finite or runaway value
    #[error("simulation diverged at cell ({row}, {col}): value {value}")]
    Diverged { row: usize, col: usize, value: f64 },

    /// The configuration file could not be read
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for `SimulationConfig`
    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = SimulationError::DimensionMismatch {
            temperature: 3,
            fuel: 4,
        };
        assert_eq!(
            err.to_string(),
            "grid dimension mismatch: temperature is 3x3, fuel is 4x4"
        );

        let err = SimulationError::InvalidParameter {
            name: "cell_size",
            value: 0.0,
            reason: "must be finite and positive",
        };
        assert!(err.to_string().contains("cell_size"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{ not json");
        let err: SimulationError = parse.unwrap_err().into();
        assert!(matches!(err, SimulationError::Config(_)));
    }
}
