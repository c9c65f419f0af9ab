//! Explicit (forward) Euler integrator for the temperature/fuel pair
//!
//! ```text
//!   T_{n+1} = T_n + Δt_T · dT/dt(T_n, V_n)
//!   V_{n+1} = V_n + Δt_V · dV/dt(T_n, V_n)
//! ```
//!
//! Both derivatives are taken from the same pre-step pair; the fuel update
//! never sees the new temperature. No stability bound is enforced.

use super::fields::Grid;
use super::fuel_consumption::fuel_derivative;
use super::heat_transfer::temperature_derivative;
use super::params::SolverParams;
use crate::error::SimulationError;
use rayon::prelude::*;

/// First-order explicit integrator
#[derive(Debug, Clone)]
pub struct ForwardEuler {
    params: SolverParams,
}

impl ForwardEuler {
    /// Create an integrator for a validated parameter set
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] if `params` fails
    /// [`SolverParams::validate`].
    pub fn new(params: SolverParams) -> Result<Self, SimulationError> {
        params.validate()?;
        Ok(Self { params })
    }

    #[must_use]
    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Advance both grids by one step, returning new grids
    ///
    /// The inputs are left untouched. On error no grids are produced.
    ///
    /// # Errors
    ///
    /// - [`SimulationError::DimensionMismatch`] if the grids differ in size
    /// - [`SimulationError::Diverged`] if a divergence limit is configured and
    ///   the new state contains a non-finite value or a temperature beyond it
    pub fn step(&self, temperature: &Grid, fuel: &Grid) -> Result<(Grid, Grid), SimulationError> {
        if !temperature.same_dimensions(fuel) {
            return Err(SimulationError::DimensionMismatch {
                temperature: temperature.size(),
                fuel: fuel.size(),
            });
        }

        let temp_rate = temperature_derivative(temperature, fuel, &self.params)?;
        let fuel_rate = fuel_derivative(temperature, fuel, &self.params)?;

        let next_temperature = euler_update(temperature, &temp_rate, self.params.dt_temperature);
        let mut next_fuel = euler_update(fuel, &fuel_rate, self.params.dt_fuel);

        if self.params.clamp_fuel {
            next_fuel
                .as_mut_slice()
                .par_iter_mut()
                .for_each(|v| *v = v.max(0.0));
        }

        if let Some(limit) = self.params.divergence_limit {
            check_bounded(&next_temperature, Some(limit))?;
            check_bounded(&next_fuel, None)?;
        }

        Ok((next_temperature, next_fuel))
    }
}

/// `state + dt * rate`, cell by cell, into a new grid
fn euler_update(state: &Grid, rate: &Grid, dt: f64) -> Grid {
    let mut next = state.clone();
    next.as_mut_slice()
        .par_iter_mut()
        .zip(rate.as_slice().par_iter())
        .for_each(|(value, &r)| *value += dt * r);
    next
}

/// First cell that is non-finite or, with a limit, outside `[-limit, limit]`
fn check_bounded(grid: &Grid, limit: Option<f64>) -> Result<(), SimulationError> {
    let offending = grid
        .cells()
        .find(|&(_, _, v)| !v.is_finite() || limit.is_some_and(|l| v.abs() > l));

    match offending {
        Some((row, col, value)) => Err(SimulationError::Diverged { row, col, value }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::CoolingPolicy;
    use approx::assert_relative_eq;

    fn uniform(size: usize, value: f64) -> Grid {
        Grid::with_value(size, value).unwrap()
    }

    #[test]
    fn test_single_burning_step() {
        let euler = ForwardEuler::new(SolverParams::default()).unwrap();
        let (t, v) = euler.step(&uniform(3, 600.0), &uniform(3, 2.0)).unwrap();

        for &value in t.as_slice() {
            assert_relative_eq!(value, 847.0, epsilon = 1e-9);
        }
        for &value in v.as_slice() {
            assert_relative_eq!(value, 1.85, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_fuel_uses_pre_step_temperature() {
        // 560 is below ignition; after one step the temperature jumps past 572
        // through diffusion from the hot neighbour, but fuel must not burn yet.
        let params = SolverParams {
            cooling_rate: 0.0,
            heat_release: 0.0,
            ..SolverParams::default()
        };
        let euler = ForwardEuler::new(params).unwrap();
        let temperature = Grid::from_rows(&[[560.0, 2000.0], [560.0, 560.0]]).unwrap();
        let fuel = uniform(2, 2.0);

        let (t, v) = euler.step(&temperature, &fuel).unwrap();
        assert!(t.get(0, 0) >= 572.0);
        assert_eq!(v.get(0, 0), 2.0);
        // The hot cell was already burning-eligible and did consume fuel
        assert!(v.get(0, 1) < 2.0);
    }

    #[test]
    fn test_diffusion_only_uniform_is_steady() {
        let params = SolverParams {
            cooling_rate: 0.0,
            heat_release: 0.0,
            ..SolverParams::default()
        };
        let euler = ForwardEuler::new(params).unwrap();
        let temperature = uniform(6, 700.0);
        let (t, _) = euler.step(&temperature, &uniform(6, 2.0)).unwrap();
        assert_eq!(t, temperature);
    }

    #[test]
    fn test_zero_field_is_noop_for_temperature() {
        let params = SolverParams {
            thermal_diffusivity: 0.0,
            cooling_rate: 0.0,
            heat_release: 0.0,
            ..SolverParams::default()
        };
        let euler = ForwardEuler::new(params).unwrap();
        let temperature = Grid::from_rows(&[[10.0, 800.0], [600.0, 0.5]]).unwrap();
        let (t, v) = euler.step(&temperature, &uniform(2, 0.0)).unwrap();
        assert_eq!(t, temperature);
        assert_eq!(v, uniform(2, 0.0));
    }

    #[test]
    fn test_fuel_goes_negative_without_clamp() {
        let params = SolverParams {
            dt_fuel: 1.0,
            ..SolverParams::default()
        };
        let euler = ForwardEuler::new(params).unwrap();
        let (_, v) = euler.step(&uniform(2, 900.0), &uniform(2, 1.0)).unwrap();
        assert!(v.as_slice().iter().all(|&x| (x + 14.0).abs() < 1e-12));
    }

    #[test]
    fn test_fuel_clamp() {
        let params = SolverParams {
            dt_fuel: 1.0,
            clamp_fuel: true,
            ..SolverParams::default()
        };
        let euler = ForwardEuler::new(params).unwrap();
        let (_, v) = euler.step(&uniform(2, 900.0), &uniform(2, 1.0)).unwrap();
        assert!(v.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_divergence_limit_trips() {
        let params = SolverParams {
            dt_temperature: 10.0,
            divergence_limit: Some(1.0e4),
            ..SolverParams::default()
        };
        let euler = ForwardEuler::new(params).unwrap();
        let result = euler.step(&uniform(3, 600.0), &uniform(3, 2.0));
        assert!(matches!(
            result,
            Err(SimulationError::Diverged { row: 0, col: 0, .. })
        ));
    }

    #[test]
    fn test_without_limit_blow_up_is_silent() {
        let params = SolverParams {
            dt_temperature: 10.0,
            ..SolverParams::default()
        };
        let euler = ForwardEuler::new(params).unwrap();
        assert!(euler.step(&uniform(3, 600.0), &uniform(3, 2.0)).is_ok());
    }

    #[test]
    fn test_non_finite_input_reported_with_limit() {
        let params = SolverParams {
            divergence_limit: Some(1.0e9),
            cooling: CoolingPolicy::Unconditional,
            ..SolverParams::default()
        };
        let euler = ForwardEuler::new(params).unwrap();
        let mut temperature = uniform(3, 300.0);
        temperature.set(1, 2, f64::INFINITY);
        let result = euler.step(&temperature, &uniform(3, 2.0));
        assert!(matches!(result, Err(SimulationError::Diverged { .. })));
    }

    #[test]
    fn test_dimension_mismatch_is_fatal() {
        let euler = ForwardEuler::new(SolverParams::default()).unwrap();
        let result = euler.step(&uniform(3, 600.0), &uniform(2, 2.0));
        assert!(matches!(
            result,
            Err(SimulationError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = SolverParams {
            dt_temperature: 0.0,
            ..SolverParams::default()
        };
        assert!(ForwardEuler::new(params).is_err());
    }
}
