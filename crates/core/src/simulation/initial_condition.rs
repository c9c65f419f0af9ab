//! Initial temperature field
//!
//! An ambient background with hot spots. Hot spots come from an explicit
//! ignition list and from a seeded random scatter. The same seed always
//! produces the same grid, so every run restarts from an identical state.

use crate::error::SimulationError;
use crate::solver::Grid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// A disc of cells raised to a fixed temperature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ignition {
    pub row: usize,
    pub col: usize,
    /// Disc radius in cells; 0 ignites a single cell
    pub radius: usize,
    pub temperature: f64,
}

/// How the starting temperature grid is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialCondition {
    /// Temperature of every cell before hot spots are applied
    pub background_temperature: f64,
    /// Explicit ignition points, applied first
    pub ignitions: Vec<Ignition>,
    /// Number of randomly placed hot spots
    pub seeded_hotspots: usize,
    pub hotspot_radius: usize,
    pub hotspot_temperature: f64,
    pub seed: u64,
}

impl Default for InitialCondition {
    fn default() -> Self {
        Self {
            background_temperature: 110.0,
            ignitions: Vec::new(),
            seeded_hotspots: 3,
            hotspot_radius: 1,
            hotspot_temperature: 800.0,
            seed: 42,
        }
    }
}

impl InitialCondition {
    /// A single ignition in the middle of the grid and no random hot spots
    #[must_use]
    pub fn centered(size: usize, radius: usize, temperature: f64) -> Self {
        Self {
            ignitions: vec![Ignition {
                row: size / 2,
                col: size / 2,
                radius,
                temperature,
            }],
            seeded_hotspots: 0,
            ..Self::default()
        }
    }

    /// Check temperatures are finite and ignitions lie inside a `size` grid
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] for a non-finite
    /// temperature and [`SimulationError::OutOfBounds`] for an ignition
    /// outside the grid.
    pub fn validate(&self, size: usize) -> Result<(), SimulationError> {
        for (name, value) in [
            ("background_temperature", self.background_temperature),
            ("hotspot_temperature", self.hotspot_temperature),
        ] {
            if !value.is_finite() {
                return Err(SimulationError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }
        for ignition in &self.ignitions {
            if ignition.row >= size || ignition.col >= size {
                return Err(SimulationError::OutOfBounds {
                    row: ignition.row,
                    col: ignition.col,
                    size,
                });
            }
            if !ignition.temperature.is_finite() {
                return Err(SimulationError::InvalidParameter {
                    name: "ignition.temperature",
                    value: ignition.temperature,
                    reason: "must be finite",
                });
            }
        }
        Ok(())
    }

    /// Build the temperature grid for an N×N run
    ///
    /// # Errors
    ///
    /// Returns the errors of [`InitialCondition::validate`] or
    /// [`SimulationError::InvalidGrid`] for a zero size.
    pub fn build(&self, size: usize) -> Result<Grid, SimulationError> {
        let mut grid = Grid::with_value(size, self.background_temperature)?;
        self.validate(size)?;

        for ignition in &self.ignitions {
            ignite_disc(&mut grid, *ignition)?;
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        for _ in 0..self.seeded_hotspots {
            let hotspot = Ignition {
                row: rng.random_range(0..size),
                col: rng.random_range(0..size),
                radius: self.hotspot_radius,
                temperature: self.hotspot_temperature,
            };
            ignite_disc(&mut grid, hotspot)?;
        }

        Ok(grid)
    }
}

/// Raise every cell within `radius` of the centre to at least `temperature`
///
/// Cells already hotter are left alone. The disc is clipped at the grid edge.
///
/// # Errors
///
/// Returns [`SimulationError::OutOfBounds`] if the centre is outside the grid.
pub fn ignite_disc(grid: &mut Grid, ignition: Ignition) -> Result<(), SimulationError> {
    let size = grid.size();
    let Ignition {
        row,
        col,
        radius,
        temperature,
    } = ignition;
    if row >= size || col >= size {
        return Err(SimulationError::OutOfBounds { row, col, size });
    }

    // Any radius of N or more already covers the whole grid
    let radius = radius.min(size);
    let r_sq = radius * radius;
    let row_range = row.saturating_sub(radius)..=(row + radius).min(size - 1);
    for r in row_range {
        let col_range = col.saturating_sub(radius)..=(col + radius).min(size - 1);
        for c in col_range {
            let dr = r.abs_diff(row);
            let dc = c.abs_diff(col);
            if dr * dr + dc * dc <= r_sq && grid.get(r, c) < temperature {
                grid.set(r, c, temperature);
            }
        }
    }
    Ok(())
}
