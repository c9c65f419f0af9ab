//! Alive / burning / burnt classification for renderers
//!
//! A renderer only sees the current temperature and fuel grids, but "burnt"
//! also covers cells that have already burned and cooled back down. The
//! [`BurnTracker`] keeps that one-way history per cell.

use crate::solver::Grid;

/// Visual state of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Below ignition with fuel left
    Alive,
    /// At or above ignition with fuel left
    Burning,
    /// Out of fuel, or cooled below ignition after burning
    Burnt,
}

impl CellState {
    /// Classify one cell
    ///
    /// Burning wins over the has-burnt flag, so a cell that reheats with fuel
    /// left shows as burning again.
    #[must_use]
    pub fn classify(
        temperature: f64,
        fuel: f64,
        has_burnt: bool,
        ignition_temperature: f64,
    ) -> Self {
        if fuel > 0.0 && temperature >= ignition_temperature {
            Self::Burning
        } else if fuel <= 0.0 || has_burnt {
            Self::Burnt
        } else {
            Self::Alive
        }
    }
}

/// Cell counts per state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellCounts {
    pub alive: usize,
    pub burning: usize,
    pub burnt: usize,
}

/// Tracks which cells have cooled below ignition after burning
#[derive(Debug, Clone)]
pub struct BurnTracker {
    ignition_temperature: f64,
    previous_temperature: Vec<f64>,
    has_burnt: Vec<bool>,
    size: usize,
}

impl BurnTracker {
    /// Start tracking from the initial temperature grid
    #[must_use]
    pub fn new(initial_temperature: &Grid, ignition_temperature: f64) -> Self {
        Self {
            ignition_temperature,
            previous_temperature: initial_temperature.as_slice().to_vec(),
            has_burnt: vec![false; initial_temperature.len()],
            size: initial_temperature.size(),
        }
    }

    #[must_use]
    pub fn ignition_temperature(&self) -> f64 {
        self.ignition_temperature
    }

    /// Record a new temperature grid
    ///
    /// A cell is flagged when it was at or above ignition last time and is
    /// below it now. Flags are never cleared.
    ///
    /// # Panics
    ///
    /// Panics if `temperature` is not the size the tracker was created with
    pub fn update(&mut self, temperature: &Grid) {
        self.assert_size(temperature);
        let ignition = self.ignition_temperature;
        for ((flag, prev), &now) in self
            .has_burnt
            .iter_mut()
            .zip(self.previous_temperature.iter_mut())
            .zip(temperature.as_slice())
        {
            if *prev >= ignition && now < ignition {
                *flag = true;
            }
            *prev = now;
        }
    }

    /// Take `temperature` as the new baseline without touching any flags
    ///
    /// Used after the grid is edited outside a step, so the next
    /// [`BurnTracker::update`] compares against the edited values.
    ///
    /// # Panics
    ///
    /// Panics if `temperature` is not the size the tracker was created with
    pub fn observe(&mut self, temperature: &Grid) {
        self.assert_size(temperature);
        self.previous_temperature.copy_from_slice(temperature.as_slice());
    }

    fn assert_size(&self, grid: &Grid) {
        assert_eq!(
            grid.size(),
            self.size,
            "temperature grid size changed during a run"
        );
    }

    /// True once the cell has cooled below ignition after burning
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[must_use]
    pub fn has_burnt(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.size && col < self.size,
            "Coordinates out of bounds"
        );
        self.has_burnt[row * self.size + col]
    }

    /// State of one cell given the current grids
    #[must_use]
    pub fn classify(&self, temperature: &Grid, fuel: &Grid, row: usize, col: usize) -> CellState {
        CellState::classify(
            temperature.get(row, col),
            fuel.get(row, col),
            self.has_burnt(row, col),
            self.ignition_temperature,
        )
    }

    /// States of every cell in row-major order
    ///
    /// # Panics
    ///
    /// Panics if either grid is not the size the tracker was created with
    #[must_use]
    pub fn states(&self, temperature: &Grid, fuel: &Grid) -> Vec<CellState> {
        self.assert_size(temperature);
        self.assert_size(fuel);
        temperature
            .as_slice()
            .iter()
            .zip(fuel.as_slice())
            .zip(&self.has_burnt)
            .map(|((&t, &v), &burnt)| CellState::classify(t, v, burnt, self.ignition_temperature))
            .collect()
    }

    /// Count cells per state
    ///
    /// # Panics
    ///
    /// Panics on the same size mismatch as [`BurnTracker::states`]
    #[must_use]
    pub fn counts(&self, temperature: &Grid, fuel: &Grid) -> CellCounts {
        let mut counts = CellCounts::default();
        for state in self.states(temperature, fuel) {
            match state {
                CellState::Alive => counts.alive += 1,
                CellState::Burning => counts.burning += 1,
                CellState::Burnt => counts.burnt += 1,
            }
        }
        counts
    }
}

/// Consumer of each step's grids (image tiles, terminal frames, ...)
pub trait Renderer {
    /// Called with the full-precision grids after every step
    fn render(&mut self, temperature: &Grid, fuel: &Grid, ignition_temperature: f64);
}
