//! Square scalar grid used for the temperature and fuel fields
//!
//! Values are stored as a flat `Vec<f64>` in row-major order
//! (`row * size + col`). The solver never mutates a grid it reads from;
//! each step produces fresh grids and the driver swaps them in.

use crate::error::SimulationError;

/// Square N×N field of `f64` values in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    data: Vec<f64>,
    size: usize,
}

impl Grid {
    /// Create a grid with every cell set to `value`
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidGrid`] if `size` is zero.
    pub fn with_value(size: usize, value: f64) -> Result<Self, SimulationError> {
        if size == 0 {
            return Err(SimulationError::InvalidGrid(
                "grid size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            data: vec![value; size * size],
            size,
        })
    }

    /// Create a grid of zeros
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidGrid`] if `size` is zero.
    pub fn zeros(size: usize) -> Result<Self, SimulationError> {
        Self::with_value(size, 0.0)
    }

    /// Wrap a row-major buffer of `size * size` values
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidGrid`] if `size` is zero or the
    /// buffer length is not `size * size`.
    pub fn from_vec(size: usize, data: Vec<f64>) -> Result<Self, SimulationError> {
        if size == 0 {
            return Err(SimulationError::InvalidGrid(
                "grid size must be at least 1".to_string(),
            ));
        }
        if data.len() != size * size {
            return Err(SimulationError::InvalidGrid(format!(
                "expected {} values for a {size}x{size} grid, got {}",
                size * size,
                data.len()
            )));
        }
        Ok(Self { data, size })
    }

    /// Build a grid from nested rows, e.g. a literal matrix in a test
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidGrid`] if there are no rows or any
    /// row length differs from the number of rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, SimulationError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(SimulationError::InvalidGrid(format!(
                    "row {row} has {} values, expected {size}",
                    values.len()
                )));
            }
            data.extend_from_slice(values);
        }
        Self::from_vec(size, data)
    }

    /// Side length N
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N²)
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; a grid holds at least one cell
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True if `other` has the same side length
    #[must_use]
    pub fn same_dimensions(&self, other: &Grid) -> bool {
        self.size == other.size
    }

    /// Get reference to field data
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Get mutable reference to field data
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the grid and return its row-major buffer
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// One row as a slice
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.size, "Coordinates out of bounds");
        &self.data[row * self.size..(row + 1) * self.size]
    }

    /// Get value at (row, col)
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.size && col < self.size,
            "Coordinates out of bounds"
        );
        self.data[row * self.size + col]
    }

    /// Set value at (row, col)
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(
            row < self.size && col < self.size,
            "Coordinates out of bounds"
        );
        self.data[row * self.size + col] = value;
    }

    /// Fill entire field with a value
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Iterate over `(row, col, value)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let size = self.size;
        self.data
            .iter()
            .enumerate()
            .map(move |(idx, &v)| (idx / size, idx % size, v))
    }

    /// Sum of all cells
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Mean cell value
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.sum() / self.data.len() as f64
    }

    /// Largest cell value (NaN cells are ignored)
    #[must_use]
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest cell value (NaN cells are ignored)
    #[must_use]
    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::zeros(10).unwrap();
        assert_eq!(grid.size(), 10);
        assert_eq!(grid.len(), 100);
        assert!(grid.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            Grid::zeros(0),
            Err(SimulationError::InvalidGrid(_))
        ));
        assert!(matches!(
            Grid::from_vec(0, Vec::new()),
            Err(SimulationError::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_from_vec_length_checked() {
        assert!(Grid::from_vec(3, vec![1.0; 9]).is_ok());
        assert!(matches!(
            Grid::from_vec(3, vec![1.0; 8]),
            Err(SimulationError::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let ok = Grid::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(ok.get(1, 0), 3.0);

        let ragged: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(Grid::from_rows(&ragged).is_err());
    }

    #[test]
    fn test_grid_get_set() {
        let mut grid = Grid::zeros(10).unwrap();
        grid.set(3, 4, 123.45);
        assert_eq!(grid.get(3, 4), 123.45);

        // Verify row-major indexing
        let index = 3 * 10 + 4;
        assert_eq!(grid.as_slice()[index], 123.45);
        assert_eq!(grid.row(3)[4], 123.45);
    }

    #[test]
    fn test_cells_iterates_row_major() {
        let grid = Grid::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![(0, 0, 1.0), (0, 1, 2.0), (1, 0, 3.0), (1, 1, 4.0)]
        );
    }

    #[test]
    fn test_reductions() {
        let grid = Grid::from_rows(&[[1.0, -2.0], [3.0, 6.0]]).unwrap();
        assert_eq!(grid.sum(), 8.0);
        assert_eq!(grid.mean(), 2.0);
        assert_eq!(grid.max(), 6.0);
        assert_eq!(grid.min(), -2.0);
    }

    #[test]
    #[should_panic(expected = "Coordinates out of bounds")]
    fn test_grid_bounds_check() {
        let grid = Grid::zeros(10).unwrap();
        let _ = grid.get(10, 5);
    }
}
