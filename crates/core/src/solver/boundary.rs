//! Edge-replicated boundary handling for the 5-point stencil
//!
//! Out-of-range neighbours take the value of the nearest in-range edge cell,
//! which is the same as padding the grid with one ring of replicated edge
//! values. The normal gradient across the border is therefore zero
//! (Neumann-like), and border cells use the ordinary stencil formula.

/// The four orthogonal neighbours of a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbors {
    /// Row above (`i - 1`)
    pub up: f64,
    /// Row below (`i + 1`)
    pub down: f64,
    /// Column to the left (`j - 1`)
    pub left: f64,
    /// Column to the right (`j + 1`)
    pub right: f64,
}

impl Neighbors {
    /// Read the neighbours of `(row, col)` from a row-major `size`×`size`
    /// buffer, replicating edge cells for out-of-range positions
    #[inline]
    #[must_use]
    pub fn edge_replicated(data: &[f64], size: usize, row: usize, col: usize) -> Self {
        let last = size - 1;
        let up = row.saturating_sub(1);
        let down = (row + 1).min(last);
        let left = col.saturating_sub(1);
        let right = (col + 1).min(last);

        Self {
            up: data[up * size + col],
            down: data[down * size + col],
            left: data[row * size + left],
            right: data[row * size + right],
        }
    }

    /// Undivided 5-point Laplacian: `down + up + right + left - 4 * center`
    #[inline]
    #[must_use]
    pub fn laplacian(&self, center: f64) -> f64 {
        self.down + self.up + self.right + self.left - 4.0 * center
    }
}
