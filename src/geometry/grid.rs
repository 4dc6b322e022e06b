//! Face-shaped scalar storage.

use serde::{Deserialize, Serialize};

/// A `dim x dim` grid of scalars stored in row-major order.
///
/// Used for height fields and color fields; one grid per cube face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarGrid {
    dim: usize,
    values: Vec<f64>,
}

impl ScalarGrid {
    /// Wraps a row-major buffer of `dim * dim` values.
    pub fn from_values(dim: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), dim * dim);
        Self { dim, values }
    }

    /// Creates a grid with every cell set to `value`.
    pub fn filled(dim: usize, value: f64) -> Self {
        Self {
            dim,
            values: vec![value; dim * dim],
        }
    }

    /// Side length of the grid.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Value at the given cell.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.dim && col < self.dim);
        self.values[row * self.dim + col]
    }

    /// The underlying row-major buffer.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest value in the grid.
    pub fn min_value(&self) -> f64 {
        self.values.iter().cloned().fold(f64::MAX, f64::min)
    }

    /// Largest value in the grid.
    pub fn max_value(&self) -> f64 {
        self.values.iter().cloned().fold(f64::MIN, f64::max)
    }

    /// (min, max) over the grid.
    pub fn range(&self) -> (f64, f64) {
        (self.min_value(), self.max_value())
    }

    /// Applies `f` to every cell, consuming the grid.
    pub fn map(mut self, f: impl Fn(f64) -> f64) -> Self {
        for v in &mut self.values {
            *v = f(*v);
        }
        self
    }
}
