//! Noise generation module for terrain synthesis.
//!
//! A permutation-hashed gradient lattice ([`GradientTable`]), a
//! single-octave evaluator over face grids, and the fractal composer
//! that sums octaves into a shaped height field.

mod fractal;
mod gradient;
mod perlin;

pub use fractal::{generate_heights, FractalNoiseConfig, OctavePhase};
pub use gradient::{GradientTable, GRADIENTS};
pub use perlin::{sample_grid, MAX_FREQUENCY, MIN_FREQUENCY};
