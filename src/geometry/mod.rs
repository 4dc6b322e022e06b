//! Cube-sphere geometry module.
//!
//! Provides the six-face direction-vector mesh the noise and surface
//! stages sample, plus the shared grid storage types.

mod face;
mod grid;
mod mesh;

pub use face::CubeFaceId;
pub use grid::ScalarGrid;
pub use mesh::{build_mesh, FaceGrid};
