//! Top-level orchestration from mesh to finished surface.

use crate::error::Result;
use crate::geometry::build_mesh;
use crate::noise::{generate_heights, FractalNoiseConfig};

use super::surface::{build_surface, PlanetSurface, SurfaceConfig};

/// Runs the full pipeline: cube-sphere mesh, fractal height field,
/// surface assembly.
///
/// `dim` is the side length of each face grid. The returned
/// [`PlanetSurface`] holds the displaced terrain, the color field and
/// the sea shell, ready for a presentation layer.
pub fn generate_planet(
    dim: usize,
    noise: &FractalNoiseConfig,
    surface: &SurfaceConfig,
) -> Result<PlanetSurface> {
    let faces = build_mesh(dim)?;
    let heights = generate_heights(&faces, noise)?;
    build_surface(&faces, &heights, surface)
}
