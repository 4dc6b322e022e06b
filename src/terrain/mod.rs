//! Terrain assembly module.
//!
//! Turns the undisplaced cube-sphere mesh and its fractal height field
//! into the final displaced terrain, color field and sea shell.

mod planet;
mod surface;

pub use planet::generate_planet;
pub use surface::{build_surface, PlanetSurface, SurfaceConfig};
