//! Procedural planet surface generator.
//!
//! Builds a seamless cube-sphere mesh, perturbs each surface point with
//! multi-octave 3D gradient noise, and derives a normalized elevation
//! used both to displace the mesh radially and to color it, with a
//! separate sea shell at a configurable level.
//!
//! The typical entry point is [`generate_planet`]; the individual
//! stages ([`build_mesh`], [`generate_heights`], [`build_surface`]) are
//! exposed for callers that want to reuse a mesh or post-process the
//! height field.

pub mod error;
pub mod geometry;
pub mod noise;
pub mod terrain;

pub use error::{GenError, Result};
pub use geometry::{build_mesh, CubeFaceId, FaceGrid, ScalarGrid};
pub use noise::{generate_heights, FractalNoiseConfig, GradientTable, OctavePhase};
pub use terrain::{build_surface, generate_planet, PlanetSurface, SurfaceConfig};
