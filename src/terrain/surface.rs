//! Surface assembly: color normalization, sea compression, and mesh
//! displacement.

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};
use crate::geometry::{FaceGrid, ScalarGrid};

/// Ocean configuration for surface assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Normalized height of the ocean surface, strictly inside (0, 1).
    pub sea_level: f64,
    /// Steepness of the color compression below sea level (non-zero).
    pub sea_fade: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            sea_level: 0.55,
            sea_fade: 20.0,
        }
    }
}

impl SurfaceConfig {
    /// Checks the ocean parameters before any grid work.
    pub fn validate(&self) -> Result<()> {
        const STAGE: &str = "surface";
        if !self.sea_level.is_finite() || self.sea_level <= 0.0 || self.sea_level >= 1.0 {
            return Err(GenError::invalid(
                STAGE,
                "sea_level",
                self.sea_level,
                "must lie strictly between 0 and 1",
            ));
        }
        if !self.sea_fade.is_finite() || self.sea_fade == 0.0 {
            return Err(GenError::invalid(
                STAGE,
                "sea_fade",
                self.sea_fade,
                "must be finite and non-zero",
            ));
        }
        Ok(())
    }
}

/// Everything the presentation layer needs to draw a planet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetSurface {
    /// Terrain mesh: direction vectors scaled by their raw heights.
    pub terrain: [FaceGrid; 6],
    /// Per-face color values in [0, 1], sea-compressed.
    pub colors: [ScalarGrid; 6],
    /// Sea shell: direction vectors scaled by one uniform radius.
    pub sea: [FaceGrid; 6],
    /// The configured sea level, passed through for display styling.
    pub sea_level: f64,
    /// Global (min, max) of the raw height field.
    pub height_range: (f64, f64),
}

/// Assembles the displaced terrain, color field and sea shell from the
/// undisplaced mesh and its height grids.
///
/// Colors are the heights min-max normalized into [0, 1] and then
/// clamped below the exponential sea curve
/// `sea_level / (e^(fade * sea_level) - 1) * (e^(fade * c) - 1)`,
/// which passes through 0 at 0 and exceeds the identity line above the
/// sea level, so only values at or below sea level are compressed.
pub fn build_surface(
    faces: &[FaceGrid; 6],
    heights: &[ScalarGrid; 6],
    config: &SurfaceConfig,
) -> Result<PlanetSurface> {
    config.validate()?;

    let mut min_h = f64::MAX;
    let mut max_h = f64::MIN;
    for grid in heights {
        let (lo, hi) = grid.range();
        min_h = min_h.min(lo);
        max_h = max_h.max(hi);
    }
    if !(max_h > min_h) {
        return Err(GenError::invalid(
            "surface",
            "heights",
            max_h - min_h,
            "height field is flat; normalization would divide by zero",
        ));
    }
    let span = max_h - min_h;

    let scale = config.sea_level / ((config.sea_fade * config.sea_level).exp() - 1.0);
    let colors: [ScalarGrid; 6] = std::array::from_fn(|i| {
        heights[i].clone().map(|h| {
            let c = (h - min_h) / span;
            c.min(scale * ((config.sea_fade * c).exp() - 1.0))
        })
    });

    let terrain: [FaceGrid; 6] = std::array::from_fn(|i| faces[i].scaled_by(heights[i].values()));

    let sea_radius = min_h + config.sea_level * span;
    let sea: [FaceGrid; 6] = std::array::from_fn(|i| faces[i].scaled_uniform(sea_radius));

    Ok(PlanetSurface {
        terrain,
        colors,
        sea,
        sea_level: config.sea_level,
        height_range: (min_h, max_h),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::build_mesh;
    use crate::noise::{generate_heights, FractalNoiseConfig};

    fn mesh_and_heights(dim: usize, seed: u64) -> ([FaceGrid; 6], [ScalarGrid; 6]) {
        let faces = build_mesh(dim).unwrap();
        let config = FractalNoiseConfig::with_seed(seed);
        let heights = generate_heights(&faces, &config).unwrap();
        (faces, heights)
    }

    #[test]
    fn test_colors_stay_in_unit_interval() {
        let (faces, heights) = mesh_and_heights(12, 17);
        for config in [
            SurfaceConfig::default(),
            SurfaceConfig {
                sea_level: 0.2,
                sea_fade: 5.0,
            },
            SurfaceConfig {
                sea_level: 0.9,
                sea_fade: -3.0,
            },
        ] {
            let surface = build_surface(&faces, &heights, &config).unwrap();
            for grid in &surface.colors {
                for &c in grid.values() {
                    assert!((0.0..=1.0).contains(&c), "color {} outside [0, 1]", c);
                }
            }
        }
    }

    #[test]
    fn test_compression_fixed_point_at_zero() {
        // The cell holding the global minimum normalizes to exactly 0,
        // and e^0 - 1 = 0 keeps it there through the sea clamp.
        let (faces, heights) = mesh_and_heights(10, 23);
        let config = SurfaceConfig {
            sea_level: 0.5,
            sea_fade: 20.0,
        };
        let surface = build_surface(&faces, &heights, &config).unwrap();
        let min_color = surface
            .colors
            .iter()
            .flat_map(|g| g.values())
            .cloned()
            .fold(f64::MAX, f64::min);
        assert_eq!(min_color, 0.0);
    }

    #[test]
    fn test_terrain_points_scaled_by_raw_height() {
        let (faces, heights) = mesh_and_heights(6, 31);
        let surface = build_surface(&faces, &heights, &SurfaceConfig::default()).unwrap();
        for (i, face) in surface.terrain.iter().enumerate() {
            for row in 0..face.dim {
                for col in 0..face.dim {
                    let radius = face.point(row, col).length();
                    let height = heights[i].get(row, col);
                    assert!(
                        (radius - height).abs() < 1e-12,
                        "terrain radius {} != height {}",
                        radius,
                        height
                    );
                }
            }
        }
    }

    #[test]
    fn test_sea_shell_has_uniform_radius() {
        let (faces, heights) = mesh_and_heights(6, 31);
        let config = SurfaceConfig::default();
        let surface = build_surface(&faces, &heights, &config).unwrap();
        let (min_h, max_h) = surface.height_range;
        let expected = min_h + config.sea_level * (max_h - min_h);
        for face in &surface.sea {
            for row in 0..face.dim {
                for col in 0..face.dim {
                    let radius = face.point(row, col).length();
                    assert!(
                        (radius - expected).abs() < 1e-12,
                        "sea radius {} != {}",
                        radius,
                        expected
                    );
                }
            }
        }
    }

    #[test]
    fn test_flat_height_field_rejected() {
        let faces = build_mesh(4).unwrap();
        let heights: [ScalarGrid; 6] = std::array::from_fn(|_| ScalarGrid::filled(4, 1.0));
        let err = build_surface(&faces, &heights, &SurfaceConfig::default()).unwrap_err();
        match err {
            GenError::InvalidArgument { stage, param, .. } => {
                assert_eq!(stage, "surface");
                assert_eq!(param, "heights");
            }
        }
    }

    #[test]
    fn test_zero_sea_fade_rejected() {
        let (faces, heights) = mesh_and_heights(4, 1);
        let config = SurfaceConfig {
            sea_fade: 0.0,
            ..SurfaceConfig::default()
        };
        let err = build_surface(&faces, &heights, &config).unwrap_err();
        match err {
            GenError::InvalidArgument { param, .. } => assert_eq!(param, "sea_fade"),
        }
    }

    #[test]
    fn test_sea_level_bounds_rejected() {
        for bad in [0.0, 1.0, -0.5, 1.5] {
            let config = SurfaceConfig {
                sea_level: bad,
                ..SurfaceConfig::default()
            };
            assert!(config.validate().is_err(), "sea_level {} should fail", bad);
        }
    }
}
