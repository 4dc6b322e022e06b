//! Single-octave 3D gradient noise over a face grid.
//!
//! Classic lattice noise with trilinear interpolation and quintic
//! smoothing, except the gradient set is the six axis-aligned unit
//! vectors rather than the canonical twelve edge directions. The output
//! range is therefore approximately but not strictly [-1, 1], which is
//! an accepted simplification.

use glam::DVec3;

use super::gradient::GradientTable;
use crate::error::{GenError, Result};
use crate::geometry::{FaceGrid, ScalarGrid};

/// Frequencies below this make the lattice step `2 / (f - 2)` degenerate.
pub const MIN_FREQUENCY: f64 = 3.0;

/// Frequencies above this push lattice indices past the 256-entry
/// permutation domain.
pub const MAX_FREQUENCY: f64 = 257.0;

pub(crate) fn validate_frequency(stage: &'static str, frequency: f64) -> Result<()> {
    if !frequency.is_finite() || frequency < MIN_FREQUENCY {
        return Err(GenError::invalid(
            stage,
            "frequency",
            frequency,
            "lattice frequency must be at least 3",
        ));
    }
    if frequency > MAX_FREQUENCY {
        return Err(GenError::invalid(
            stage,
            "frequency",
            frequency,
            "lattice frequency exceeds the permutation domain",
        ));
    }
    Ok(())
}

/// Evaluates one octave of gradient noise at every point of `face`.
///
/// `frequency` is the number of lattice cells spanning the `[-1, 1]`
/// domain. Each coordinate is rescaled into lattice-cell units with a
/// half-step offset so boundary handling is symmetric, then the eight
/// surrounding corner gradients are dotted with the corner-relative
/// offsets and blended.
pub fn sample_grid(table: &GradientTable, face: &FaceGrid, frequency: f64) -> Result<ScalarGrid> {
    validate_frequency("noise", frequency)?;
    let step = 2.0 / (frequency - 2.0);

    let mut values = Vec::with_capacity(face.len());
    for row in 0..face.dim {
        for col in 0..face.dim {
            let p = face.point(row, col);
            let q = DVec3::new(
                (p.x + 1.0 + step / 2.0) / step,
                (p.y + 1.0 + step / 2.0) / step,
                (p.z + 1.0 + step / 2.0) / step,
            );
            values.push(sample_point(table, q));
        }
    }
    Ok(ScalarGrid::from_values(face.dim, values))
}

/// Noise value at a single point in rescaled lattice coordinates.
///
/// Coordinates are strictly positive after rescaling, so truncation
/// equals floor.
pub(crate) fn sample_point(table: &GradientTable, q: DVec3) -> f64 {
    let xi = q.x as usize;
    let yi = q.y as usize;
    let zi = q.z as usize;
    let xf = q.x - xi as f64;
    let yf = q.y - yi as f64;
    let zf = q.z - zi as f64;

    // Dot products with the gradients at the eight cell corners; the
    // offset is shifted by -1 on each axis where the corner sits on the
    // +1 side.
    let n000 = table.gradient(xi, yi, zi).dot(DVec3::new(xf, yf, zf));
    let n001 = table.gradient(xi, yi, zi + 1).dot(DVec3::new(xf, yf, zf - 1.0));
    let n010 = table.gradient(xi, yi + 1, zi).dot(DVec3::new(xf, yf - 1.0, zf));
    let n100 = table.gradient(xi + 1, yi, zi).dot(DVec3::new(xf - 1.0, yf, zf));
    let n011 = table
        .gradient(xi, yi + 1, zi + 1)
        .dot(DVec3::new(xf, yf - 1.0, zf - 1.0));
    let n101 = table
        .gradient(xi + 1, yi, zi + 1)
        .dot(DVec3::new(xf - 1.0, yf, zf - 1.0));
    let n110 = table
        .gradient(xi + 1, yi + 1, zi)
        .dot(DVec3::new(xf - 1.0, yf - 1.0, zf));
    let n111 = table
        .gradient(xi + 1, yi + 1, zi + 1)
        .dot(DVec3::new(xf - 1.0, yf - 1.0, zf - 1.0));

    let u = smooth(xf);
    let v = smooth(yf);
    let w = smooth(zf);

    // Interpolate along x, then y, then z.
    let x1 = lerp(n000, n100, u);
    let x2 = lerp(n001, n101, u);
    let x3 = lerp(n010, n110, u);
    let x4 = lerp(n011, n111, u);
    let y1 = lerp(x1, x3, v);
    let y2 = lerp(x2, x4, v);
    lerp(y1, y2, w)
}

/// Quintic smoothing `6t^5 - 15t^4 + 10t^3`.
#[inline]
fn smooth(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::build_mesh;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_table(seed: u64) -> GradientTable {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        GradientTable::from_rng(&mut rng)
    }

    #[test]
    fn test_frequency_below_three_rejected() {
        let table = seeded_table(1);
        let faces = build_mesh(4).unwrap();
        for bad in [2.0, 2.9, 0.0, -5.0, f64::NAN] {
            let err = sample_grid(&table, &faces[0], bad).unwrap_err();
            match err {
                GenError::InvalidArgument { stage, param, .. } => {
                    assert_eq!(stage, "noise");
                    assert_eq!(param, "frequency");
                }
            }
        }
    }

    #[test]
    fn test_frequency_past_permutation_domain_rejected() {
        let table = seeded_table(1);
        let faces = build_mesh(4).unwrap();
        assert!(sample_grid(&table, &faces[0], 1024.0).is_err());
        assert!(sample_grid(&table, &faces[0], 257.0).is_ok());
    }

    #[test]
    fn test_smooth_endpoints_and_midpoint() {
        assert_eq!(smooth(0.0), 0.0);
        assert_eq!(smooth(1.0), 1.0);
        assert!((smooth(0.5) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_zero_at_lattice_corners() {
        // Fractional offsets are all zero, so every corner dot product
        // collapses to the n000 term, which is a dot with a zero offset.
        let table = seeded_table(5);
        for q in [
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(7.0, 7.0, 7.0),
        ] {
            assert_eq!(sample_point(&table, q), 0.0);
        }
    }

    #[test]
    fn test_deterministic_for_fixed_table() {
        let table = seeded_table(42);
        let faces = build_mesh(8).unwrap();
        let a = sample_grid(&table, &faces[2], 5.0).unwrap();
        let b = sample_grid(&table, &faces[2], 5.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_output_roughly_bounded() {
        let table = seeded_table(11);
        let faces = build_mesh(16).unwrap();
        for face in &faces {
            let grid = sample_grid(&table, face, 6.0).unwrap();
            for &v in grid.values() {
                assert!(v.is_finite());
                assert!(v.abs() <= 1.5, "noise value {} outside loose bound", v);
            }
        }
    }

    #[test]
    fn test_different_tables_differ() {
        let faces = build_mesh(8).unwrap();
        let a = sample_grid(&seeded_table(1), &faces[0], 5.0).unwrap();
        let b = sample_grid(&seeded_table(2), &faces[0], 5.0).unwrap();
        assert_ne!(a, b);
    }
}
