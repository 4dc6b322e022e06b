//! Cube-sphere mesh construction.
//!
//! One flat `dim x dim` grid is built over `[-1, 1]^2` at a fixed third
//! coordinate of +1, projected onto the unit sphere by dividing each
//! point by its Euclidean norm, and the remaining five faces are axis
//! permutations/negations of it. The projection is gnomonic: sample
//! density concentrates near face centers and thins toward corners,
//! which is an accepted property of this mesh.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::face::CubeFaceId;
use crate::error::{GenError, Result};

/// Unit direction vectors for one face of the cube-sphere.
///
/// Components are stored as three row-major `dim * dim` grids so noise
/// evaluation can stream each axis independently. Every point satisfies
/// `x^2 + y^2 + z^2 = 1` within floating tolerance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceGrid {
    /// Which cube face these directions belong to.
    pub id: CubeFaceId,
    /// Side length of the grids.
    pub dim: usize,
    /// X components, row-major.
    pub x: Vec<f64>,
    /// Y components, row-major.
    pub y: Vec<f64>,
    /// Z components, row-major.
    pub z: Vec<f64>,
}

impl FaceGrid {
    fn zeroed(id: CubeFaceId, dim: usize) -> Self {
        let n = dim * dim;
        Self {
            id,
            dim,
            x: vec![0.0; n],
            y: vec![0.0; n],
            z: vec![0.0; n],
        }
    }

    /// Number of points in the face.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if the face holds no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Direction vector at the given cell.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    pub fn point(&self, row: usize, col: usize) -> DVec3 {
        debug_assert!(row < self.dim && col < self.dim);
        let i = row * self.dim + col;
        DVec3::new(self.x[i], self.y[i], self.z[i])
    }

    /// Returns a copy with each direction vector scaled by the matching
    /// entry of `radii` (row-major, same shape).
    pub fn scaled_by(&self, radii: &[f64]) -> FaceGrid {
        debug_assert_eq!(radii.len(), self.len());
        FaceGrid {
            id: self.id,
            dim: self.dim,
            x: self.x.iter().zip(radii).map(|(c, r)| c * r).collect(),
            y: self.y.iter().zip(radii).map(|(c, r)| c * r).collect(),
            z: self.z.iter().zip(radii).map(|(c, r)| c * r).collect(),
        }
    }

    /// Returns a copy with every direction vector scaled by `radius`.
    pub fn scaled_uniform(&self, radius: f64) -> FaceGrid {
        FaceGrid {
            id: self.id,
            dim: self.dim,
            x: self.x.iter().map(|c| c * radius).collect(),
            y: self.y.iter().map(|c| c * radius).collect(),
            z: self.z.iter().map(|c| c * radius).collect(),
        }
    }
}

/// Builds the six faces of a cube-sphere with `dim x dim` points each.
///
/// Adjacent faces share their boundary points exactly, so the union of
/// all six faces is a seamless spherical sample. `dim = 1` degenerates
/// to a single point per face; `dim = 0` fails with InvalidArgument.
pub fn build_mesh(dim: usize) -> Result<[FaceGrid; 6]> {
    if dim < 1 {
        return Err(GenError::invalid("mesh", "dim", dim as f64, "must be at least 1"));
    }

    let ids = CubeFaceId::all();
    let mut faces: [FaceGrid; 6] = std::array::from_fn(|i| FaceGrid::zeroed(ids[i], dim));

    // Axis samples evenly spaced over [-1, 1]; a single-sample face
    // degenerates to the -1 end.
    let lin: Vec<f64> = if dim == 1 {
        vec![-1.0]
    } else {
        (0..dim)
            .map(|i| -1.0 + 2.0 * i as f64 / (dim - 1) as f64)
            .collect()
    };

    let mut idx = 0;
    for row in 0..dim {
        for col in 0..dim {
            // Flat +X face point before projection: rows run from +1
            // down to -1, columns from -1 to +1, third axis fixed at +1.
            let a1 = -lin[row];
            let a2 = lin[col];
            let inv = 1.0 / (a1 * a1 + a2 * a2 + 1.0).sqrt();
            let (n1, n2, n3) = (a1 * inv, a2 * inv, inv);

            faces[0].x[idx] = n3;
            faces[0].y[idx] = n2;
            faces[0].z[idx] = n1;

            faces[1].x[idx] = -n2;
            faces[1].y[idx] = n3;
            faces[1].z[idx] = n1;

            faces[2].x[idx] = -n3;
            faces[2].y[idx] = -n2;
            faces[2].z[idx] = n1;

            faces[3].x[idx] = n2;
            faces[3].y[idx] = -n3;
            faces[3].z[idx] = n1;

            faces[4].x[idx] = -n1;
            faces[4].y[idx] = n2;
            faces[4].z[idx] = n3;

            faces[5].x[idx] = n1;
            faces[5].y[idx] = n2;
            faces[5].z[idx] = -n3;

            idx += 1;
        }
    }

    Ok(faces)
}
