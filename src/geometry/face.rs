//! Cube face identification and enumeration.

use serde::{Deserialize, Serialize};

/// Identifies one face of the cube-sphere.
///
/// The discriminants follow mesh construction order: the four equatorial
/// faces walked counter-clockwise starting at +X, then the two poles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CubeFaceId {
    /// +X face (front)
    PosX = 0,
    /// +Y face (right)
    PosY = 1,
    /// -X face (back)
    NegX = 2,
    /// -Y face (left)
    NegY = 3,
    /// +Z face (top)
    PosZ = 4,
    /// -Z face (bottom)
    NegZ = 5,
}

impl CubeFaceId {
    /// Returns all six cube faces in mesh construction order.
    pub const fn all() -> [CubeFaceId; 6] {
        [
            CubeFaceId::PosX,
            CubeFaceId::PosY,
            CubeFaceId::NegX,
            CubeFaceId::NegY,
            CubeFaceId::PosZ,
            CubeFaceId::NegZ,
        ]
    }

    /// Returns the face index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns a short name for the face (e.g., "posx", "negy").
    pub const fn short_name(self) -> &'static str {
        match self {
            CubeFaceId::PosX => "posx",
            CubeFaceId::PosY => "posy",
            CubeFaceId::NegX => "negx",
            CubeFaceId::NegY => "negy",
            CubeFaceId::PosZ => "posz",
            CubeFaceId::NegZ => "negz",
        }
    }
}
