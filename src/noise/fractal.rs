//! Multi-octave composition of gradient noise into a height field.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::gradient::GradientTable;
use super::perlin::{sample_grid, validate_frequency};
use crate::error::{GenError, Result};
use crate::geometry::{FaceGrid, ScalarGrid};

/// Permutation policy across octaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OctavePhase {
    /// A fresh permutation per octave, so octaves are statistically
    /// independent layers rather than one lattice resampled at different
    /// frequencies. This is the original generator's look and the
    /// default.
    Independent,
    /// One permutation shared by every octave, the conventional
    /// fractal-noise arrangement.
    Shared,
}

/// Configuration for multi-octave fractal noise generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractalNoiseConfig {
    /// Number of noise layers to sum (at least 1).
    pub octaves: u32,
    /// Lattice frequency of the first octave (at least 3).
    pub base_frequency: f64,
    /// Frequency multiplier per octave (typically 2).
    pub frequency_ratio: f64,
    /// Amplitude decay per octave (typically 0.4-0.6).
    pub decay: f64,
    /// Damping divisor applied to the shaped sum (non-zero).
    pub damp: f64,
    /// Exponent shaping the summed signal; fractional values are fine
    /// because the sign is factored out before raising.
    pub power: f64,
    /// Seed for the permutation stream; `None` draws one from system
    /// entropy, `Some` gives reproducible output.
    pub seed: Option<u64>,
    /// Whether each octave gets its own permutation.
    pub phase: OctavePhase,
}

impl Default for FractalNoiseConfig {
    fn default() -> Self {
        Self {
            octaves: 6,
            base_frequency: 5.0,
            frequency_ratio: 2.0,
            decay: 0.4,
            damp: 8.0,
            power: 1.0,
            seed: None,
            phase: OctavePhase::Independent,
        }
    }
}

impl FractalNoiseConfig {
    /// Creates the default configuration with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Rougher relief: slower amplitude decay and a super-linear power
    /// that stretches peaks and trenches.
    pub fn mountainous(seed: u64) -> Self {
        Self {
            octaves: 6,
            decay: 0.55,
            damp: 6.0,
            power: 1.3,
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Gently rolling relief: few octaves, strong damping.
    pub fn rolling_hills(seed: u64) -> Self {
        Self {
            octaves: 3,
            base_frequency: 4.0,
            decay: 0.35,
            damp: 12.0,
            power: 1.0,
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Lattice frequency used by octave `octave`.
    pub fn octave_frequency(&self, octave: u32) -> f64 {
        self.base_frequency * self.frequency_ratio.powi(octave as i32)
    }

    /// Checks every precondition before any grid work is committed.
    ///
    /// In particular, each per-octave frequency is validated up front so
    /// a bad combination of `octaves`, `base_frequency` and
    /// `frequency_ratio` fails here instead of surfacing as NaN deep in
    /// the interpolation.
    pub fn validate(&self) -> Result<()> {
        const STAGE: &str = "fractal";
        if self.octaves < 1 {
            return Err(GenError::invalid(
                STAGE,
                "octaves",
                self.octaves as f64,
                "must be at least 1",
            ));
        }
        if !self.damp.is_finite() || self.damp == 0.0 {
            return Err(GenError::invalid(
                STAGE,
                "damp",
                self.damp,
                "must be finite and non-zero",
            ));
        }
        if !self.power.is_finite() {
            return Err(GenError::invalid(STAGE, "power", self.power, "must be finite"));
        }
        if !self.decay.is_finite() {
            return Err(GenError::invalid(STAGE, "decay", self.decay, "must be finite"));
        }
        if !self.frequency_ratio.is_finite() || self.frequency_ratio <= 0.0 {
            return Err(GenError::invalid(
                STAGE,
                "frequency_ratio",
                self.frequency_ratio,
                "must be finite and positive",
            ));
        }
        for octave in 0..self.octaves {
            validate_frequency(STAGE, self.octave_frequency(octave))?;
        }
        Ok(())
    }
}

/// Sums gradient noise across octaves and shapes the result.
///
/// Each octave is evaluated at `base_frequency * frequency_ratio^o`,
/// weighted by `decay^o` and accumulated; the sum is then shaped with
/// `1 + sign(sum) * |sum|^power / damp`, centering the heights near 1.0
/// so they can be used directly as radius multipliers.
///
/// The six faces of one octave share a single permutation and are
/// evaluated in parallel; octaves accumulate sequentially so the sum is
/// deterministic for a fixed seed.
pub fn generate_heights(
    faces: &[FaceGrid; 6],
    config: &FractalNoiseConfig,
) -> Result<[ScalarGrid; 6]> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let dim = faces[0].dim;
    let mut sums: [Vec<f64>; 6] = std::array::from_fn(|_| vec![0.0; dim * dim]);

    let shared = match config.phase {
        OctavePhase::Shared => Some(GradientTable::from_rng(&mut rng)),
        OctavePhase::Independent => None,
    };

    for octave in 0..config.octaves {
        let table = match &shared {
            Some(table) => table.clone(),
            None => GradientTable::from_rng(&mut rng),
        };
        let frequency = config.octave_frequency(octave);
        let amplitude = config.decay.powi(octave as i32);

        let layers: Vec<ScalarGrid> = faces
            .par_iter()
            .map(|face| sample_grid(&table, face, frequency))
            .collect::<Result<Vec<_>>>()?;

        for (sum, layer) in sums.iter_mut().zip(&layers) {
            for (s, &v) in sum.iter_mut().zip(layer.values()) {
                *s += amplitude * v;
            }
        }
    }

    Ok(sums.map(|values| {
        ScalarGrid::from_values(dim, values)
            .map(|v| 1.0 + sign(v) * v.abs().powf(config.power) / config.damp)
    }))
}

/// Sign with a zero fixed point, unlike `f64::signum` which maps +0 to 1.
#[inline]
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
