//! Noise sources: smooth pseudo-random scalar fields in three dimensions
//! (two spatial coordinates plus a time-like offset).
//!
//! The simulation treats noise as an opaque injected dependency: any
//! [`NoiseSource`] works, as long as the same inputs produce the same
//! output within a run. Samples are remapped to the conventional `[0, 1)`
//! range expected by the angle mapping in the field generator.

use crate::error::FlowError;
use noise::{NoiseFn, OpenSimplex, Perlin};

/// Names accepted by [`from_name`], in listing order.
pub const NOISE_NAMES: &[&str] = &["perlin", "simplex"];

/// A deterministic, smoothly varying scalar field sampled at
/// `(x, y, z)`, returning a value in `[0, 1]`.
///
/// Implementations must be deterministic: same inputs, same output.
pub trait NoiseSource: Send + Sync {
    /// Sample the field at `(x, y)` with time-like offset `z`.
    fn sample(&self, x: f64, y: f64, z: f64) -> f64;
}

/// Perlin noise, seeded.
pub struct PerlinNoise {
    inner: Perlin,
}

/// OpenSimplex noise, seeded. Smoother gradients than Perlin at the same
/// sampling scale.
pub struct SimplexNoise {
    inner: OpenSimplex,
}

/// A noise source returning a fixed value everywhere. Useful for tests and
/// for freezing the field to a single direction.
pub struct ConstantNoise {
    value: f64,
}

impl PerlinNoise {
    /// Creates a seeded Perlin source.
    pub fn new(seed: u32) -> Self {
        Self {
            inner: Perlin::new(seed),
        }
    }
}

impl SimplexNoise {
    /// Creates a seeded OpenSimplex source.
    pub fn new(seed: u32) -> Self {
        Self {
            inner: OpenSimplex::new(seed),
        }
    }
}

impl ConstantNoise {
    /// Creates a source that returns `value` for every sample.
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

/// Remaps the `noise` crate's nominal `[-1, 1]` output to `[0, 1]`.
fn remap_unit(v: f64) -> f64 {
    (0.5 * (v + 1.0)).clamp(0.0, 1.0)
}

impl NoiseSource for PerlinNoise {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        remap_unit(self.inner.get([x, y, z]))
    }
}

impl NoiseSource for SimplexNoise {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        remap_unit(self.inner.get([x, y, z]))
    }
}

impl NoiseSource for ConstantNoise {
    fn sample(&self, _x: f64, _y: f64, _z: f64) -> f64 {
        self.value
    }
}

/// Constructs a noise source by name.
///
/// Accepts `"perlin"`, `"simplex"`, or `"constant:<value>"` (the latter
/// mainly for debugging frozen fields). Returns `FlowError::UnknownNoise`
/// for anything else.
pub fn from_name(name: &str, seed: u32) -> Result<Box<dyn NoiseSource>, FlowError> {
    match name {
        "perlin" => Ok(Box::new(PerlinNoise::new(seed))),
        "simplex" => Ok(Box::new(SimplexNoise::new(seed))),
        other => {
            if let Some(value) = other.strip_prefix("constant:") {
                let value: f64 = value
                    .parse()
                    .map_err(|_| FlowError::UnknownNoise(other.to_string()))?;
                return Ok(Box::new(ConstantNoise::new(value)));
            }
            Err(FlowError::UnknownNoise(other.to_string()))
        }
    }
}
