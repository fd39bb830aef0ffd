//! The frame driver.
//!
//! `FlowSim` owns the pieces a host needs to run the visualization: the
//! simulation clock (`z_offset`), the injected noise source, and the
//! particle system. One `frame` call is one full tick: advance the clock,
//! rebuild the flow field from the current canvas size, issue the fade
//! overlay, then step and draw every particle.

use crate::generator::generate;
use crate::params::SimParams;
use crate::system::ParticleSystem;
use flow_field_core::draw::Renderer;
use flow_field_core::error::FlowError;
use flow_field_core::noise::{NoiseSource, PerlinNoise};
use flow_field_core::prng::Xorshift64;
use serde_json::Value;

/// A complete flow-field simulation bound to a canvas.
pub struct FlowSim {
    params: SimParams,
    width: f64,
    height: f64,
    z_offset: f64,
    noise: Box<dyn NoiseSource>,
    system: ParticleSystem,
}

impl FlowSim {
    /// Creates a simulation with seeded Perlin noise. Particle placement
    /// and colors derive from the same seed, so identical seeds reproduce
    /// identical runs.
    ///
    /// Fails fast on zero canvas dimensions or invalid parameters.
    pub fn new(width: usize, height: usize, seed: u64, params: SimParams) -> Result<Self, FlowError> {
        let noise = Box::new(PerlinNoise::new(seed as u32));
        Self::with_noise(width, height, seed, params, noise)
    }

    /// Creates a simulation with an explicit noise source.
    pub fn with_noise(
        width: usize,
        height: usize,
        seed: u64,
        params: SimParams,
        noise: Box<dyn NoiseSource>,
    ) -> Result<Self, FlowError> {
        if width == 0 || height == 0 {
            return Err(FlowError::InvalidDimensions);
        }
        params.validate()?;
        let mut rng = Xorshift64::new(seed);
        let system = ParticleSystem::new(&params, width as f64, height as f64, &mut rng)?;
        Ok(Self {
            params,
            width: width as f64,
            height: height as f64,
            z_offset: 0.0,
            noise,
            system,
        })
    }

    /// Creates a simulation from a JSON params object (see
    /// [`SimParams::from_json`]).
    pub fn from_json(
        width: usize,
        height: usize,
        seed: u64,
        json_params: &Value,
    ) -> Result<Self, FlowError> {
        Self::new(width, height, seed, SimParams::from_json(json_params))
    }

    /// Runs one frame: advance the time offset, regenerate the field from
    /// the current canvas size, fade, then step and draw all particles.
    pub fn frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        self.z_offset += self.params.z_step;
        let grid = generate(
            self.width,
            self.height,
            self.params.cell_size,
            self.params.noise_scale,
            self.z_offset,
            self.noise.as_ref(),
        );
        renderer.fade(self.params.fade_alpha);
        self.system.step(
            &grid,
            self.params.cell_size,
            self.width,
            self.height,
            renderer,
        );
    }

    /// Updates the canvas size for subsequent frames. The grid is rebuilt
    /// from the new size on the next `frame`; particles keep their
    /// positions and wrap against the new bounds.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), FlowError> {
        if width == 0 || height == 0 {
            return Err(FlowError::InvalidDimensions);
        }
        self.width = width as f64;
        self.height = height as f64;
        Ok(())
    }

    /// The current simulation-clock value.
    pub fn z_offset(&self) -> f64 {
        self.z_offset
    }

    /// Read-only access to the particle system.
    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    /// Current parameter values as JSON.
    pub fn params_json(&self) -> Value {
        self.params.to_json()
    }

    /// Parameter schema as JSON (see [`SimParams::schema`]).
    pub fn param_schema(&self) -> Value {
        SimParams::schema()
    }
}
