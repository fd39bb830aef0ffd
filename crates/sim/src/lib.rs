#![deny(unsafe_code)]
//! Flow-field particle simulation.
//!
//! Two components: the field generator builds a fresh grid of noise-driven
//! unit direction vectors every frame, and the particle system advances a
//! fixed population of particles steered by that grid: acceleration from
//! the local cell, velocity clamped to a maximum speed, and position
//! wrapped toroidally at the canvas edges. [`FlowSim`] is the frame driver
//! tying the two together with an advancing time offset.

pub mod generator;
pub mod params;
pub mod particle;
pub mod sim;
pub mod system;

pub use generator::generate;
pub use params::SimParams;
pub use particle::Particle;
pub use sim::FlowSim;
pub use system::ParticleSystem;
