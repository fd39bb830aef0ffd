#![deny(unsafe_code)]
//! Core types for the flow-field particle visualizer.
//!
//! Provides the `Vec2` value type, the `FlowGrid` direction-vector grid,
//! the `NoiseSource` and `Renderer` traits at the host boundaries, the
//! `Rgba` color type, the `Xorshift64` PRNG, and parameter helpers.

pub mod color;
pub mod draw;
pub mod error;
pub mod grid;
pub mod noise;
pub mod params;
pub mod prng;
pub mod vec2;

pub use color::Rgba;
pub use draw::Renderer;
pub use error::FlowError;
pub use grid::FlowGrid;
pub use noise::NoiseSource;
pub use prng::Xorshift64;
pub use vec2::Vec2;
