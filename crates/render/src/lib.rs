#![deny(unsafe_code)]
//! CPU reference renderer for the flow-field visualizer.
//!
//! [`PixelCanvas`] implements the core `Renderer` trait on an RGBA8
//! buffer: the per-frame fade becomes a black overlay blend and each
//! particle a filled, alpha-blended circle. The `png` feature (default
//! on) adds PNG export so headless hosts can write frames to disk.

pub mod canvas;

#[cfg(feature = "png")]
pub mod snapshot;

pub use canvas::PixelCanvas;
