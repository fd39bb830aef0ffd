//! The outbound rendering interface.
//!
//! The simulation never touches pixels. Each frame it issues one fade
//! request (the low-opacity overlay that produces the trailing effect)
//! followed by one draw request per particle. Hosts implement [`Renderer`]
//! however they like: a CPU pixel buffer, a GPU canvas, or a recording
//! sink in tests.

use crate::color::Rgba;

/// Receives per-frame draw requests from the simulation.
pub trait Renderer {
    /// Full-canvas fade toward black at the given alpha (0 = no-op,
    /// 255 = clear to black). Issued once per frame, before any particle.
    fn fade(&mut self, alpha: u8);

    /// Draw a single particle: a filled circle of `diameter` canvas units
    /// centered at `(x, y)`.
    fn draw_particle(&mut self, x: f64, y: f64, diameter: f64, color: Rgba);
}

/// A renderer that discards every request. Handy for headless stepping.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn fade(&mut self, _alpha: u8) {}

    fn draw_particle(&mut self, _x: f64, _y: f64, _diameter: f64, _color: Rgba) {}
}
