//! RGBA8 pixel canvas implementing the simulation's `Renderer` trait.
//!
//! The canvas starts opaque black (the visualization's background). The
//! per-frame fade request blends black over everything at a low alpha,
//! which is what turns particle motion into decaying trails. Particle
//! draws are filled circles composited with source-over blending.

use flow_field_core::color::Rgba;
use flow_field_core::draw::Renderer;
use flow_field_core::error::FlowError;

/// An in-memory RGBA8 canvas.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

/// Source-over blend of one channel at the given alpha.
fn blend(dst: u8, src: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}

impl PixelCanvas {
    /// Creates an opaque black canvas.
    ///
    /// Returns `FlowError::InvalidDimensions` if either dimension is zero
    /// or `width * height` overflows.
    pub fn new(width: usize, height: usize) -> Result<Self, FlowError> {
        if width == 0 || height == 0 {
            return Err(FlowError::InvalidDimensions);
        }
        let pixels = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(FlowError::InvalidDimensions)?;
        let mut data = vec![0u8; pixels];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the RGBA8 buffer, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The color at pixel `(x, y)`, or `None` if out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some(Rgba::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }
}

impl Renderer for PixelCanvas {
    fn fade(&mut self, alpha: u8) {
        if alpha == 0 {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            px[0] = blend(px[0], 0, alpha);
            px[1] = blend(px[1], 0, alpha);
            px[2] = blend(px[2], 0, alpha);
            // Alpha channel stays opaque
        }
    }

    fn draw_particle(&mut self, x: f64, y: f64, diameter: f64, color: Rgba) {
        if diameter <= 0.0 {
            return;
        }
        let radius = diameter / 2.0;
        let min_x = ((x - radius).floor().max(0.0)) as usize;
        let min_y = ((y - radius).floor().max(0.0)) as usize;
        let max_x = ((x + radius).ceil().min(self.width as f64)) as usize;
        let max_y = ((y + radius).ceil().min(self.height as f64)) as usize;

        for py in min_y..max_y {
            for px in min_x..max_x {
                // Test the pixel center against the circle
                let dx = px as f64 + 0.5 - x;
                let dy = py as f64 + 0.5 - y;
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let i = (py * self.width + px) * 4;
                self.data[i] = blend(self.data[i], color.r, color.a);
                self.data[i + 1] = blend(self.data[i + 1], color.g, color.a);
                self.data[i + 2] = blend(self.data[i + 2], color.b, color.a);
            }
        }
    }
}
