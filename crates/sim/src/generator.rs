//! Flow-field generation.
//!
//! Each frame, a fresh grid of unit direction vectors is sampled from a
//! 3D noise function: two spatial coordinates (the cell indices, scaled)
//! plus the frame driver's advancing time offset. The noise value is
//! mapped to an angle spanning several full rotations, so adjacent noise
//! values can steer in widely different directions while the field still
//! varies smoothly.

use flow_field_core::grid::FlowGrid;
use flow_field_core::noise::NoiseSource;
use flow_field_core::vec2::Vec2;
use std::f64::consts::TAU;

/// Full rotations spanned by the noise range: `angle = n * 2π * ANGLE_TURNS`.
pub const ANGLE_TURNS: f64 = 4.0;

/// Generates the flow field for one frame.
///
/// Grid dimensions are `floor(width / cell_size)` by
/// `floor(height / cell_size)`; a canvas smaller than one cell yields an
/// empty grid, which downstream lookup handles by applying no force. For
/// each cell `(x, y)` the stored direction is the unit vector at
/// `noise(x * noise_scale, y * noise_scale, z_offset) * 2π * 4` radians.
///
/// Pure function of its arguments; the noise source must be deterministic
/// but may carry internal seeded state.
pub fn generate(
    width: f64,
    height: f64,
    cell_size: f64,
    noise_scale: f64,
    z_offset: f64,
    noise: &dyn NoiseSource,
) -> FlowGrid {
    if cell_size <= 0.0 {
        return FlowGrid::empty();
    }
    let cols = (width / cell_size).floor().max(0.0) as usize;
    let rows = (height / cell_size).floor().max(0.0) as usize;

    FlowGrid::from_fn(cols, rows, |col, row| {
        let n = noise.sample(col as f64 * noise_scale, row as f64 * noise_scale, z_offset);
        Vec2::from_angle(n * TAU * ANGLE_TURNS)
    })
}
