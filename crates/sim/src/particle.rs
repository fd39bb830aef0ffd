//! A single steered particle.
//!
//! Particles are created once at system construction and live for the
//! whole run. Per frame: forces accumulate into a transient acceleration,
//! integration folds acceleration into velocity (clamped to `max_speed`)
//! and velocity into position, then the position wraps toroidally at the
//! canvas edges. The color is assigned at construction and never changes.

use flow_field_core::color::Rgba;
use flow_field_core::prng::Xorshift64;
use flow_field_core::vec2::Vec2;

/// A particle steered by the flow field.
#[derive(Debug, Clone)]
pub struct Particle {
    pos: Vec2,
    vel: Vec2,
    acc: Vec2,
    max_speed: f64,
    color: Rgba,
}

impl Particle {
    /// Creates a particle at `pos` with zero velocity and acceleration.
    pub fn new(pos: Vec2, max_speed: f64, color: Rgba) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            max_speed,
            color,
        }
    }

    /// Creates a particle at a uniformly random position within
    /// `[0, width) x [0, height)`, with a random-RGB color at the given
    /// fixed alpha.
    pub fn random(
        rng: &mut Xorshift64,
        width: f64,
        height: f64,
        max_speed: f64,
        alpha: u8,
    ) -> Self {
        let pos = Vec2::new(rng.next_range(0.0, width), rng.next_range(0.0, height));
        let color = Rgba::random_rgb(rng, alpha);
        Self::new(pos, max_speed, color)
    }

    /// Current position.
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Current velocity.
    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// The immutable display color.
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Accumulates a force into the transient acceleration. Multiple
    /// forces may contribute within one frame.
    pub fn apply_force(&mut self, force: Vec2) {
        self.acc += force;
    }

    /// One integration step: velocity absorbs the accumulated
    /// acceleration and is clamped to `max_speed` by uniform scaling,
    /// position advances by the velocity, and the acceleration resets to
    /// zero for the next frame.
    pub fn integrate(&mut self) {
        self.vel = (self.vel + self.acc).clamp_length(self.max_speed);
        self.pos += self.vel;
        self.acc = Vec2::ZERO;
    }

    /// Wraps the position at the canvas edges, one axis at a time: past
    /// the upper bound teleports to 0, below 0 teleports to the bound.
    /// Velocity is untouched; this is a teleport, not a bounce.
    pub fn wrap(&mut self, width: f64, height: f64) {
        if self.pos.x > width {
            self.pos.x = 0.0;
        }
        if self.pos.x < 0.0 {
            self.pos.x = width;
        }
        if self.pos.y > height {
            self.pos.y = 0.0;
        }
        if self.pos.y < 0.0 {
            self.pos.y = height;
        }
    }
}
