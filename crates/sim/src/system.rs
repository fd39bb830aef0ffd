//! The particle population and its per-frame update pass.
//!
//! The system owns a fixed set of particles created once at construction.
//! `step` runs the whole pass for one frame against a frame-immutable
//! grid: clamped cell lookup, force application, integration, wrap, and
//! one draw request per particle. Particle updates are independent of
//! each other; the grid is read-only for the duration of the pass.

use crate::params::SimParams;
use crate::particle::Particle;
use flow_field_core::draw::Renderer;
use flow_field_core::error::FlowError;
use flow_field_core::grid::FlowGrid;
use flow_field_core::prng::Xorshift64;

/// A fixed population of flow-field particles.
#[derive(Debug)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    diameter: f64,
}

impl ParticleSystem {
    /// Creates `params.particle_count` particles at uniformly random
    /// positions inside the canvas, with zero velocity and random colors.
    ///
    /// Fails fast on invalid parameters or non-positive canvas dimensions.
    pub fn new(
        params: &SimParams,
        width: f64,
        height: f64,
        rng: &mut Xorshift64,
    ) -> Result<Self, FlowError> {
        params.validate()?;
        if width <= 0.0 || height <= 0.0 {
            return Err(FlowError::InvalidDimensions);
        }
        let particles = (0..params.particle_count)
            .map(|_| Particle::random(rng, width, height, params.max_speed, params.particle_alpha))
            .collect();
        Ok(Self {
            particles,
            diameter: params.particle_diameter,
        })
    }

    /// Creates a system from pre-built particles. Hosts and tests use this
    /// to control starting positions exactly.
    pub fn from_particles(particles: Vec<Particle>, diameter: f64) -> Self {
        Self {
            particles,
            diameter,
        }
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True if the system holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Read-only access to the particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advances every particle by one frame against `grid` and issues one
    /// draw request per particle.
    ///
    /// The cell lookup clamps into the grid; on a degenerate (zero-cell)
    /// grid no force is applied and particles coast on their current
    /// velocity. Wrapping happens after integration, so a drawn position
    /// is always within `[0, width] x [0, height]`.
    pub fn step<R: Renderer + ?Sized>(
        &mut self,
        grid: &FlowGrid,
        cell_size: f64,
        width: f64,
        height: f64,
        renderer: &mut R,
    ) {
        for p in &mut self.particles {
            let pos = p.position();
            if let Some(force) = grid.force_at(pos.x, pos.y, cell_size) {
                p.apply_force(force);
            }
            p.integrate();
            p.wrap(width, height);
            let pos = p.position();
            renderer.draw_particle(pos.x, pos.y, self.diameter, p.color());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use flow_field_core::color::Rgba;
    use flow_field_core::noise::ConstantNoise;
    use flow_field_core::vec2::Vec2;

    /// Renderer that records every draw request for assertions.
    #[derive(Default)]
    struct Recording {
        fades: Vec<u8>,
        draws: Vec<(f64, f64, f64, Rgba)>,
    }

    impl Renderer for Recording {
        fn fade(&mut self, alpha: u8) {
            self.fades.push(alpha);
        }

        fn draw_particle(&mut self, x: f64, y: f64, diameter: f64, color: Rgba) {
            self.draws.push((x, y, diameter, color));
        }
    }

    fn single_particle_system(x: f64, y: f64) -> ParticleSystem {
        let p = Particle::new(Vec2::new(x, y), 2.0, Rgba::new(10, 20, 30, 100));
        ParticleSystem::from_particles(vec![p], 2.0)
    }

    // -- Construction --

    #[test]
    fn new_creates_requested_population() {
        let mut rng = Xorshift64::new(42);
        let system = ParticleSystem::new(&SimParams::default(), 1800.0, 1800.0, &mut rng).unwrap();
        assert_eq!(system.len(), 1000);
        for p in system.particles() {
            assert_eq!(p.velocity(), Vec2::ZERO);
        }
    }

    #[test]
    fn new_rejects_invalid_params() {
        let mut rng = Xorshift64::new(42);
        let bad = SimParams {
            particle_count: 0,
            ..SimParams::default()
        };
        assert!(ParticleSystem::new(&bad, 1800.0, 1800.0, &mut rng).is_err());
    }

    #[test]
    fn new_rejects_non_positive_canvas() {
        let mut rng = Xorshift64::new(42);
        let params = SimParams::default();
        assert!(matches!(
            ParticleSystem::new(&params, 0.0, 100.0, &mut rng),
            Err(FlowError::InvalidDimensions)
        ));
        assert!(ParticleSystem::new(&params, 100.0, -1.0, &mut rng).is_err());
    }

    #[test]
    fn same_seed_same_layout() {
        let params = SimParams::default();
        let mut rng_a = Xorshift64::new(7);
        let mut rng_b = Xorshift64::new(7);
        let a = ParticleSystem::new(&params, 900.0, 900.0, &mut rng_a).unwrap();
        let b = ParticleSystem::new(&params, 900.0, 900.0, &mut rng_b).unwrap();
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.position(), pb.position());
            assert_eq!(pa.color(), pb.color());
        }
    }

    // -- End-to-end reference scenario --

    #[test]
    fn one_step_against_constant_eighth_noise_wraps_left() {
        // n = 0.125 maps to angle π, so the field pushes (-1, 0)
        // everywhere. A particle at the origin accelerates to velocity
        // (-1, 0), moves to (-1, 0), and wraps to (1800, 0).
        let noise = ConstantNoise::new(0.125);
        let grid = generate(1800.0, 1800.0, 900.0, 1.0, 0.0, &noise);
        let mut system = single_particle_system(0.0, 0.0);
        let mut renderer = Recording::default();

        system.step(&grid, 900.0, 1800.0, 1800.0, &mut renderer);

        let p = &system.particles()[0];
        assert!((p.velocity().x + 1.0).abs() < 1e-9, "vx = {}", p.velocity().x);
        assert!(p.velocity().y.abs() < 1e-9, "vy = {}", p.velocity().y);
        assert!((p.position().x - 1800.0).abs() < 1e-9, "x = {}", p.position().x);
        assert!(p.position().y.abs() < 1e-9, "y = {}", p.position().y);
    }

    // -- Degenerate grid --

    #[test]
    fn step_against_empty_grid_applies_no_force() {
        let noise = ConstantNoise::new(0.5);
        // 100x100 canvas with 900-unit cells: zero cols, zero rows
        let grid = generate(100.0, 100.0, 900.0, 1.0, 0.0, &noise);
        assert!(grid.is_empty());

        let mut system = single_particle_system(50.0, 50.0);
        let mut renderer = Recording::default();
        system.step(&grid, 900.0, 100.0, 100.0, &mut renderer);

        let p = &system.particles()[0];
        assert_eq!(p.velocity(), Vec2::ZERO);
        assert_eq!(p.position(), Vec2::new(50.0, 50.0));
        // Still drawn, just unmoved
        assert_eq!(renderer.draws.len(), 1);
    }

    // -- Draw requests --

    #[test]
    fn step_issues_one_draw_per_particle() {
        let params = SimParams {
            particle_count: 25,
            ..SimParams::default()
        };
        let mut rng = Xorshift64::new(42);
        let mut system = ParticleSystem::new(&params, 1800.0, 1800.0, &mut rng).unwrap();
        let noise = ConstantNoise::new(0.6);
        let grid = generate(1800.0, 1800.0, 900.0, 1.0, 0.0, &noise);
        let mut renderer = Recording::default();

        system.step(&grid, 900.0, 1800.0, 1800.0, &mut renderer);
        assert_eq!(renderer.draws.len(), 25);
        for &(x, y, d, color) in &renderer.draws {
            assert!((0.0..=1800.0).contains(&x));
            assert!((0.0..=1800.0).contains(&y));
            assert!((d - 2.0).abs() < f64::EPSILON);
            assert_eq!(color.a, 100);
        }
    }

    #[test]
    fn draw_uses_post_wrap_position() {
        let noise = ConstantNoise::new(0.125); // pushes (-1, 0)
        let grid = generate(1800.0, 1800.0, 900.0, 1.0, 0.0, &noise);
        let mut system = single_particle_system(0.0, 0.0);
        let mut renderer = Recording::default();
        system.step(&grid, 900.0, 1800.0, 1800.0, &mut renderer);
        let (x, _, _, _) = renderer.draws[0];
        assert!((x - 1800.0).abs() < 1e-9, "drawn at pre-wrap x = {x}");
    }

    // -- Invariants over many frames --

    #[test]
    fn speed_and_bounds_hold_over_many_frames() {
        let params = SimParams {
            particle_count: 40,
            cell_size: 100.0,
            ..SimParams::default()
        };
        let mut rng = Xorshift64::new(99);
        let mut system = ParticleSystem::new(&params, 800.0, 600.0, &mut rng).unwrap();
        let mut renderer = Recording::default();

        for frame in 0..200 {
            let noise = ConstantNoise::new((frame % 10) as f64 / 10.0);
            let grid = generate(800.0, 600.0, 100.0, 1.0, 0.0, &noise);
            system.step(&grid, 100.0, 800.0, 600.0, &mut renderer);
            for p in system.particles() {
                assert!(
                    p.velocity().length() <= 2.0 + 1e-9,
                    "speed {} at frame {frame}",
                    p.velocity().length()
                );
                assert!((0.0..=800.0).contains(&p.position().x));
                assert!((0.0..=600.0).contains(&p.position().y));
            }
        }
    }

    #[test]
    fn colors_survive_stepping() {
        let params = SimParams {
            particle_count: 10,
            cell_size: 100.0,
            ..SimParams::default()
        };
        let mut rng = Xorshift64::new(3);
        let mut system = ParticleSystem::new(&params, 400.0, 400.0, &mut rng).unwrap();
        let colors: Vec<Rgba> = system.particles().iter().map(|p| p.color()).collect();

        let noise = ConstantNoise::new(0.7);
        let grid = generate(400.0, 400.0, 100.0, 1.0, 0.0, &noise);
        let mut renderer = Recording::default();
        for _ in 0..50 {
            system.step(&grid, 100.0, 400.0, 400.0, &mut renderer);
        }
        for (p, original) in system.particles().iter().zip(&colors) {
            assert_eq!(p.color(), *original);
        }
    }
}
