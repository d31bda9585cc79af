use rand::Rng;

use super::host::DrawSurface;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub dx: f64,
    pub dy: f64,
    pub alpha: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> Self {
        Self {
            x: rng.gen::<f64>() * bounds.width,
            y: rng.gen::<f64>() * bounds.height,
            radius: rng.gen::<f64>() * 2.0 + 0.5,
            dx: (rng.gen::<f64>() - 0.5) * 0.3,
            dy: (rng.gen::<f64>() - 0.5) * 0.3,
            alpha: rng.gen::<f64>() * 0.5 + 0.1,
        }
    }

    /// Moves by one frame of velocity, then reflects each axis that ended
    /// up outside `[0, dimension]` while still heading outward.
    pub fn advance(&mut self, bounds: Bounds) {
        self.x += self.dx;
        self.y += self.dy;
        self.dx = reflect(self.x, self.dx, bounds.width);
        self.dy = reflect(self.y, self.dy, bounds.height);
    }

    pub fn fill(&self) -> String {
        let (r, g, b) = config::PARTICLE_RGB;
        format!("rgba({}, {}, {}, {})", r, g, b, self.alpha)
    }
}

// A particle stranded outside by a shrinking viewport keeps its inward
// velocity instead of flipping every frame.
fn reflect(position: f64, velocity: f64, limit: f64) -> f64 {
    if (position < 0.0 && velocity < 0.0) || (position > limit && velocity > 0.0) {
        -velocity
    } else {
        velocity
    }
}

/// Fixed-size set of drifting particles over a resizable surface.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Bounds,
}

impl ParticleField {
    pub fn spawn<R: Rng + ?Sized>(count: usize, bounds: Bounds, rng: &mut R) -> Self {
        let particles = (0..count).map(|_| Particle::random(rng, bounds)).collect();
        Self { particles, bounds }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[cfg(test)]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Positions are left alone; anything now outside drifts back in.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.bounds = Bounds::new(width, height);
    }

    pub fn step(&mut self) {
        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.advance(bounds);
        }
    }

    /// One display frame: clear, draw every particle where it is, then
    /// step the field for the next frame.
    pub fn render<S: DrawSurface + ?Sized>(&mut self, surface: &S) {
        surface.clear();
        for particle in self.particles() {
            surface.fill_circle(particle.x, particle.y, particle.radius, &particle.fill());
        }
        self.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::testing::{DrawOp, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(seed: u64, width: f64, height: f64) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleField::spawn(config::PARTICLE_COUNT, Bounds::new(width, height), &mut rng)
    }

    fn assert_near_bounds(field: &ParticleField) {
        let Bounds { width, height } = field.bounds();
        for p in field.particles() {
            // one frame of overshoot is the most a reflecting particle can show
            assert!(p.x >= -p.dx.abs() - 1e-9 && p.x <= width + p.dx.abs() + 1e-9, "{p:?}");
            assert!(p.y >= -p.dy.abs() - 1e-9 && p.y <= height + p.dy.abs() + 1e-9, "{p:?}");
        }
    }

    #[test]
    fn spawned_attributes_stay_in_range() {
        let field = field(7, 800.0, 600.0);
        assert_eq!(field.len(), 60);
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((0.5..2.5).contains(&p.radius));
            assert!((-0.15..0.15).contains(&p.dx));
            assert!((-0.15..0.15).contains(&p.dy));
            assert!((0.1..0.6).contains(&p.alpha));
        }
    }

    #[test]
    fn count_is_constant_over_many_frames() {
        let mut field = field(11, 320.0, 240.0);
        let surface = RecordingSurface::default();
        for _ in 0..2_000 {
            field.render(&surface);
            assert_eq!(field.len(), 60);
        }
    }

    #[test]
    fn particles_stay_inside_over_long_runs() {
        let mut field = field(3, 50.0, 40.0);
        for _ in 0..10_000 {
            field.step();
            assert_near_bounds(&field);
        }
    }

    #[test]
    fn crossing_the_right_edge_flips_dx_once_then_returns() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut p = Particle { x: 99.95, y: 50.0, radius: 1.0, dx: 0.1, dy: 0.0, alpha: 0.5 };

        p.advance(bounds);
        assert!(p.x > 100.0);
        assert_eq!(p.dx, -0.1);

        let outside = p.x;
        p.advance(bounds);
        assert_eq!(p.dx, -0.1);
        assert!(p.x < outside);
        assert!(p.x <= 100.0);
    }

    #[test]
    fn crossing_the_top_edge_flips_dy() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut p = Particle { x: 50.0, y: 0.05, radius: 1.0, dx: 0.0, dy: -0.1, alpha: 0.5 };
        p.advance(bounds);
        assert!(p.y < 0.0);
        assert_eq!(p.dy, 0.1);
        p.advance(bounds);
        assert!(p.y > 0.0);
    }

    #[test]
    fn axes_reflect_independently() {
        let bounds = Bounds::new(10.0, 10.0);
        let mut p = Particle { x: 9.95, y: 5.0, radius: 1.0, dx: 0.1, dy: 0.1, alpha: 0.5 };
        p.advance(bounds);
        assert_eq!(p.dx, -0.1);
        assert_eq!(p.dy, 0.1);
    }

    #[test]
    fn shrinking_strands_particles_which_then_drift_back() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut p = Particle { x: 150.0, y: 50.0, radius: 1.0, dx: 0.15, dy: 0.0, alpha: 0.5 };
        p.advance(bounds);
        assert!(p.dx < 0.0);
        let mut previous = p.x;
        for _ in 0..100 {
            p.advance(bounds);
            assert!(p.dx < 0.0, "velocity must not flip back while returning");
            assert!(p.x < previous);
            previous = p.x;
        }
    }

    #[test]
    fn resize_changes_the_reflection_bounds() {
        let mut field = field(5, 800.0, 600.0);
        field.resize(1200.0, 800.0);
        assert_eq!(field.bounds(), Bounds::new(1200.0, 800.0));

        // a particle just past the old width keeps moving under the new width
        let mut p = Particle { x: 800.05, y: 10.0, radius: 1.0, dx: 0.1, dy: 0.0, alpha: 0.5 };
        p.advance(field.bounds());
        assert_eq!(p.dx, 0.1);
    }

    #[test]
    fn render_clears_then_draws_every_particle() {
        let mut field = field(9, 200.0, 200.0);
        let before: Vec<_> = field.particles().to_vec();
        let surface = RecordingSurface::default();

        field.render(&surface);

        let ops = surface.ops();
        assert_eq!(ops.len(), 61);
        assert_eq!(ops[0], DrawOp::Clear);
        match &ops[1] {
            DrawOp::Circle { x, y, radius, fill } => {
                assert_eq!((*x, *y, *radius), (before[0].x, before[0].y, before[0].radius));
                assert!(fill.starts_with("rgba(108, 99, 255, "));
            }
            other => panic!("expected a circle, got {other:?}"),
        }
        // drawn at the old position, moved afterwards
        assert_eq!(field.particles()[0].x, before[0].x + before[0].dx);
    }

    #[test]
    fn zero_sized_surface_spawns_at_origin() {
        let field = field(1, 0.0, 0.0);
        assert!(field.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }
}
