//! Ambient particle field simulation.
//!
//! The decorative background layer keeps a fixed population of slow drifting
//! particles inside the document extent. The simulation is pure and fed by an
//! injected random source, so tests can step frames deterministically; the UI
//! layer owns the animation clock and the canvas drawing.

/// Fixed particle population.
pub const PARTICLE_COUNT: usize = 80;

/// One drifting particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub alpha: f64,
}

/// The full particle population confined to a rectangular extent.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Create a field of [`PARTICLE_COUNT`] particles placed by `rng`, which
    /// must yield values in `[0, 1)`.
    pub fn new(width: f64, height: f64, rng: &mut dyn FnMut() -> f64) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng() * width,
                y: rng() * height,
                radius: rng() * 1.6 + 0.4,
                vx: (rng() - 0.5) * 0.3,
                vy: (rng() - 0.5) * 0.3,
                alpha: rng() * 0.6 + 0.2,
            })
            .collect();

        Self {
            width,
            height,
            particles,
        }
    }

    /// Replace the extent and regenerate every particle inside it.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut dyn FnMut() -> f64) {
        *self = Self::new(width, height, rng);
    }

    /// Advance one frame: move each particle by its velocity, then invert the
    /// velocity component of any particle that crossed a boundary (elastic
    /// reflection, position not clamped).
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic low-discrepancy source in [0, 1).
    fn sequence_rng() -> impl FnMut() -> f64 {
        let mut state = 0.0_f64;
        move || {
            state = (state + 0.618_033_988_749_895) % 1.0;
            state
        }
    }

    #[test]
    fn test_population_and_placement() {
        let mut rng = sequence_rng();
        let field = ParticleField::new(640.0, 480.0, &mut rng);

        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..640.0).contains(&p.x));
            assert!((0.0..480.0).contains(&p.y));
            assert!((0.4..2.0).contains(&p.radius));
            assert!((-0.15..0.15).contains(&p.vx));
            assert!((-0.15..0.15).contains(&p.vy));
            assert!((0.2..0.8).contains(&p.alpha));
        }
    }

    #[test]
    fn test_step_advances_by_velocity() {
        let mut rng = sequence_rng();
        let mut field = ParticleField::new(640.0, 480.0, &mut rng);
        let before = field.particles()[0].clone();

        field.step();

        let after = &field.particles()[0];
        assert!((after.x - (before.x + before.vx)).abs() < 1e-12);
        assert!((after.y - (before.y + before.vy)).abs() < 1e-12);
    }

    #[test]
    fn test_boundary_crossing_flips_only_velocity_sign() {
        let mut field = ParticleField {
            width: 100.0,
            height: 100.0,
            particles: vec![Particle {
                x: 99.95,
                y: 50.0,
                vx: 0.1,
                vy: 0.05,
                radius: 1.0,
                alpha: 0.5,
            }],
        };

        field.step();

        let p = &field.particles()[0];
        assert!(p.x > 100.0, "position is not clamped");
        assert_eq!(p.vx, -0.1, "crossed component is sign-flipped");
        assert_eq!(p.vy, 0.05, "other component untouched");
        assert_eq!(p.radius, 1.0);
        assert_eq!(p.alpha, 0.5);
    }

    #[test]
    fn test_reflected_particle_comes_back_inside() {
        let mut field = ParticleField {
            width: 100.0,
            height: 100.0,
            particles: vec![Particle {
                x: 0.01,
                y: 0.01,
                vx: -0.1,
                vy: -0.1,
                radius: 1.0,
                alpha: 0.5,
            }],
        };

        field.step();
        assert!(field.particles()[0].x < 0.0);

        field.step();
        let p = &field.particles()[0];
        assert!(p.x > -0.1 && p.vx > 0.0);
        assert!(p.y > -0.1 && p.vy > 0.0);
    }

    #[test]
    fn test_resize_regenerates_inside_new_extent() {
        let mut rng = sequence_rng();
        let mut field = ParticleField::new(640.0, 480.0, &mut rng);

        field.resize(100.0, 50.0, &mut rng);

        assert_eq!(field.width(), 100.0);
        assert_eq!(field.height(), 50.0);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..50.0).contains(&p.y));
        }
    }
}
