/*
 * Particle Field Module
 *
 * The field owns every particle. Its only structural operation is a wholesale
 * re-initialization; particles are never added or removed one by one.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::input::CanvasBounds;
use crate::particle::Particle;

/// Distance kept from the canvas edges when seeding positions.
pub const SPAWN_INSET: f32 = 5.0;

/// Seeded velocities fall in `[-MAX_SPAWN_SPEED, MAX_SPAWN_SPEED]` per axis.
pub const MAX_SPAWN_SPEED: f32 = 1.0;

#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Discard every particle and seed `count` fresh ones inside `bounds`.
    pub fn initialize(&mut self, bounds: &CanvasBounds, count: usize) {
        self.initialize_with_rng(&mut rand::thread_rng(), bounds, count);
    }

    pub fn initialize_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: &CanvasBounds,
        count: usize,
    ) {
        self.particles.clear();
        self.particles.reserve(count);

        for _ in 0..count {
            let x = random_in_range(rng, SPAWN_INSET, bounds.width - SPAWN_INSET);
            let y = random_in_range(rng, SPAWN_INSET, bounds.height - SPAWN_INSET);
            let vx = random_in_range(rng, -MAX_SPAWN_SPEED, MAX_SPAWN_SPEED);
            let vy = random_in_range(rng, -MAX_SPAWN_SPEED, MAX_SPAWN_SPEED);
            self.particles.push(Particle::new(vec2(x, y), vec2(vx, vy)));
        }

        log::info!(
            "Field initialized with {} particles in {:.0}x{:.0}",
            count,
            bounds.width,
            bounds.height
        );
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Uniform sample in `[min, max)`. Returns `min` for empty or NaN ranges.
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if !(max > min) {
        return min;
    }
    rng.gen_range(min..max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_seeded_invariants(field: &ParticleField, bounds: &CanvasBounds) {
        for p in field.particles() {
            assert!(p.position.x >= SPAWN_INSET && p.position.x <= bounds.width - SPAWN_INSET);
            assert!(p.position.y >= SPAWN_INSET && p.position.y <= bounds.height - SPAWN_INSET);
            assert!(p.velocity.x >= -1.0 && p.velocity.x <= 1.0);
            assert!(p.velocity.y >= -1.0 && p.velocity.y <= 1.0);
            assert_eq!(p.acceleration, Vec2::ZERO);
        }
    }

    #[test]
    fn initialize_seeds_exact_count_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = CanvasBounds::new(640.0, 480.0);
        let mut field = ParticleField::new();
        field.initialize_with_rng(&mut rng, &bounds, 110);

        assert_eq!(field.len(), 110);
        assert_seeded_invariants(&field, &bounds);
    }

    #[test]
    fn reinitialize_replaces_everything() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = CanvasBounds::new(300.0, 200.0);
        let mut field = ParticleField::new();

        field.initialize_with_rng(&mut rng, &bounds, 50);
        let first = field.particles().to_vec();
        field.initialize_with_rng(&mut rng, &bounds, 50);

        assert_eq!(field.len(), 50);
        assert_ne!(field.particles(), &first[..]);
        assert_seeded_invariants(&field, &bounds);

        field.initialize_with_rng(&mut rng, &bounds, 3);
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn zero_count_yields_empty_field() {
        let mut field = ParticleField::from_particles(vec![Particle::at(1.0, 1.0, 0.0, 0.0)]);
        field.initialize(&CanvasBounds::new(100.0, 100.0), 0);
        assert!(field.is_empty());
    }

    #[test]
    fn tiny_and_zero_bounds_pin_positions_to_the_inset() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ParticleField::new();

        field.initialize_with_rng(&mut rng, &CanvasBounds::new(0.0, 0.0), 10);
        assert_eq!(field.len(), 10);
        for p in field.particles() {
            assert_eq!(p.position, vec2(SPAWN_INSET, SPAWN_INSET));
        }

        field.initialize_with_rng(&mut rng, &CanvasBounds::new(8.0, 100.0), 10);
        for p in field.particles() {
            assert_eq!(p.position.x, SPAWN_INSET);
        }
    }

    #[test]
    fn random_in_range_tolerates_degenerate_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_in_range(&mut rng, 5.0, 5.0), 5.0);
        assert_eq!(random_in_range(&mut rng, 5.0, -5.0), 5.0);
        assert_eq!(random_in_range(&mut rng, 5.0, f32::NAN), 5.0);

        for _ in 0..100 {
            let v = random_in_range(&mut rng, -1.0, 1.0);
            assert!((-1.0..1.0).contains(&v));
        }
    }

    #[test]
    fn seeded_particles_carry_constant_mass() {
        let mut field = ParticleField::new();
        field.initialize(&CanvasBounds::new(100.0, 100.0), 4);
        assert!(field.particles().iter().all(|p| p.mass == crate::particle::PARTICLE_MASS));
    }
}
