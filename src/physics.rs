/*
 * Physics Module
 *
 * One simulation step for the constellation. For every particle, in order:
 * 1. Force point: pull towards the cursor when it is close enough
 * 2. Decay and integrate: fade the acceleration, then advance velocity and position
 * 3. Collide: clamp into the canvas box and reflect the offending velocity component
 *
 * The dynamics are stylized rather than physical: there is no time step, no
 * sub-stepping and no speed cap. A particle may overshoot the box by up to one
 * velocity unit before the clamp pulls it back in the same tick.
 */

use nannou::prelude::*;

use crate::field::ParticleField;
use crate::input::{CanvasBounds, CursorState};
use crate::params::ConstellationParams;
use crate::particle::Particle;

/// The cursor only affects particles closer than this.
pub const FORCE_RADIUS: f32 = 100.0;

/// Scale from cursor distance to acceleration.
pub const FORCE_STRENGTH: f32 = 0.5;

/// Factor applied to acceleration every step.
pub const ACCELERATION_DECAY: f32 = 0.1;

// Advance every particle in the field by one tick
pub fn step(
    field: &mut ParticleField,
    params: &ConstellationParams,
    cursor: &CursorState,
    bounds: &CanvasBounds,
) {
    for particle in field.particles_mut() {
        if params.force_point_enabled {
            apply_force_point(particle, cursor);
        }
        integrate(particle, params);
        collide(particle, params.point_size, params.bounce, bounds);
    }
}

/// Set the particle's acceleration from its offset to the cursor.
///
/// Both deltas are taken against the cursor's *x* coordinate. This is the
/// long-standing look of the effect (particles are drawn towards the diagonal
/// through the cursor column), so it is kept as is. Outside `FORCE_RADIUS` the
/// previous, decaying acceleration is left untouched.
pub fn apply_force_point(particle: &mut Particle, cursor: &CursorState) {
    let dx = cursor.position.x - particle.position.x;
    let dy = cursor.position.x - particle.position.y;
    let distance = dx.hypot(dy);
    let angle = dy.atan2(dx);

    if distance < FORCE_RADIUS {
        particle.acceleration = vec2(
            FORCE_STRENGTH * distance * angle.cos(),
            FORCE_STRENGTH * distance * angle.sin(),
        );
    }
}

// Decay the acceleration, then integrate velocity and position (x first, then y)
pub fn integrate(particle: &mut Particle, params: &ConstellationParams) {
    let gain = params.velocity_ratio * params.velocity_decay;

    particle.acceleration.x *= ACCELERATION_DECAY;
    particle.velocity.x += particle.acceleration.x * gain;
    particle.position.x += particle.velocity.x;

    particle.acceleration.y *= ACCELERATION_DECAY;
    particle.velocity.y += (particle.acceleration.y + params.gravity) * gain;
    particle.position.y += particle.velocity.y;
}

/// Clamp into `[point_size, bound - point_size]` on both axes, reflecting and
/// scaling the velocity component by `bounce` on contact.
pub fn collide(particle: &mut Particle, point_size: f32, bounce: f32, bounds: &CanvasBounds) {
    let (x, vx) = collide_axis(particle.position.x, particle.velocity.x, point_size, bounds.width, bounce);
    let (y, vy) = collide_axis(particle.position.y, particle.velocity.y, point_size, bounds.height, bounce);
    particle.position = vec2(x, y);
    particle.velocity = vec2(vx, vy);
}

#[inline]
fn collide_axis(mut pos: f32, mut vel: f32, point_size: f32, extent: f32, bounce: f32) -> (f32, f32) {
    if pos > extent - point_size {
        pos = extent - point_size;
        vel = -vel * bounce;
    }
    if pos < point_size {
        pos = point_size;
        vel = -vel * bounce;
    }
    (pos, vel)
}
