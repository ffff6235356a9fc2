/*
 * Particle Module
 *
 * This module defines the Particle struct, the state record for one point of the
 * constellation. Particles are plain data: the simulation step and the renderer
 * operate on them from the outside.
 */

use nannou::prelude::*;

/// Mass given to every particle. Carried along but not used by any formula yet.
pub const PARTICLE_MASS: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// External forcing; decays towards zero every step.
    pub acceleration: Vec2,
    pub mass: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            mass: PARTICLE_MASS,
        }
    }

    // Build a particle from plain coordinates
    pub fn at(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self::new(vec2(x, y), vec2(vx, vy))
    }

    pub fn with_acceleration(mut self, ax: f32, ay: f32) -> Self {
        self.acceleration = vec2(ax, ay);
        self
    }
}
