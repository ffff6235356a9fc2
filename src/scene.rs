/*
 * Scene Module
 *
 * The scene bundles everything one frame needs: the particle field, the
 * configuration, the cursor and the canvas bounds. A host drives it by calling
 * `tick` (or `advance` then `render`) once per frame at whatever cadence it
 * likes; the scene itself owns no timing.
 */

use crate::field::ParticleField;
use crate::input::{CanvasBounds, CursorState};
use crate::params::ConstellationParams;
use crate::physics;
use crate::renderer::{self, RenderStats};
use crate::surface::DrawingSurface;

#[derive(Debug, Clone)]
pub struct Scene {
    pub field: ParticleField,
    pub params: ConstellationParams,
    pub cursor: CursorState,
    pub bounds: CanvasBounds,
}

impl Scene {
    /// A scene with a field already seeded from `params.points_count`.
    pub fn new(params: ConstellationParams, bounds: CanvasBounds) -> Self {
        let mut scene = Self {
            field: ParticleField::new(),
            params,
            cursor: CursorState::default(),
            bounds,
        };
        scene.reinitialize();
        scene
    }

    /// Re-seed the field from the desired count and the current bounds.
    ///
    /// Takes `&mut self`, so it can never overlap a step or a render pass.
    pub fn reinitialize(&mut self) {
        self.field.initialize(&self.bounds, self.params.points_count);
    }

    /// One simulation step, regardless of the pause flag.
    pub fn step(&mut self) {
        physics::step(&mut self.field, &self.params, &self.cursor, &self.bounds);
    }

    /// One simulation step unless the simulation is paused.
    pub fn advance(&mut self) {
        if !self.params.pause_simulation {
            self.step();
        }
    }

    pub fn render<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> RenderStats {
        renderer::render(surface, &self.field, &self.params, &self.bounds)
    }

    /// Advance then render: one frame.
    pub fn tick<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> RenderStats {
        self.advance();
        self.render(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn bounds() -> CanvasBounds {
        CanvasBounds::new(400.0, 300.0)
    }

    #[test]
    fn new_scene_seeds_the_desired_count() {
        let scene = Scene::new(ConstellationParams::default(), bounds());
        assert_eq!(scene.field.len(), 110);
    }

    #[test]
    fn count_edits_wait_for_reinitialize() {
        let mut scene = Scene::new(ConstellationParams::default(), bounds());
        scene.params.points_count = 12;

        let mut surface = RecordingSurface::new();
        scene.tick(&mut surface);
        assert_eq!(scene.field.len(), 110);

        scene.reinitialize();
        assert_eq!(scene.field.len(), 12);
    }

    #[test]
    fn zero_points_tick_cleanly() {
        let params = ConstellationParams { points_count: 0, ..Default::default() };
        let mut scene = Scene::new(params, bounds());
        let mut surface = RecordingSurface::new();

        let stats = scene.tick(&mut surface);

        assert!(scene.field.is_empty());
        assert_eq!(stats, RenderStats::default());
    }

    #[test]
    fn zero_bounds_tick_cleanly() {
        let mut scene = Scene::new(ConstellationParams::default(), CanvasBounds::new(0.0, 0.0));
        let mut surface = RecordingSurface::new();
        for _ in 0..10 {
            scene.tick(&mut surface);
        }
        assert_eq!(scene.field.len(), 110);
    }

    #[test]
    fn pause_freezes_the_field_but_still_renders() {
        let params = ConstellationParams { pause_simulation: true, ..Default::default() };
        let mut scene = Scene::new(params, bounds());
        let before = scene.field.particles().to_vec();
        let mut surface = RecordingSurface::new();

        let stats = scene.tick(&mut surface);

        assert_eq!(scene.field.particles(), &before[..]);
        assert_eq!(stats.points_drawn, 110);
    }

    #[test]
    fn resize_keeps_the_field_and_clamps_on_next_step() {
        let mut scene = Scene::new(ConstellationParams::default(), bounds());
        scene.bounds.set(50.0, 40.0);
        scene.step();

        assert_eq!(scene.field.len(), 110);
        let size = scene.params.point_size;
        for p in scene.field.particles() {
            assert!(p.position.x >= size && p.position.x <= 50.0 - size);
            assert!(p.position.y >= size && p.position.y <= 40.0 - size);
        }
    }
}
