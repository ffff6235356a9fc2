/*
 * Input Module
 *
 * This module holds the small state records fed to every frame, the canvas
 * bounds and the last cursor position, and the nannou event handlers that keep
 * them current.
 *
 * The core works in canvas space: origin in the top-left corner, y pointing
 * down, `[0, width] x [0, height]`. nannou reports window space: origin in the
 * center, y pointing up. The handlers convert on the way in and the renderer's
 * surface adapter converts on the way out.
 */

use nannou::prelude::*;

use crate::app::Model;

/// Logical size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    pub width: f32,
    pub height: f32,
}

impl CanvasBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn set(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    // Window space (centered, y up) to canvas space (top-left, y down)
    pub fn to_canvas(&self, window_point: Vec2) -> Vec2 {
        vec2(
            window_point.x + self.width / 2.0,
            self.height / 2.0 - window_point.y,
        )
    }

    // Canvas space back to window space
    pub fn to_window(&self, canvas_point: Vec2) -> Vec2 {
        vec2(
            canvas_point.x - self.width / 2.0,
            self.height / 2.0 - canvas_point.y,
        )
    }
}

/// Last observed pointer position in canvas space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorState {
    pub position: Vec2,
}

impl CursorState {
    pub fn new(x: f32, y: f32) -> Self {
        Self { position: vec2(x, y) }
    }

    pub fn set(&mut self, position: Vec2) {
        self.position = position;
    }
}

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let canvas_pos = model.scene.bounds.to_canvas(pos);
    model.scene.cursor.set(canvas_pos);
}

// Window resized event handler. Bounds follow the window; the field is not re-seeded.
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    log::debug!("Canvas resized to {:.0}x{:.0}", size.x, size.y);
    model.scene.bounds.set(size.x, size.y);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_center_maps_to_canvas_center() {
        let bounds = CanvasBounds::new(800.0, 600.0);
        assert_eq!(bounds.to_canvas(vec2(0.0, 0.0)), vec2(400.0, 300.0));
    }

    #[test]
    fn window_top_left_maps_to_canvas_origin() {
        let bounds = CanvasBounds::new(800.0, 600.0);
        assert_eq!(bounds.to_canvas(vec2(-400.0, 300.0)), vec2(0.0, 0.0));
        assert_eq!(bounds.to_window(vec2(0.0, 0.0)), vec2(-400.0, 300.0));
    }

    #[test]
    fn conversions_are_inverse() {
        let bounds = CanvasBounds::new(321.0, 123.0);
        let p = vec2(17.5, 99.25);
        assert_eq!(bounds.to_canvas(bounds.to_window(p)), p);
    }

    #[test]
    fn cursor_defaults_to_origin() {
        assert_eq!(CursorState::default().position, Vec2::ZERO);
        let mut cursor = CursorState::default();
        cursor.set(vec2(3.0, 4.0));
        assert_eq!(cursor, CursorState::new(3.0, 4.0));
    }
}
