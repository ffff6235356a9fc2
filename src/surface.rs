/*
 * Drawing Surface Module
 *
 * The immediate-mode 2D drawing contract the renderer draws through, modeled on
 * a canvas style path API. Coordinates are canvas space: origin top-left, y down,
 * in logical pixels.
 *
 * Besides the trait this module provides the stroke styles and linear gradients
 * handed to `stroke`, and a RecordingSurface that keeps every call for
 * inspection in tests and benchmarks.
 */

use nannou::prelude::*;

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

/// A gradient along the axis from `start` to `end` with ordered color stops.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end, stops: Vec::with_capacity(3) }
    }

    /// Add a stop. Stops stay sorted by offset; equal offsets keep insertion order.
    pub fn add_color_stop(&mut self, offset: f32, color: Color) {
        let offset = offset.clamp(0.0, 1.0);
        let index = self.stops.partition_point(|stop| stop.offset <= offset);
        self.stops.insert(index, GradientStop { offset, color });
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Where `point` projects onto the gradient axis, 0 at `start` and 1 at `end`.
    pub fn offset_of(&self, point: Vec2) -> f32 {
        let axis = self.end - self.start;
        let length_squared = axis.length_squared();
        if length_squared == 0.0 {
            return 0.0;
        }
        (point - self.start).dot(axis) / length_squared
    }

    /// Color at `offset`, interpolated between neighboring stops and clamped past the ends.
    pub fn color_at(&self, offset: f32) -> Option<Color> {
        let first = self.stops.first()?;
        let last = self.stops.last()?;
        if offset <= first.offset {
            return Some(first.color);
        }
        if offset >= last.offset {
            return Some(last.color);
        }

        self.stops.windows(2).find_map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            if offset >= a.offset && offset <= b.offset {
                let span = b.offset - a.offset;
                let t = if span > 0.0 { (offset - a.offset) / span } else { 0.0 };
                Some(a.color.lerp(b.color, t))
            } else {
                None
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StrokeStyle {
    Solid(Color),
    Gradient(LinearGradient),
}

/// A 2D immediate-mode drawing surface.
///
/// Paths are built with `begin_path`, `move_to`, `line_to` and `arc`, and are
/// painted with `stroke` or `fill`. Painting does not reset the path.
pub trait DrawingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    /// Circular arc around `(x, y)`, angles in radians.
    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32);
    fn close_path(&mut self);

    fn stroke(&mut self, style: &StrokeStyle, width: f32, cap: LineCap);
    fn fill(&mut self, color: Color);
}

/// One recorded call on a RecordingSurface.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f32, y: f32, width: f32, height: f32 },
    FillRect { x: f32, y: f32, width: f32, height: f32, color: Color },
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    Arc { center: Vec2, radius: f32, start_angle: f32, end_angle: f32 },
    ClosePath,
    Stroke { style: StrokeStyle, width: f32, cap: LineCap },
    Fill(Color),
}

/// A surface that paints nothing and remembers every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn strokes(&self) -> impl Iterator<Item = &StrokeStyle> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Stroke { style, .. } => Some(style),
            _ => None,
        })
    }

    pub fn fills(&self) -> impl Iterator<Item = Color> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Fill(color) => Some(*color),
            _ => None,
        })
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height, color });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::MoveTo(vec2(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::LineTo(vec2(x, y)));
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        self.commands.push(DrawCommand::Arc {
            center: vec2(x, y),
            radius,
            start_angle,
            end_angle,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self, style: &StrokeStyle, width: f32, cap: LineCap) {
        self.commands.push(DrawCommand::Stroke { style: style.clone(), width, cap });
    }

    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_stop() -> LinearGradient {
        let mut gradient = LinearGradient::new(vec2(0.0, 0.0), vec2(10.0, 0.0));
        gradient.add_color_stop(1.0, Color::new(0, 0, 255));
        gradient.add_color_stop(0.0, Color::new(255, 0, 0));
        gradient.add_color_stop(0.5, Color::new(0, 255, 0));
        gradient
    }

    #[test]
    fn stops_are_kept_in_offset_order() {
        let offsets: Vec<f32> = three_stop().stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn offset_projects_onto_the_axis() {
        let gradient = three_stop();
        assert_eq!(gradient.offset_of(vec2(5.0, 3.0)), 0.5);
        assert_eq!(gradient.offset_of(vec2(-10.0, 0.0)), -1.0);

        let degenerate = LinearGradient::new(vec2(1.0, 1.0), vec2(1.0, 1.0));
        assert_eq!(degenerate.offset_of(vec2(4.0, 4.0)), 0.0);
    }

    #[test]
    fn color_at_interpolates_and_clamps() {
        let gradient = three_stop();
        assert_eq!(gradient.color_at(-1.0), Some(Color::new(255, 0, 0)));
        assert_eq!(gradient.color_at(0.5), Some(Color::new(0, 255, 0)));
        assert_eq!(gradient.color_at(0.75), Some(Color::new(0, 128, 128)));
        assert_eq!(gradient.color_at(2.0), Some(Color::new(0, 0, 255)));
        assert_eq!(LinearGradient::new(Vec2::ZERO, Vec2::X).color_at(0.5), None);
    }

    #[test]
    fn recording_surface_keeps_calls_in_order() {
        let mut surface = RecordingSurface::new();
        surface.begin_path();
        surface.move_to(1.0, 2.0);
        surface.line_to(3.0, 4.0);
        surface.stroke(&StrokeStyle::Solid(Color::new(1, 2, 3)), 0.5, LineCap::Round);
        surface.close_path();

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(vec2(1.0, 2.0)),
                DrawCommand::LineTo(vec2(3.0, 4.0)),
                DrawCommand::Stroke {
                    style: StrokeStyle::Solid(Color::new(1, 2, 3)),
                    width: 0.5,
                    cap: LineCap::Round
                },
                DrawCommand::ClosePath,
            ]
        );
        assert_eq!(surface.strokes().count(), 1);
        assert_eq!(surface.fills().count(), 0);
    }
}
