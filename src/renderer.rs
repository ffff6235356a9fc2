/*
 * Renderer Module
 *
 * This module draws the constellation onto any DrawingSurface and provides the
 * nannou side of rendering: a surface adapter over nannou's Draw and the window
 * view function.
 *
 * Drawing order is fixed: background, then every connective line, then every
 * point, so points always sit on top of lines. The line pass tests every
 * unordered pair once, O(n²), which is fine for the tens to low hundreds of
 * particles this effect is tuned for.
 */

use std::f32::consts::TAU;

use nannou::prelude::*;

use crate::app::Model;
use crate::color::Color;
use crate::field::ParticleField;
use crate::input::CanvasBounds;
use crate::params::ConstellationParams;
use crate::particle::Particle;
use crate::surface::{DrawingSurface, LineCap, LinearGradient, StrokeStyle};
use crate::ui;

/// Counts from one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub lines_drawn: usize,
    pub points_drawn: usize,
}

/// Box test on each axis, not a Euclidean radius.
#[inline]
pub fn connects(a: &Particle, b: &Particle, line_distance: f32) -> bool {
    (a.position.x - b.position.x).abs() <= line_distance
        && (a.position.y - b.position.y).abs() <= line_distance
}

/// Index pairs `(i, j)` with `i < j` whose particles should be joined by a line.
pub fn connected_pairs(particles: &[Particle], line_distance: f32) -> impl Iterator<Item = (usize, usize)> + '_ {
    particles.iter().enumerate().flat_map(move |(i, a)| {
        particles[i + 1..]
            .iter()
            .enumerate()
            .filter(move |(_, b)| connects(a, b, line_distance))
            .map(move |(offset, _)| (i, i + 1 + offset))
    })
}

pub fn line_style(a: &Particle, b: &Particle, params: &ConstellationParams) -> StrokeStyle {
    if params.lines_gradient_enabled {
        let mut gradient = LinearGradient::new(a.position, b.position);
        for (offset, color) in params.gradient_stops() {
            gradient.add_color_stop(offset, color);
        }
        StrokeStyle::Gradient(gradient)
    } else {
        StrokeStyle::Solid(params.lines_color)
    }
}

// Draw one frame of the field onto the surface
pub fn render<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    field: &ParticleField,
    params: &ConstellationParams,
    bounds: &CanvasBounds,
) -> RenderStats {
    let mut stats = RenderStats::default();

    surface.clear_rect(0.0, 0.0, bounds.width, bounds.height);
    if !params.transparent_background {
        surface.fill_rect(0.0, 0.0, bounds.width, bounds.height, params.background_color);
    }

    let particles = field.particles();

    for (i, j) in connected_pairs(particles, params.line_distance) {
        let (a, b) = (&particles[i], &particles[j]);
        let style = line_style(a, b, params);

        surface.begin_path();
        surface.move_to(a.position.x, a.position.y);
        surface.line_to(b.position.x, b.position.y);
        surface.stroke(&style, params.line_width, LineCap::Round);
        surface.close_path();
        stats.lines_drawn += 1;
    }

    for particle in particles {
        surface.begin_path();
        surface.arc(particle.position.x, particle.position.y, params.point_size, 0.0, TAU);
        surface.fill(params.point_color);
        surface.close_path();
        stats.points_drawn += 1;
    }

    stats
}

// Convert a crate color into a nannou color
fn to_rgb(color: Color) -> Rgb<u8> {
    rgb(color.r, color.g, color.b)
}

#[derive(Debug, Clone, Copy)]
enum PathSegment {
    Move(Vec2),
    Line(Vec2),
    Arc { center: Vec2, radius: f32, start: f32, end: f32 },
}

/// DrawingSurface over a nannou Draw. Paths are collected in canvas space and
/// mapped into window space when painted.
pub struct NannouSurface<'a> {
    draw: &'a Draw,
    bounds: CanvasBounds,
    path: Vec<PathSegment>,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, bounds: CanvasBounds) -> Self {
        Self { draw, bounds, path: Vec::new() }
    }

    fn window_point(&self, x: f32, y: f32) -> Point2 {
        self.bounds.to_window(vec2(x, y))
    }

    // Straight segments of the current path in canvas space
    fn segments(&self) -> Vec<(Vec2, Vec2)> {
        let mut segments = Vec::new();
        let mut cursor: Option<Vec2> = None;
        for segment in &self.path {
            match *segment {
                PathSegment::Move(p) => cursor = Some(p),
                PathSegment::Line(p) => {
                    if let Some(from) = cursor {
                        segments.push((from, p));
                    }
                    cursor = Some(p);
                }
                PathSegment::Arc { .. } => {}
            }
        }
        segments
    }

    // Split a segment at every stop it crosses so the polyline carries the gradient
    fn gradient_vertices(&self, gradient: &LinearGradient, from: Vec2, to: Vec2) -> Vec<(Point2, Rgb<u8>)> {
        let t_from = gradient.offset_of(from);
        let t_to = gradient.offset_of(to);

        let mut params = vec![0.0_f32, 1.0];
        if t_from != t_to {
            for stop in gradient.stops() {
                let s = (stop.offset - t_from) / (t_to - t_from);
                if s > 0.0 && s < 1.0 {
                    params.push(s);
                }
            }
        }
        params.sort_by(|a, b| a.total_cmp(b));

        params
            .into_iter()
            .filter_map(|s| {
                let point = from + (to - from) * s;
                let color = gradient.color_at(gradient.offset_of(point))?;
                Some((self.window_point(point.x, point.y), to_rgb(color)))
            })
            .collect()
    }
}

impl<'a> DrawingSurface for NannouSurface<'a> {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let covers_canvas = x <= 0.0
            && y <= 0.0
            && x + width >= self.bounds.width
            && y + height >= self.bounds.height;
        if covers_canvas {
            self.draw.background().color(BLACK);
        } else {
            let center = self.window_point(x + width / 2.0, y + height / 2.0);
            self.draw.rect().xy(center).w_h(width, height).color(BLACK);
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let center = self.window_point(x + width / 2.0, y + height / 2.0);
        self.draw.rect().xy(center).w_h(width, height).color(to_rgb(color));
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path.push(PathSegment::Move(vec2(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.push(PathSegment::Line(vec2(x, y)));
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        self.path.push(PathSegment::Arc {
            center: vec2(x, y),
            radius,
            start: start_angle,
            end: end_angle,
        });
    }

    fn close_path(&mut self) {
        // Paths are only ever painted open segment by segment, nothing to close.
    }

    fn stroke(&mut self, style: &StrokeStyle, width: f32, cap: LineCap) {
        for (from, to) in self.segments() {
            let drawing = self.draw.polyline().weight(width);
            let drawing = match cap {
                LineCap::Butt => drawing.caps_butt(),
                LineCap::Round => drawing.caps_round(),
                LineCap::Square => drawing.caps_square(),
            };

            match style {
                StrokeStyle::Solid(color) => {
                    let points = [self.window_point(from.x, from.y), self.window_point(to.x, to.y)];
                    drawing.points(points).color(to_rgb(*color));
                }
                StrokeStyle::Gradient(gradient) => {
                    drawing.points_colored(self.gradient_vertices(gradient, from, to));
                }
            }
        }
    }

    fn fill(&mut self, color: Color) {
        for segment in &self.path {
            if let PathSegment::Arc { center, radius, start, end } = *segment {
                let window_center = self.window_point(center.x, center.y);
                if (end - start).abs() >= TAU {
                    self.draw
                        .ellipse()
                        .xy(window_center)
                        .radius(radius)
                        .color(to_rgb(color));
                } else {
                    // Canvas angles run clockwise on screen because y points down
                    let steps = 32;
                    let points = (0..=steps).map(|k| {
                        let angle = start + (end - start) * k as f32 / steps as f32;
                        let p = center + vec2(angle.cos(), angle.sin()) * radius;
                        self.window_point(p.x, p.y)
                    });
                    self.draw.polygon().color(to_rgb(color)).points(points);
                }
            }
        }
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    let stats = {
        let mut surface = NannouSurface::new(&draw, model.scene.bounds);
        model.scene.render(&mut surface)
    };
    model.debug_info.record_render(stats);

    if model.scene.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, app.window_rect(), &model.scene);
    }

    // Finish drawing
    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("Unable to draw the frame: {:?}", err);
    }

    // Draw the egui UI
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("Unable to draw the parameter panel: {:?}", err);
    }
}
