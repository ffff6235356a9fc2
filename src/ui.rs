/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. The parameter panel is a thin adapter over the option
 * table: it builds one widget per option and writes edits back through the
 * table's setters. Parameter change detection is handled by ConstellationParams.
 */

use nannou_egui::{egui, Egui};

use crate::color::Color;
use crate::debug::DebugInfo;
use crate::options::{self, Access, Folder, OptionSpec};
use crate::params::ConstellationParams;
use crate::scene::Scene;

/// What the panel asked the driver to do this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOutcome {
    /// The user committed a particle count edit or pressed reset.
    pub reinitialize: bool,
    /// Any option changed value.
    pub changed: bool,
}

// Update the UI and report whether the field should be re-initialized
pub fn update_ui(
    egui: &mut Egui,
    params: &mut ConstellationParams,
    debug_info: &DebugInfo,
    live_count: usize,
) -> UiOutcome {
    let mut reinitialize = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Constellation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            for folder in Folder::ALL {
                egui::CollapsingHeader::new(folder.title())
                    .default_open(folder == Folder::General)
                    .show(ui, |ui| {
                        for spec in options::in_folder(folder) {
                            reinitialize |= option_widget(ui, spec, params);
                        }

                        if folder == Folder::General && ui.button("Reset Particles").clicked() {
                            reinitialize = true;
                        }
                    });
            }

            ui.collapsing("Debug", |ui| {
                ui.checkbox(&mut params.show_debug, "Show Debug Info");
                ui.checkbox(&mut params.pause_simulation, "Pause Simulation");

                ui.separator();

                let stats = debug_info.last_render();
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Particles: {} (desired {})", live_count, params.points_count));
                ui.label(format!("Lines: {}", stats.lines_drawn));
            });
        });

    let changes = params.detect_changes();
    if changes.points_count_changed && !reinitialize {
        log::debug!("Particle count set to {}, waiting for commit", params.points_count);
    }

    UiOutcome {
        reinitialize,
        changed: changes.any_changed,
    }
}

// One widget for one option. Returns true when a commit-only option was committed.
fn option_widget(ui: &mut egui::Ui, spec: &OptionSpec, params: &mut ConstellationParams) -> bool {
    match spec.access {
        Access::Number { min, max, step, get, set } => {
            let mut value = get(params);
            let mut slider = egui::Slider::new(&mut value, min..=max).text(spec.label);
            if let Some(step) = step {
                slider = slider.step_by(step);
            }

            let response = ui.add(slider);
            if response.changed() {
                set(params, value);
            }

            // Sliders commit on release; clicks and typed values commit at once
            spec.requires_commit
                && (response.drag_released() || (response.changed() && !response.dragged()))
        }
        Access::Bool { get, set } => {
            let mut value = get(params);
            if ui.checkbox(&mut value, spec.label).changed() {
                set(params, value);
            }
            false
        }
        Access::Color { get, set } => {
            let mut rgb = get(params).to_array();
            ui.horizontal(|ui| {
                if ui.color_edit_button_srgb(&mut rgb).changed() {
                    set(params, Color::from_array(rgb));
                }
                ui.label(spec.label);
            });
            false
        }
    }
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    scene: &Scene,
) {
    // Create a background panel in the top-right corner, clear of the controls
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 5.0 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    let stats = debug_info.last_render();
    let cursor = scene.cursor.position;
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Particles: {} / {}", scene.field.len(), scene.params.points_count),
        format!("Lines: {}", stats.lines_drawn),
        format!("Cursor: ({:.0}, {:.0})", cursor.x, cursor.y),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
