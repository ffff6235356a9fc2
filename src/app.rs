/*
 * Application Module
 *
 * This module defines the main application model and the per-frame driver for
 * the constellation. nannou calls `update` then `view` once per frame; `update`
 * handles the panel, applies committed re-initializations and advances the
 * simulation, and `view` (in the renderer module) draws the result.
 *
 * Re-initialization only ever happens inside `update`, which holds the model
 * exclusively, so a step or a draw never sees a half-replaced field.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::input::{self, CanvasBounds};
use crate::params::ConstellationParams;
use crate::renderer;
use crate::scene::Scene;
use crate::ui;

/// Share of the primary monitor the window opens at.
const WINDOW_SCALE: f32 = 0.8;

/// Window size used when no monitor can be queried.
const FALLBACK_WINDOW_SIZE: (u32, u32) = (1280, 720);

// Main model for the application
pub struct Model {
    pub scene: Scene,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Size the window relative to the primary monitor
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (
                (size.width as f32 * WINDOW_SCALE) as u32,
                (size.height as f32 * WINDOW_SCALE) as u32,
            )
        }
        None => {
            log::warn!("No primary monitor found, using a {}x{} window", FALLBACK_WINDOW_SIZE.0, FALLBACK_WINDOW_SIZE.1);
            FALLBACK_WINDOW_SIZE
        }
    };

    // Create the main window
    let window_id = app
        .new_window()
        .title("Particle Constellation")
        .size(window_width, window_height)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .resized(input::resized)
        .raw_event(input::raw_window_event)
        .build()
        .expect("Failed to build the main window");

    let window = app.window(window_id).expect("Main window closed during start-up");

    // Create the UI
    let egui = Egui::from_window(&window);

    // Bounds are read from the window so they match what nannou draws into
    let rect = window.rect();
    let bounds = CanvasBounds::new(rect.w(), rect.h());
    log::info!("Window opened at {:.0}x{:.0}", bounds.width, bounds.height);

    Model {
        scene: Scene::new(ConstellationParams::default(), bounds),
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let live_count = model.scene.field.len();
    let outcome = ui::update_ui(
        &mut model.egui,
        &mut model.scene.params,
        &model.debug_info,
        live_count,
    );

    if outcome.reinitialize {
        model.scene.reinitialize();
    }

    model.scene.advance();
}
