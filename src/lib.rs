/*
 * Particle Constellation - Module Definitions
 *
 * This file defines the module structure for the constellation application.
 * The simulation and rendering core is window independent and drawn through
 * the DrawingSurface trait; the app, ui and input modules wire it into nannou.
 */

// Re-export key components for easier access
pub use app::Model;
pub use color::Color;
pub use debug::DebugInfo;
pub use error::{ConstellationError, Result};
pub use field::ParticleField;
pub use input::{CanvasBounds, CursorState};
pub use options::{OptionSpec, OptionValue};
pub use params::ConstellationParams;
pub use particle::Particle;
pub use renderer::RenderStats;
pub use scene::Scene;
pub use surface::{DrawingSurface, LineCap, LinearGradient, RecordingSurface, StrokeStyle};

// Define modules
pub mod app;
pub mod color;
pub mod debug;
pub mod error;
pub mod field;
pub mod input;
pub mod logging;
pub mod options;
pub mod params;
pub mod particle;
pub mod physics;
pub mod renderer;
pub mod scene;
pub mod surface;
pub mod ui;
