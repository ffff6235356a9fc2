/*
 * Constellation Parameters Module
 *
 * This module defines the ConstellationParams struct that contains all the
 * adjustable parameters for the particle constellation. These parameters can be
 * modified through the UI at any time, including between two frames of a running
 * animation. It also provides snapshot based change detection and access by
 * option name through the option table.
 */

use crate::color::Color;
use crate::error::Result;
use crate::options::{self, OptionValue};

// Parameters for the constellation that can be adjusted via UI
#[derive(Debug, Clone, PartialEq)]
pub struct ConstellationParams {
    // Background
    pub transparent_background: bool,
    pub background_color: Color,

    // Points. `points_count` is the desired count; the live field only follows
    // it when a re-initialization is committed.
    pub points_count: usize,
    pub point_color: Color,
    pub point_size: f32,

    // Motion
    pub velocity_ratio: f32,
    pub velocity_decay: f32,
    pub gravity: f32,
    pub bounce: f32,
    pub force_point_enabled: bool,

    // Lines
    pub line_width: f32,
    pub line_distance: f32,
    pub lines_color: Color,
    pub lines_gradient_enabled: bool,
    pub lines_gradient_start_color: Color,
    pub lines_gradient_middle_color: Color,
    pub lines_gradient_end_color: Color,

    // Driver settings, not part of the option table
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    pub(crate) previous_values: Option<Vec<OptionValue>>,
}

/// What changed since the last snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamChanges {
    pub any_changed: bool,
    pub points_count_changed: bool,
}

impl Default for ConstellationParams {
    fn default() -> Self {
        Self {
            transparent_background: false,
            background_color: Color::from_hex(0x011936),
            points_count: 110,
            point_color: Color::from_hex(0xBBE0EB),
            point_size: 1.5,
            velocity_ratio: 1.0,
            velocity_decay: 0.8,
            gravity: 0.0,
            bounce: 1.0,
            force_point_enabled: false,
            line_width: 0.2,
            line_distance: 110.0,
            lines_color: Color::from_hex(0xBBE0EB),
            lines_gradient_enabled: false,
            lines_gradient_start_color: Color::from_hex(0xffa700),
            lines_gradient_middle_color: Color::from_hex(0xf00f0f),
            lines_gradient_end_color: Color::from_hex(0xff00ff),
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl ConstellationParams {
    /// Read an option by its table name.
    pub fn get(&self, name: &str) -> Result<OptionValue> {
        Ok(options::lookup(name)?.get(self))
    }

    /// Write an option by its table name. The value kind must match the option.
    pub fn set(&mut self, name: &str, value: OptionValue) -> Result<()> {
        let spec = options::lookup(name)?;
        spec.set(self, value)?;
        log::debug!("Option {} set to {}", name, value);
        Ok(())
    }

    /// Write a color option from a hex string such as `#BBE0EB`.
    pub fn set_color_str(&mut self, name: &str, hex: &str) -> Result<()> {
        let color = hex.parse::<Color>()?;
        self.set(name, OptionValue::Color(color))
    }

    /// Gradient stop colors in offset order 0 / 0.5 / 1.
    pub fn gradient_stops(&self) -> [(f32, Color); 3] {
        [
            (0.0, self.lines_gradient_start_color),
            (0.5, self.lines_gradient_middle_color),
            (1.0, self.lines_gradient_end_color),
        ]
    }

    // Take a snapshot of current option values for change detection
    pub fn take_snapshot(&mut self) {
        let values = options::OPTIONS.iter().map(|spec| spec.get(self)).collect();
        self.previous_values = Some(values);
    }

    // Compare the current option values against the last snapshot
    pub fn detect_changes(&self) -> ParamChanges {
        let mut changes = ParamChanges::default();

        // If we don't have previous values, nothing has changed
        if let Some(prev) = &self.previous_values {
            for (spec, before) in options::OPTIONS.iter().zip(prev) {
                if spec.get(self) != *before {
                    changes.any_changed = true;
                    if spec.requires_commit {
                        changes.points_count_changed = true;
                    }
                }
            }
        }

        changes
    }
}
