/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and other debug information to be displayed in the UI.
 */

use std::sync::Mutex;
use std::time::Duration;

use crate::renderer::RenderStats;

// Debug information to display
#[derive(Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    // Written from the view, which only sees the model by shared reference
    last_render: Mutex<RenderStats>,
}

impl DebugInfo {
    pub fn record_render(&self, stats: RenderStats) {
        if let Ok(mut last) = self.last_render.lock() {
            *last = stats;
        }
    }

    pub fn last_render(&self) -> RenderStats {
        self.last_render
            .lock()
            .map(|last| *last)
            .unwrap_or_default()
    }
}
