//! Resolved component configuration
//!
//! All class names and toggles are resolved to final values once, at
//! initialization; nothing re-derives them during a transition.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabsConfig {
    /// Class marking the active nav item.
    pub active_class: String,
    /// Class on the height-animated wrapper inserted around the panes.
    pub container_class: String,
    /// Class on every content pane.
    pub tab_class: String,
    /// Class on placeholder panes materialized for ajax nav entries.
    pub ajax_container_class: String,
    /// Uniform duration for fade-out, fade-to, resize, and fade-in.
    pub animation_speed_ms: u64,
    /// Scroll the page to the group when a tab activates.
    pub scroll_to: bool,
    /// Pixel offset applied to the scroll target.
    pub scroll_to_offset: f64,
    /// Generate prev/next pagination links inside each pane.
    pub pagination: bool,
    pub pagination_config: PaginationConfig,
    /// Re-fetch remote panes on every activation, not just the first.
    pub reload_ajax: bool,
    /// Allow cached responses for remote pane fetches.
    pub cache_ajax: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Text rendered before the copied nav label.
    pub before_text: String,
    /// Text rendered after the copied nav label.
    pub after_text: String,
    /// Extra classes on each generated link.
    pub extra_classes: Vec<String>,
    /// Extra attributes on each generated link.
    pub extra_attributes: Vec<(String, String)>,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            active_class: "active".to_string(),
            container_class: "container".to_string(),
            tab_class: "tab".to_string(),
            ajax_container_class: "tab-ajax".to_string(),
            animation_speed_ms: 180,
            scroll_to: false,
            scroll_to_offset: 0.0,
            pagination: false,
            pagination_config: PaginationConfig::default(),
            reload_ajax: false,
            cache_ajax: true,
        }
    }
}

impl TabsConfig {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_speed_ms)
    }
}
