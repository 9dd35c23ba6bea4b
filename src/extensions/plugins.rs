use serde::{Deserialize, Serialize};

use crate::core::{PointId, ScreenSize};
use crate::interaction::GesturePhase;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub screen: ScreenSize,
    pub visible_window: (f64, f64),
    pub scroll_position: f64,
    pub visible_domain: f64,
    pub points_len: usize,
    pub gesture_phase: GesturePhase,
    pub selected: Option<PointId>,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    DataReplaced { points_len: usize },
    ViewportChanged { start: f64, end: f64 },
    SelectionChanged { selected: Option<PointId> },
    SeriesFilterChanged { series: Option<String> },
    Reset,
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read engine context without mutating the
/// viewport directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: PluginContext);
}
