use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, DomainConfig, PointId, ScreenSize};
use crate::error::{ChartError, ChartResult};
use crate::interaction::GesturePhase;
use crate::render::Renderer;

use super::ChartEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub screen: ScreenSize,
    pub domain: DomainConfig,
    pub scroll_position: f64,
    pub visible_domain: f64,
    pub visible_window: (f64, f64),
    pub gesture_phase: GesturePhase,
    pub series_filter: Option<String>,
    pub selected: Option<PointId>,
    pub selected_point: Option<DataPoint>,
    pub series: Vec<String>,
    pub points: Vec<DataPoint>,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            screen: self.screen,
            domain: self.viewport.domain(),
            scroll_position: self.viewport.scroll_position(),
            visible_domain: self.viewport.visible_domain(),
            visible_window: self.viewport.visible_window(),
            gesture_phase: self.router.phase(),
            series_filter: self.series_filter.current(),
            selected: self.viewport.selected(),
            selected_point: self.selected_point().cloned(),
            series: self.series_names(),
            points: self.dataset.points().to_vec(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
