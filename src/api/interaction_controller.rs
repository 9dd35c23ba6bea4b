use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{CoordinateTransformer, DataPoint, PointId, ScreenPoint, ScreenSize};
use crate::interaction::{GestureEvent, GesturePhase, InteractionConfig, ViewportCommand};
use crate::render::Renderer;

use super::{ChartEngine, PluginEvent};

/// Effect of one routed gesture on engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GestureOutcome {
    pub viewport_changed: bool,
    pub selection_changed: bool,
}

impl GestureOutcome {
    fn merge(&mut self, other: GestureOutcome) {
        self.viewport_changed |= other.viewport_changed;
        self.selection_changed |= other.selection_changed;
    }
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn gesture_phase(&self) -> GesturePhase {
        self.router.phase()
    }

    #[must_use]
    pub fn interaction_config(&self) -> InteractionConfig {
        self.router.config()
    }

    /// Classifies a raw gesture and applies the resulting viewport commands.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> GestureOutcome {
        self.sync_series_filter();
        let mut outcome = GestureOutcome::default();
        for command in self.router.route(event) {
            outcome.merge(self.apply_command(command));
        }
        outcome
    }

    /// Zooms around `anchor_screen_x` using the engine's screen width.
    pub fn zoom(&mut self, scale_factor: f64, anchor_screen_x: f64) -> bool {
        self.apply_command(ViewportCommand::Zoom {
            scale_factor,
            anchor_screen_x,
            screen_width: self.screen.width,
        })
        .viewport_changed
    }

    /// Pans by a signed fraction of the screen width.
    pub fn pan(&mut self, drag_ratio: f64) -> bool {
        self.apply_command(ViewportCommand::Pan { drag_ratio })
            .viewport_changed
    }

    /// Selects the point nearest to a screen location, as a tap would.
    pub fn tap_at(&mut self, location: ScreenPoint) -> bool {
        self.sync_series_filter();
        self.apply_command(ViewportCommand::Select {
            location,
            screen: self.screen,
        })
        .selection_changed
    }

    pub fn clear_selection(&mut self) -> bool {
        self.apply_command(ViewportCommand::ClearSelection)
            .selection_changed
    }

    /// Restores the fully zoomed-out state and drops the selection.
    pub fn reset(&mut self) {
        let before = self.viewport;
        self.viewport.reset();
        debug!(
            scroll_position = self.viewport.scroll_position(),
            visible_domain = self.viewport.visible_domain(),
            "reset viewport"
        );
        self.emit_plugin_event(PluginEvent::Reset);
        if before.visible_window() != self.viewport.visible_window() {
            self.emit_viewport_changed();
        }
        if before.selected().is_some() {
            self.emit_plugin_event(PluginEvent::SelectionChanged { selected: None });
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<PointId> {
        self.viewport.selected()
    }

    /// Selected point, if its handle still resolves in the current dataset.
    #[must_use]
    pub fn selected_point(&self) -> Option<&DataPoint> {
        self.viewport.selected_point(&self.dataset)
    }

    pub(super) fn apply_command(&mut self, command: ViewportCommand) -> GestureOutcome {
        let mut outcome = GestureOutcome::default();
        match command {
            ViewportCommand::Zoom {
                scale_factor,
                anchor_screen_x,
                screen_width,
            } => {
                outcome.viewport_changed =
                    self.viewport.zoom(scale_factor, anchor_screen_x, screen_width);
                trace!(
                    scale_factor,
                    anchor_screen_x,
                    visible_domain = self.viewport.visible_domain(),
                    scroll_position = self.viewport.scroll_position(),
                    "zoom"
                );
            }
            ViewportCommand::Pan { drag_ratio } => {
                outcome.viewport_changed = self.viewport.pan(drag_ratio);
                trace!(
                    drag_ratio,
                    scroll_position = self.viewport.scroll_position(),
                    "pan"
                );
            }
            ViewportCommand::Select { location, screen } => {
                outcome.selection_changed = self.select_at(location, screen);
            }
            ViewportCommand::ClearSelection => {
                outcome.selection_changed = self.set_selection(None);
            }
        }

        if outcome.viewport_changed {
            self.emit_viewport_changed();
        }
        outcome
    }

    fn select_at(&mut self, location: ScreenPoint, screen: ScreenSize) -> bool {
        let transformer = match CoordinateTransformer::new(&self.viewport, screen) {
            Ok(transformer) => transformer,
            Err(err) => {
                warn!(error = %err, "skipping tap with degenerate geometry");
                return false;
            }
        };
        if !location.x.is_finite() || !location.y.is_finite() {
            warn!("skipping tap at non-finite location");
            return false;
        }

        let tap = transformer.screen_to_data(location);
        let hit = self.series_filter.with_current(|filter| {
            self.hit_tester
                .nearest(tap, &self.dataset, filter, &self.viewport, screen)
        });
        debug!(
            tap_x = tap.0,
            tap_y = tap.1,
            hit = ?hit.map(|hit| hit.id.index),
            "tap hit test"
        );
        self.set_selection(hit.map(|hit| hit.id))
    }

    /// Stores the selection and reports whether it changed.
    pub(super) fn set_selection(&mut self, selected: Option<PointId>) -> bool {
        if self.viewport.selected() == selected {
            return false;
        }
        self.viewport.select(selected);
        self.emit_plugin_event(PluginEvent::SelectionChanged { selected });
        true
    }

    /// Picks up legend writes made since the last interaction.
    ///
    /// A selection outside the newly active series is dropped.
    pub(super) fn sync_series_filter(&mut self) {
        let Some(series) = self.series_filter.poll_change() else {
            return;
        };
        debug!(series = ?series, "series filter changed");
        self.emit_plugin_event(PluginEvent::SeriesFilterChanged {
            series: series.clone(),
        });

        let stale = self
            .selected_point()
            .is_some_and(|point| !point.belongs_to(series.as_deref()));
        if stale {
            self.set_selection(None);
        }
    }
}
