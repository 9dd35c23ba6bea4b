use serde::{Deserialize, Serialize};

use crate::core::primitives::clamp_between;
use crate::core::{DataPoint, Dataset, DomainConfig, PointId};
use crate::error::{ChartError, ChartResult};

/// Mutable interaction state of one chart widget.
///
/// Invariants held after every mutation:
/// - `min_domain <= visible_domain <= max_domain`
/// - the window `[scroll_position - visible_domain / 2, scroll_position + visible_domain / 2]`
///   lies inside `x_range`
///
/// Operations given invalid numeric input leave the state untouched and
/// report `false`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ViewportState")]
pub struct Viewport {
    domain: DomainConfig,
    scroll_position: f64,
    visible_domain: f64,
    selected: Option<PointId>,
}

impl Viewport {
    /// Creates a fully zoomed-out viewport anchored at the start of the x range.
    pub fn new(domain: DomainConfig) -> ChartResult<Self> {
        Ok(Self::zoomed_out(domain.validate()?))
    }

    fn zoomed_out(domain: DomainConfig) -> Self {
        Self {
            domain,
            scroll_position: domain.initial_scroll_position(),
            visible_domain: domain.max_domain,
            selected: None,
        }
    }

    #[must_use]
    pub fn domain(&self) -> DomainConfig {
        self.domain
    }

    /// X coordinate of the center of the visible window.
    #[must_use]
    pub fn scroll_position(&self) -> f64 {
        self.scroll_position
    }

    /// Width of the visible window.
    #[must_use]
    pub fn visible_domain(&self) -> f64 {
        self.visible_domain
    }

    #[must_use]
    pub fn domain_start(&self) -> f64 {
        self.scroll_position - self.visible_domain / 2.0
    }

    #[must_use]
    pub fn domain_end(&self) -> f64 {
        self.scroll_position + self.visible_domain / 2.0
    }

    /// Visible window as `(domain_start, domain_end)`.
    #[must_use]
    pub fn visible_window(&self) -> (f64, f64) {
        (self.domain_start(), self.domain_end())
    }

    #[must_use]
    pub fn is_fully_zoomed_out(&self) -> bool {
        self.visible_domain >= self.domain.max_domain
    }

    /// Zooms by `scale_factor` keeping the data under `anchor_screen_x` fixed.
    ///
    /// `scale_factor > 1.0` zooms in, `0.0 < scale_factor < 1.0` zooms out.
    /// The anchor is clamped onto the screen. Only clamping at the domain
    /// limits or range edges may move the anchored data off its pixel.
    pub fn zoom(&mut self, scale_factor: f64, anchor_screen_x: f64, screen_width: f64) -> bool {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return false;
        }
        if !screen_width.is_finite() || screen_width <= 0.0 || !anchor_screen_x.is_finite() {
            return false;
        }

        let relative_x = (anchor_screen_x / screen_width).clamp(0.0, 1.0);
        let anchor_data = self.domain_start() + self.visible_domain * relative_x;

        let new_domain = self
            .domain
            .clamp_visible_domain(self.visible_domain / scale_factor);
        let new_window_start = anchor_data - new_domain * relative_x;
        let (low, high) = self.domain.scroll_bounds(new_domain);
        let new_scroll = clamp_between(new_window_start + new_domain / 2.0, low, high);

        let changed = new_domain != self.visible_domain || new_scroll != self.scroll_position;
        self.visible_domain = new_domain;
        self.scroll_position = new_scroll;
        changed
    }

    /// Pans by a signed fraction of the screen width.
    ///
    /// Dragging right (positive ratio) reveals earlier x values. Panning
    /// saturates at either end of the x range.
    pub fn pan(&mut self, drag_ratio: f64) -> bool {
        if !drag_ratio.is_finite() {
            return false;
        }

        let data_move = drag_ratio * self.visible_domain;
        let (low, high) = self.domain.scroll_bounds(self.visible_domain);
        let new_scroll = clamp_between(self.scroll_position - data_move, low, high);

        let changed = new_scroll != self.scroll_position;
        self.scroll_position = new_scroll;
        changed
    }

    /// Restores the fully zoomed-out, centered state and drops the selection.
    pub fn reset(&mut self) {
        *self = Self::zoomed_out(self.domain);
    }

    #[must_use]
    pub fn selected(&self) -> Option<PointId> {
        self.selected
    }

    pub fn select(&mut self, point: Option<PointId>) {
        self.selected = point;
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Resolves the selection against `dataset`; stale handles yield `None`.
    #[must_use]
    pub fn selected_point<'a>(&self, dataset: &'a Dataset) -> Option<&'a DataPoint> {
        self.selected.and_then(|id| dataset.resolve(id))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::zoomed_out(DomainConfig::default())
    }
}

/// Serialized form of [`Viewport`], checked before it becomes one.
#[derive(Debug, Clone, Copy, Deserialize)]
struct ViewportState {
    domain: DomainConfig,
    scroll_position: f64,
    visible_domain: f64,
    #[serde(default)]
    selected: Option<PointId>,
}

impl TryFrom<ViewportState> for Viewport {
    type Error = ChartError;

    fn try_from(state: ViewportState) -> ChartResult<Self> {
        let domain = state.domain.validate()?;
        if !state.scroll_position.is_finite() || !state.visible_domain.is_finite() {
            return Err(ChartError::InvalidConfig(
                "viewport position must be finite".to_owned(),
            ));
        }
        let visible_domain = domain.clamp_visible_domain(state.visible_domain);
        let (low, high) = domain.scroll_bounds(visible_domain);
        Ok(Self {
            domain,
            scroll_position: clamp_between(state.scroll_position, low, high),
            visible_domain,
            selected: state.selected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fully_zoomed_out_and_centered() {
        let viewport = Viewport::default();
        assert_eq!(viewport.scroll_position(), 50.0);
        assert_eq!(viewport.visible_domain(), 100.0);
        assert_eq!(viewport.visible_window(), (0.0, 100.0));
        assert!(viewport.is_fully_zoomed_out());
    }

    #[test]
    fn zoom_rejects_invalid_inputs() {
        let mut viewport = Viewport::default();
        assert!(!viewport.zoom(0.0, 10.0, 100.0));
        assert!(!viewport.zoom(-2.0, 10.0, 100.0));
        assert!(!viewport.zoom(f64::NAN, 10.0, 100.0));
        assert!(!viewport.zoom(2.0, 10.0, 0.0));
        assert!(!viewport.zoom(2.0, f64::INFINITY, 100.0));
        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn zoom_in_at_center_keeps_center() {
        let mut viewport = Viewport::default();
        assert!(viewport.zoom(2.0, 200.0, 400.0));
        assert_eq!(viewport.visible_domain(), 50.0);
        assert_eq!(viewport.scroll_position(), 50.0);
    }

    #[test]
    fn zoom_at_left_edge_pins_window_start() {
        let mut viewport = Viewport::default();
        viewport.zoom(4.0, 0.0, 400.0);
        assert_eq!(viewport.visible_window(), (0.0, 25.0));
    }

    #[test]
    fn new_rejects_inverted_domain_bounds() {
        let inverted = DomainConfig {
            min_domain: 50.0,
            max_domain: 20.0,
            ..DomainConfig::default()
        };
        assert!(matches!(
            Viewport::new(inverted),
            Err(ChartError::InvalidConfig(_))
        ));
    }

    #[test]
    fn deserialized_state_is_validated_and_clamped() {
        let json = r#"{
            "domain": { "min_domain": 50.0, "max_domain": 20.0, "x_range": [0.0, 100.0], "y_range": [-1.5, 1.5] },
            "scroll_position": 50.0,
            "visible_domain": 20.0,
            "selected": null
        }"#;
        assert!(serde_json::from_str::<Viewport>(json).is_err());

        let json = r#"{
            "domain": { "min_domain": 10.0, "max_domain": 100.0, "x_range": [0.0, 100.0], "y_range": [-1.5, 1.5] },
            "scroll_position": 500.0,
            "visible_domain": 2.0
        }"#;
        let mut viewport: Viewport = serde_json::from_str(json).expect("valid state");
        assert_eq!(viewport.visible_domain(), 10.0);
        assert_eq!(viewport.visible_window(), (90.0, 100.0));
        assert!(viewport.zoom(0.5, 200.0, 400.0));
    }

    #[test]
    fn pan_rejects_non_finite_ratio() {
        let mut viewport = Viewport::default();
        viewport.zoom(2.0, 200.0, 400.0);
        let before = viewport;
        assert!(!viewport.pan(f64::NAN));
        assert_eq!(viewport, before);
    }
}
