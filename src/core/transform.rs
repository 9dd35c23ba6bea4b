//! Coordinate transforms between data space and screen space.

use crate::core::{DataPoint, ScreenPoint, ScreenSize, Viewport};
use crate::error::{ChartError, ChartResult};

/// Snapshot of the mapping between the viewport window and a screen rectangle.
///
/// Screen y grows downward while data y grows upward, so the y axis is
/// inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransformer {
    domain_start: f64,
    visible_domain: f64,
    y_low: f64,
    y_span: f64,
    screen: ScreenSize,
}

impl CoordinateTransformer {
    /// Captures the current viewport window for `screen`.
    ///
    /// Fails when the screen has no area or the window has no width.
    pub fn new(viewport: &Viewport, screen: ScreenSize) -> ChartResult<Self> {
        if !screen.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: screen.width,
                height: screen.height,
            });
        }

        let visible_domain = viewport.visible_domain();
        if !visible_domain.is_finite() || visible_domain <= 0.0 {
            return Err(ChartError::InvalidData(
                "visible domain must be finite and > 0".to_owned(),
            ));
        }

        let (y_low, y_high) = viewport.domain().y_range;
        let y_span = y_high - y_low;
        if !y_span.is_finite() || y_span <= 0.0 {
            return Err(ChartError::InvalidData(
                "y range must be finite and increasing".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: viewport.domain_start(),
            visible_domain,
            y_low,
            y_span,
            screen,
        })
    }

    #[must_use]
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    #[must_use]
    pub fn x_to_screen(&self, x: f64) -> f64 {
        (x - self.domain_start) / self.visible_domain * self.screen.width
    }

    #[must_use]
    pub fn y_to_screen(&self, y: f64) -> f64 {
        (1.0 - (y - self.y_low) / self.y_span) * self.screen.height
    }

    #[must_use]
    pub fn screen_to_x(&self, screen_x: f64) -> f64 {
        self.domain_start + screen_x / self.screen.width * self.visible_domain
    }

    #[must_use]
    pub fn screen_to_y(&self, screen_y: f64) -> f64 {
        self.y_low + (1.0 - screen_y / self.screen.height) * self.y_span
    }

    #[must_use]
    pub fn data_to_screen(&self, x: f64, y: f64) -> ScreenPoint {
        ScreenPoint::new(self.x_to_screen(x), self.y_to_screen(y))
    }

    #[must_use]
    pub fn point_to_screen(&self, point: &DataPoint) -> ScreenPoint {
        self.data_to_screen(point.x, point.y)
    }

    /// Inverse of [`Self::data_to_screen`], returned as `(x, y)` in data space.
    #[must_use]
    pub fn screen_to_data(&self, screen_point: ScreenPoint) -> (f64, f64) {
        (
            self.screen_to_x(screen_point.x),
            self.screen_to_y(screen_point.y),
        )
    }
}

/// Maps a data point to screen space, or `None` for degenerate geometry.
#[must_use]
pub fn data_to_screen(
    viewport: &Viewport,
    screen: ScreenSize,
    point: &DataPoint,
) -> Option<ScreenPoint> {
    CoordinateTransformer::new(viewport, screen)
        .ok()
        .map(|transformer| transformer.point_to_screen(point))
}

/// Maps a screen point to data space `(x, y)`, or `None` for degenerate geometry.
#[must_use]
pub fn screen_to_data(
    viewport: &Viewport,
    screen: ScreenSize,
    screen_point: ScreenPoint,
) -> Option<(f64, f64)> {
    CoordinateTransformer::new(viewport, screen)
        .ok()
        .map(|transformer| transformer.screen_to_data(screen_point))
}
