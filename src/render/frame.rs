use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, PointId, ScreenPoint, ScreenSize};
use crate::error::{ChartError, ChartResult};

/// One series projected to pixel space, in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPolyline {
    pub series: String,
    pub points: Vec<ScreenPoint>,
    /// Set when another series is the active filter; drawn at reduced opacity.
    pub dimmed: bool,
}

/// Selected point plus its projected position, used for the vertical rule
/// and marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionMarker {
    pub id: PointId,
    pub point: DataPoint,
    pub screen: ScreenPoint,
}

/// Backend-agnostic input for one chart draw pass.
///
/// Points are not clipped to the window; backends clip to the screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub screen: ScreenSize,
    pub window: (f64, f64),
    pub y_range: (f64, f64),
    pub series_filter: Option<String>,
    pub series: Vec<SeriesPolyline>,
    pub selection: Option<SelectionMarker>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(screen: ScreenSize, window: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            screen,
            window,
            y_range,
            series_filter: None,
            series: Vec::new(),
            selection: None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.screen.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.screen.width,
                height: self.screen.height,
            });
        }

        for polyline in &self.series {
            if polyline
                .points
                .iter()
                .any(|point| !point.x.is_finite() || !point.y.is_finite())
            {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` projects to non-finite pixels",
                    polyline.series
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|polyline| polyline.points.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty() && self.selection.is_none()
    }
}
