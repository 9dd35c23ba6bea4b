use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{CoordinateTransformer, Dataset, PointId, ScreenSize, Viewport};

/// Fraction of the visible domain admitted beyond each window edge.
pub const DEFAULT_HIT_BUFFER_RATIO: f64 = 0.1;

/// Nearest point found by [`HitTester::nearest`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub id: PointId,
    /// Distance between tap and point, in pixels.
    pub screen_distance: f64,
}

/// Nearest-point search in screen space.
///
/// Distances are measured after projecting both the tap and candidates to
/// pixels, so axes with unequal numeric ranges weigh equally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTester {
    buffer_ratio: f64,
}

impl Default for HitTester {
    fn default() -> Self {
        Self {
            buffer_ratio: DEFAULT_HIT_BUFFER_RATIO,
        }
    }
}

impl HitTester {
    /// Negative or non-finite ratios fall back to no buffer.
    #[must_use]
    pub fn new(buffer_ratio: f64) -> Self {
        let buffer_ratio = if buffer_ratio.is_finite() && buffer_ratio >= 0.0 {
            buffer_ratio
        } else {
            0.0
        };
        Self { buffer_ratio }
    }

    #[must_use]
    pub fn buffer_ratio(self) -> f64 {
        self.buffer_ratio
    }

    /// Candidate x window: the visible window widened by the buffer on both sides.
    #[must_use]
    pub fn candidate_window(self, viewport: &Viewport) -> (f64, f64) {
        let buffer = viewport.visible_domain() * self.buffer_ratio;
        let (start, end) = viewport.visible_window();
        (start - buffer, end + buffer)
    }

    /// Finds the point closest to the data-space tap `(tap_x, tap_y)`.
    ///
    /// Returns `None` when no point of the filtered series lies in the
    /// candidate window, or when `screen` is degenerate. Exact ties keep the
    /// earliest point in dataset order.
    #[must_use]
    pub fn nearest(
        self,
        (tap_x, tap_y): (f64, f64),
        dataset: &Dataset,
        filter: Option<&str>,
        viewport: &Viewport,
        screen: ScreenSize,
    ) -> Option<Hit> {
        if !tap_x.is_finite() || !tap_y.is_finite() {
            return None;
        }
        let transformer = CoordinateTransformer::new(viewport, screen).ok()?;
        let tap = transformer.data_to_screen(tap_x, tap_y);

        dataset
            .points_in_window(self.candidate_window(viewport), filter)
            .map(|(id, point)| Hit {
                id,
                screen_distance: transformer.point_to_screen(point).distance_to(tap),
            })
            .min_by_key(|hit| OrderedFloat(hit.screen_distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DataPoint;

    #[test]
    fn invalid_buffer_ratio_falls_back_to_zero() {
        assert_eq!(HitTester::new(-0.5).buffer_ratio(), 0.0);
        assert_eq!(HitTester::new(f64::NAN).buffer_ratio(), 0.0);
    }

    #[test]
    fn exact_ties_keep_first_point() {
        let dataset = Dataset::from_points(vec![
            DataPoint::new(25.0, 0.0, "A"),
            DataPoint::new(75.0, 0.0, "B"),
        ])
        .expect("valid data");
        let viewport = Viewport::default();
        let hit = HitTester::default()
            .nearest(
                (50.0, 0.0),
                &dataset,
                None,
                &viewport,
                ScreenSize::new(400.0, 300.0),
            )
            .expect("hit");
        assert_eq!(hit.id.index, 0);
    }
}
