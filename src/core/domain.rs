use serde::{Deserialize, Serialize};

use crate::core::primitives::clamp_between;
use crate::error::{ChartError, ChartResult};

/// Immutable bounds shared by every viewport bound to one dataset.
///
/// `min_domain`/`max_domain` bound the width of the visible x window,
/// `x_range` is the total addressable x extent and `y_range` is the fixed
/// value axis (never zoomed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    pub min_domain: f64,
    pub max_domain: f64,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            min_domain: 10.0,
            max_domain: 100.0,
            x_range: (0.0, 100.0),
            y_range: (-1.5, 1.5),
        }
    }
}

impl DomainConfig {
    /// Builds a config whose x range starts at zero and spans exactly `max_domain`.
    pub fn new(min_domain: f64, max_domain: f64, y_range: (f64, f64)) -> ChartResult<Self> {
        Self {
            min_domain,
            max_domain,
            x_range: (0.0, max_domain),
            y_range,
        }
        .validate()
    }

    #[must_use]
    pub fn with_x_range(mut self, x_low: f64, x_high: f64) -> Self {
        self.x_range = (x_low, x_high);
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        let values = [
            self.min_domain,
            self.max_domain,
            self.x_range.0,
            self.x_range.1,
            self.y_range.0,
            self.y_range.1,
        ];
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidConfig(
                "domain bounds must be finite".to_owned(),
            ));
        }

        if self.min_domain <= 0.0 || self.min_domain > self.max_domain {
            return Err(ChartError::InvalidConfig(format!(
                "visible domain bounds must satisfy 0 < min <= max (min={}, max={})",
                self.min_domain, self.max_domain
            )));
        }

        if self.x_range.0 >= self.x_range.1 {
            return Err(ChartError::InvalidConfig(
                "x range must be increasing".to_owned(),
            ));
        }

        if self.max_domain > self.x_span() {
            return Err(ChartError::InvalidConfig(format!(
                "max visible domain {} exceeds x range width {}",
                self.max_domain,
                self.x_span()
            )));
        }

        if self.y_range.0 >= self.y_range.1 {
            return Err(ChartError::InvalidConfig(
                "y range must be increasing".to_owned(),
            ));
        }

        Ok(self)
    }

    #[must_use]
    pub fn x_span(self) -> f64 {
        self.x_range.1 - self.x_range.0
    }

    #[must_use]
    pub fn y_span(self) -> f64 {
        self.y_range.1 - self.y_range.0
    }

    /// Scroll position of a fully zoomed-out viewport.
    #[must_use]
    pub fn initial_scroll_position(self) -> f64 {
        self.x_range.0 + self.max_domain / 2.0
    }

    /// Allowed scroll positions for a window of `visible_domain` width.
    ///
    /// The window never extends past either end of `x_range`.
    #[must_use]
    pub fn scroll_bounds(self, visible_domain: f64) -> (f64, f64) {
        let half = visible_domain / 2.0;
        (self.x_range.0 + half, self.x_range.1 - half)
    }

    /// Crossed bounds collapse to their midpoint instead of panicking.
    #[must_use]
    pub fn clamp_visible_domain(self, visible_domain: f64) -> f64 {
        clamp_between(visible_domain, self.min_domain, self.max_domain)
    }
}
