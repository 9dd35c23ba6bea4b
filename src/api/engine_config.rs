use serde::{Deserialize, Serialize};

use crate::core::{DomainConfig, ScreenSize};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{InteractionConfig, ZoomAnchor};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub screen: ScreenSize,
    #[serde(default)]
    pub domain: DomainConfig,
    #[serde(default)]
    pub interaction: InteractionConfig,
}

impl ChartEngineConfig {
    /// Creates a config with default domain and interaction tuning.
    #[must_use]
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            screen,
            domain: DomainConfig::default(),
            interaction: InteractionConfig::default(),
        }
    }

    #[must_use]
    pub fn with_domain(mut self, domain: DomainConfig) -> Self {
        self.domain = domain;
        self
    }

    /// Sets the pointer travel (pixels) still classified as a tap.
    #[must_use]
    pub fn with_tap_slop_px(mut self, tap_slop_px: f64) -> Self {
        self.interaction.tap_slop_px = tap_slop_px;
        self
    }

    #[must_use]
    pub fn with_zoom_anchor(mut self, zoom_anchor: ZoomAnchor) -> Self {
        self.interaction.zoom_anchor = zoom_anchor;
        self
    }

    /// Sets the fraction of the visible domain admitted past each window
    /// edge during hit testing.
    #[must_use]
    pub fn with_hit_buffer_ratio(mut self, hit_buffer_ratio: f64) -> Self {
        self.interaction.hit_buffer_ratio = hit_buffer_ratio;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.screen.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.screen.width,
                height: self.screen.height,
            });
        }
        self.domain.validate()?;

        let interaction = self.interaction;
        if !interaction.tap_slop_px.is_finite() || interaction.tap_slop_px < 0.0 {
            return Err(ChartError::InvalidConfig(
                "tap slop must be finite and >= 0".to_owned(),
            ));
        }
        if !interaction.hit_buffer_ratio.is_finite() || interaction.hit_buffer_ratio < 0.0 {
            return Err(ChartError::InvalidConfig(
                "hit buffer ratio must be finite and >= 0".to_owned(),
            ));
        }

        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }
}
