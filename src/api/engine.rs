use tracing::debug;

use crate::core::{Dataset, ScreenSize, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartPlugin;
use crate::interaction::{GestureRouter, HitTester, SeriesFilterObserver};
use crate::render::Renderer;

use super::{ChartEngineConfig, PluginEvent, render_frame_builder::RenderFrameBuilder};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns one viewport, the dataset it selects into, the gesture
/// router and plugins. The series filter is only observed; it belongs to the
/// legend-side [`crate::interaction::SeriesFilterGroup`] shared by every
/// chart bound to the same data.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) screen: ScreenSize,
    pub(super) viewport: Viewport,
    pub(super) dataset: Dataset,
    pub(super) series_filter: SeriesFilterObserver,
    pub(super) router: GestureRouter,
    pub(super) hit_tester: HitTester,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(
        renderer: R,
        config: ChartEngineConfig,
        series_filter: SeriesFilterObserver,
    ) -> ChartResult<Self> {
        let config = config.validate()?;
        debug!(
            width = config.screen.width,
            height = config.screen.height,
            max_domain = config.domain.max_domain,
            "create chart engine"
        );

        Ok(Self {
            renderer,
            screen: config.screen,
            viewport: Viewport::new(config.domain)?,
            dataset: Dataset::new(),
            series_filter,
            router: GestureRouter::new(config.interaction),
            hit_tester: HitTester::new(config.interaction.hit_buffer_ratio),
            plugins: Vec::new(),
        })
    }

    #[must_use]
    pub fn screen_size(&self) -> ScreenSize {
        self.screen
    }

    pub fn set_screen_size(&mut self, screen: ScreenSize) -> ChartResult<()> {
        if !screen.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: screen.width,
                height: screen.height,
            });
        }
        self.screen = screen;
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn visible_window(&self) -> (f64, f64) {
        self.viewport.visible_window()
    }

    #[must_use]
    pub fn series_filter(&self) -> Option<String> {
        self.series_filter.current()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn render(&mut self) -> ChartResult<()> {
        self.sync_series_filter();
        let frame = RenderFrameBuilder::build(self)?;
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
