mod frame;
mod null_renderer;

pub use frame::{RenderFrame, SelectionMarker, SeriesPolyline};
pub use null_renderer::NullRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so styling, axis
/// ticks and legend drawing stay out of the viewport and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
