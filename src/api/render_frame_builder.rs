use indexmap::IndexMap;

use crate::core::{CoordinateTransformer, ScreenPoint};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, SelectionMarker, SeriesPolyline};

use super::ChartEngine;

pub(super) struct RenderFrameBuilder;

impl RenderFrameBuilder {
    /// Projects every series through the current viewport.
    pub(super) fn build<R: Renderer>(engine: &ChartEngine<R>) -> ChartResult<RenderFrame> {
        let transformer = CoordinateTransformer::new(&engine.viewport, engine.screen)?;
        let filter = engine.series_filter.current();

        let mut projected: IndexMap<&str, Vec<ScreenPoint>> = IndexMap::new();
        for point in engine.dataset.points() {
            projected
                .entry(point.series.as_str())
                .or_default()
                .push(transformer.point_to_screen(point));
        }

        let series = projected
            .into_iter()
            .map(|(name, points)| SeriesPolyline {
                dimmed: filter.as_deref().is_some_and(|active| active != name),
                series: name.to_owned(),
                points,
            })
            .collect();

        let selection = engine.viewport.selected().and_then(|id| {
            engine.dataset.resolve(id).map(|point| SelectionMarker {
                id,
                point: point.clone(),
                screen: transformer.point_to_screen(point),
            })
        });

        let mut frame = RenderFrame::new(
            engine.screen,
            engine.viewport.visible_window(),
            engine.viewport.domain().y_range,
        );
        frame.series_filter = filter;
        frame.series = series;
        frame.selection = selection;
        Ok(frame)
    }
}
