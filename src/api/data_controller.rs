use tracing::{debug, warn};

use crate::core::{DataPoint, Dataset};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, PluginEvent};

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the dataset.
    ///
    /// Any selection into the previous data is dropped; the viewport window
    /// is kept.
    pub fn set_data(&mut self, points: Vec<DataPoint>) -> ChartResult<()> {
        let count = points.len();
        if let Err(err) = self.dataset.replace(points) {
            warn!(error = %err, count, "rejecting data replacement");
            return Err(err);
        }
        debug!(
            count,
            generation = self.dataset.generation(),
            "set data points"
        );

        self.emit_plugin_event(PluginEvent::DataReplaced { points_len: count });
        if self.viewport.selected().is_some() {
            self.set_selection(None);
        }
        Ok(())
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        self.dataset.points()
    }

    #[must_use]
    pub fn series_names(&self) -> Vec<String> {
        self.dataset.series_names().map(str::to_owned).collect()
    }
}
