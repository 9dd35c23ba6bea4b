use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Handle to one entry of a [`Dataset`].
///
/// The handle never owns the point. It stops resolving as soon as the
/// dataset contents are replaced, so a selection cannot outlive the data it
/// points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointId {
    pub index: usize,
    pub generation: u64,
}

/// Owned collection of multi-series points.
///
/// Iteration order is insertion order; hit-test ties resolve to the earliest
/// point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    points: Vec<DataPoint>,
    series: IndexSet<String>,
    generation: u64,
}

impl Dataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<DataPoint>) -> ChartResult<Self> {
        let mut dataset = Self::new();
        dataset.replace(points)?;
        Ok(dataset)
    }

    /// Replaces all points and invalidates every outstanding [`PointId`].
    pub fn replace(&mut self, points: Vec<DataPoint>) -> ChartResult<()> {
        if let Some(bad) = points.iter().position(|point| !point.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "point #{bad} has non-finite coordinates"
            )));
        }

        self.series = points.iter().map(|point| point.series.clone()).collect();
        self.points = points;
        self.generation = self.generation.wrapping_add(1);
        Ok(())
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Series names in first-appearance order.
    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains_series(&self, series: &str) -> bool {
        self.series.contains(series)
    }

    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<PointId> {
        (index < self.points.len()).then_some(PointId {
            index,
            generation: self.generation,
        })
    }

    #[must_use]
    pub fn resolve(&self, id: PointId) -> Option<&DataPoint> {
        if id.generation != self.generation {
            return None;
        }
        self.points.get(id.index)
    }

    /// Points passing `filter` whose x lies in `[start, end]`, with their ids.
    pub fn points_in_window<'a>(
        &'a self,
        (start, end): (f64, f64),
        filter: Option<&'a str>,
    ) -> impl Iterator<Item = (PointId, &'a DataPoint)> + 'a {
        let generation = self.generation;
        self.points
            .iter()
            .enumerate()
            .filter(move |(_, point)| point.belongs_to(filter))
            .filter(move |(_, point)| point.x >= start && point.x <= end)
            .map(move |(index, point)| (PointId { index, generation }, point))
    }
}
