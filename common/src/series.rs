use core::fmt;

use chrono::{DateTime, Utc};
use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Write,
    Read,
}

impl Direction {
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Write => "write",
            Direction::Read => "read",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Write => "Write",
            Direction::Read => "Read",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub speed_mbs: f64,
}

/// Throughput over time for one IO direction
///
/// Points keep the order they were appended in, which for loaded results is
/// the order the result files were discovered in. Use
/// [`Series::sort_by_timestamp`] for chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub direction: Direction,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new(direction: Direction) -> Self {
        Series {
            direction,
            points: Vec::new(),
        }
    }

    pub fn push(&mut self, point: SeriesPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn speeds(&self) -> Vec<f64> {
        self.points.iter().map(|x| x.speed_mbs).collect()
    }

    /// Stable, so points sharing a timestamp keep their relative order
    pub fn sort_by_timestamp(&mut self) {
        self.points.sort_by_key(|x| x.timestamp);
    }

    pub fn summary(&self) -> Result<SummaryStats, SummaryError> {
        SummaryStats::from_values(&self.speeds())
    }
}

impl Extend<SeriesPoint> for Series {
    fn extend<T: IntoIterator<Item = SeriesPoint>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SummaryError {
    #[error("Cannot summarize an empty series")]
    EmptySeries,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl SummaryStats {
    pub fn from_values(values: &[f64]) -> Result<Self, SummaryError> {
        let (min, max) = match values.iter().copied().minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => return Err(SummaryError::EmptySeries),
            MinMaxResult::OneElement(x) => (x, x),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Ok(SummaryStats { min, max, mean })
    }
}
