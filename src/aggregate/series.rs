use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A labeled sequence of dated values, shaped the way the charting front-end reads it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Series {
    pub label: String,
    pub data: Vec<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Point {
    pub x: NaiveDate,
    pub y: i64,
}

impl Series {
    /// Pair each date with the value at the same position.
    #[must_use]
    pub fn new(label: impl Into<String>, dates: &[NaiveDate], values: &[i64]) -> Self {
        Self {
            label: label.into(),
            data: dates.iter().zip(values).map(|(&x, &y)| Point { x, y }).collect(),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.data.iter().map(|point| point.y)
    }
}

/// Render a report file.
pub fn render(series: &[Series]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(series)
}
