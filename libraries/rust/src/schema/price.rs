use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub close: f64,
}

/// Rows returned for one lookup, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub points: Vec<PricePoint>,
}

/// One price field over time.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries(pub Vec<(DateTime<Utc>, f64)>);

impl PriceHistory {
    pub fn new(points: Vec<PricePoint>) -> Self {
        PriceHistory { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn open_series(&self) -> PriceSeries {
        PriceSeries(
            self.points
                .iter()
                .map(|point| (point.timestamp, point.open))
                .collect(),
        )
    }

    pub fn close_series(&self) -> PriceSeries {
        PriceSeries(
            self.points
                .iter()
                .map(|point| (point.timestamp, point.close))
                .collect(),
        )
    }
}

impl PriceSeries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits into parallel timestamp and price columns.
    pub fn into_columns(self) -> (Vec<DateTime<Utc>>, Vec<f64>) {
        self.0.into_iter().unzip()
    }
}
