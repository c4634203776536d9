use super::TrendMetric;
use serde::{Deserialize, Serialize};

/// Open-code and open-data rates for a single publication year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    pub year: i32,
    pub open_code: f64,
    pub open_data: f64,
}

impl TimeSeriesPoint {
    #[must_use]
    pub const fn new(year: i32, open_code: f64, open_data: f64) -> Self {
        Self { year, open_code, open_data }
    }

    /// The value of the given metric for this year.
    #[must_use]
    pub const fn value(&self, metric: TrendMetric) -> f64 {
        match metric {
            TrendMetric::OpenCode => self.open_code,
            TrendMetric::OpenData => self.open_data,
        }
    }
}
