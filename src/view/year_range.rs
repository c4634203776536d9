use crate::metrics::TimeSeriesPoint;
use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::Serialize;

/// A closed interval of publication years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRange {
    pub from_year: i32,
    pub to_year: i32,
}

impl YearRange {
    #[must_use]
    pub const fn new(from_year: i32, to_year: i32) -> Self {
        Self { from_year, to_year }
    }

    #[must_use]
    pub const fn contains(&self, year: i32) -> bool {
        self.from_year <= year && year <= self.to_year
    }

    /// A range whose start lies after its end contains no years.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.from_year > self.to_year
    }
}

impl Display for YearRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}-{}", self.from_year, self.to_year)
    }
}

/// The points of `series` whose year lies in `[from_year, to_year]`, in input order.
#[must_use]
pub fn filter_years(series: &[TimeSeriesPoint], from_year: i32, to_year: i32) -> Vec<TimeSeriesPoint> {
    let range = YearRange::new(from_year, to_year);
    series.iter().filter(|p| range.contains(p.year)).copied().collect()
}
