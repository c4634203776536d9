//! Range checks applied to decoded backend responses.

use super::{Endpoint, LoadError};
use crate::metrics::{DistributionEntry, MetricsSummary, TimeSeriesPoint};

type Result<T> = core::result::Result<T, LoadError>;

fn check_percentage(endpoint: Endpoint, field: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(LoadError::invalid_response(
            endpoint,
            format!("{field} must be a percentage between 0 and 100, got {value}"),
        ))
    }
}

pub fn summary(summary: &MetricsSummary) -> Result<()> {
    check_percentage(Endpoint::Summary, "openCodePercentage", summary.open_code_percentage)?;
    check_percentage(Endpoint::Summary, "openDataPercentage", summary.open_data_percentage)
}

pub fn time_series(points: &[TimeSeriesPoint]) -> Result<()> {
    for point in points {
        check_percentage(Endpoint::TimeSeries, &format!("openCode for {}", point.year), point.open_code)?;
        check_percentage(Endpoint::TimeSeries, &format!("openData for {}", point.year), point.open_data)?;
    }
    Ok(())
}

pub fn distribution(endpoint: Endpoint, entries: &[DistributionEntry]) -> Result<()> {
    if entries.iter().any(|e| e.name.trim().is_empty()) {
        return Err(LoadError::invalid_response(endpoint, "distribution entry has an empty name"));
    }
    Ok(())
}
