mod distribution_entry;
mod metrics_summary;
mod time_series_point;
mod trend_metric;
mod view_state;

pub(crate) use distribution_entry::DistributionMap;
pub use distribution_entry::DistributionEntry;
#[cfg(test)]
pub use distribution_entry::entries_from_pairs;
pub use metrics_summary::MetricsSummary;
pub use time_series_point::TimeSeriesPoint;
pub use trend_metric::TrendMetric;
pub use view_state::ViewState;
