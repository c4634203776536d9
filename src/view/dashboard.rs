use super::{TOP_N, YearRange, filter_years, top_n};
use crate::metrics::{DistributionEntry, MetricsSummary, TimeSeriesPoint, TrendMetric, ViewState};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What the dashboard shows for a loaded [`ViewState`] under the current selections.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(flatten)]
    pub range: YearRange,
    pub metric: TrendMetric,
    pub summary: MetricsSummary,

    /// The time series narrowed to `range`.
    pub time_series: Vec<TimeSeriesPoint>,

    pub top_countries: Vec<DistributionEntry>,
    pub top_journals: Vec<DistributionEntry>,
    pub generated_at: DateTime<Utc>,
}

impl Dashboard {
    #[must_use]
    pub fn new(state: &ViewState, range: YearRange, metric: TrendMetric, generated_at: DateTime<Utc>) -> Self {
        Self {
            range,
            metric,
            summary: state.summary.clone(),
            time_series: filter_years(&state.time_series, range.from_year, range.to_year),
            top_countries: top_n(&state.country_distribution, TOP_N),
            top_journals: top_n(&state.journal_distribution, TOP_N),
            generated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::entries_from_pairs;

    fn state() -> ViewState {
        let countries: Vec<_> = (1..=12_u64).map(|i| DistributionEntry::new(format!("country-{i}"), i)).collect();
        ViewState::loaded(
            MetricsSummary {
                total_records: 78,
                ..MetricsSummary::default()
            },
            vec![
                TimeSeriesPoint::new(2019, 1.0, 2.0),
                TimeSeriesPoint::new(2020, 3.0, 4.0),
                TimeSeriesPoint::new(2021, 5.0, 6.0),
            ],
            countries,
            entries_from_pairs([("Nature", 4), ("Science", 9)]),
        )
    }

    #[test]
    fn test_applies_filter_and_top_n() {
        let dashboard = Dashboard::new(&state(), YearRange::new(2020, 2030), TrendMetric::OpenData, Utc::now());

        assert_eq!(dashboard.summary.total_records, 78);
        let years: Vec<_> = dashboard.time_series.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2020, 2021]);
        assert_eq!(dashboard.top_countries.len(), TOP_N);
        assert_eq!(dashboard.top_countries[0], DistributionEntry::new("country-12", 12));
        assert_eq!(
            dashboard.top_journals,
            vec![DistributionEntry::new("Science", 9), DistributionEntry::new("Nature", 4)]
        );
    }

    #[test]
    fn test_serializes_flat_camel_case() {
        let dashboard = Dashboard::new(&state(), YearRange::new(2021, 2021), TrendMetric::OpenCode, Utc::now());
        let value = serde_json::to_value(&dashboard).unwrap();

        assert_eq!(value["fromYear"], 2021);
        assert_eq!(value["toYear"], 2021);
        assert_eq!(value["metric"], "open_code");
        assert_eq!(value["summary"]["totalRecords"], 78);
        assert_eq!(value["timeSeries"][0]["openData"], 6.0);
        assert_eq!(value["topJournals"][0]["name"], "Science");
        assert!(value["generatedAt"].is_string());
    }
}
