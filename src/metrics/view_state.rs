use super::{DistributionEntry, MetricsSummary, TimeSeriesPoint};
use crate::client::LoadError;
use std::sync::Arc;

/// Everything the dashboard renders, plus the status of the load that produced it.
///
/// A view state starts out as [`ViewState::loading`] and is replaced exactly once, by either
/// [`ViewState::loaded`] or [`ViewState::failed`]. A zero record count says nothing about
/// whether data has arrived; only `loading` does.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub loading: bool,
    pub error: Option<Arc<LoadError>>,
    pub summary: MetricsSummary,
    pub time_series: Vec<TimeSeriesPoint>,
    pub country_distribution: Vec<DistributionEntry>,
    pub journal_distribution: Vec<DistributionEntry>,
}

impl ViewState {
    /// The placeholder state shown before any data has arrived.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            loading: true,
            error: None,
            summary: MetricsSummary::default(),
            time_series: Vec::new(),
            country_distribution: Vec::new(),
            journal_distribution: Vec::new(),
        }
    }

    /// The terminal state of a load where every request succeeded.
    #[must_use]
    pub const fn loaded(
        summary: MetricsSummary,
        time_series: Vec<TimeSeriesPoint>,
        country_distribution: Vec<DistributionEntry>,
        journal_distribution: Vec<DistributionEntry>,
    ) -> Self {
        Self {
            loading: false,
            error: None,
            summary,
            time_series,
            country_distribution,
            journal_distribution,
        }
    }

    /// The terminal state of a failed load. Data stays at the placeholder defaults.
    #[must_use]
    pub fn failed(error: LoadError) -> Self {
        Self {
            loading: false,
            error: Some(Arc::new(error)),
            ..Self::loading()
        }
    }

    /// Whether this state is terminal.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !self.loading
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_state_defaults() {
        let state = ViewState::loading();
        assert!(state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.summary, MetricsSummary::default());
        assert!(state.time_series.is_empty());
        assert!(state.country_distribution.is_empty());
        assert!(state.journal_distribution.is_empty());
        assert!(!state.is_settled());
    }

    #[test]
    fn test_failed_state_keeps_defaults() {
        let state = ViewState::failed(LoadError::failed());
        assert!(!state.loading);
        assert!(state.is_settled());
        assert_eq!(state.error.as_ref().map(ToString::to_string).as_deref(), Some("failed to fetch metrics"));
        assert_eq!(state.summary, MetricsSummary::default());
        assert!(state.time_series.is_empty());
        assert!(state.country_distribution.is_empty());
        assert!(state.journal_distribution.is_empty());
    }

    #[test]
    fn test_loaded_state_populated() {
        let summary = MetricsSummary {
            total_records: 3,
            ..MetricsSummary::default()
        };
        let state = ViewState::loaded(
            summary.clone(),
            vec![TimeSeriesPoint::new(2020, 1.0, 2.0)],
            vec![DistributionEntry::new("USA", 2)],
            vec![DistributionEntry::new("Nature", 1)],
        );
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.summary, summary);
        assert_eq!(state.time_series.len(), 1);
        assert_eq!(state.country_distribution, vec![DistributionEntry::new("USA", 2)]);
        assert_eq!(state.journal_distribution, vec![DistributionEntry::new("Nature", 1)]);
    }
}
