use super::LOG_TARGET;
use crate::client::ApiClient;
use crate::metrics::ViewState;
use std::time::Instant;

/// Drives the dashboard's four backend reads and owns the resulting [`ViewState`].
///
/// The loader is activated at most once. Activation issues every read concurrently and
/// waits until all of them succeed or the first one fails; the state then moves from
/// loading to its terminal value in a single assignment and is never touched again.
#[derive(Debug)]
pub struct MetricsLoader {
    client: ApiClient,
    state: ViewState,
    activated: bool,
}

impl MetricsLoader {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: ViewState::loading(),
            activated: false,
        }
    }

    /// The current state: loading until [`Self::activate`] completes, terminal afterwards.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> ViewState {
        self.state
    }

    /// Load the metrics, unless this loader has already been activated.
    pub async fn activate(&mut self) -> &ViewState {
        if self.activated {
            log::debug!(target: LOG_TARGET, "Metrics already requested, not fetching again");
            return &self.state;
        }

        self.activated = true;
        self.state = ViewState::loading();
        self.state = load(&self.client).await;
        &self.state
    }
}

/// Fetch all four resources concurrently and fold the outcome into a terminal state.
///
/// The first failing read ends the load; the reads still in flight are dropped and none
/// of the data already received is kept.
pub async fn load(client: &ApiClient) -> ViewState {
    log::info!(target: LOG_TARGET, "Loading metrics from '{}'", client.base_url());
    let start_time = Instant::now();

    let result = tokio::try_join!(
        client.get_summary(),
        client.get_time_series(),
        client.get_country_distribution(),
        client.get_journal_distribution(),
    );

    match result {
        Ok((summary, time_series, countries, journals)) => {
            log::info!(
                target: LOG_TARGET,
                "Loaded {} record(s), {} year(s), {} country(ies) and {} journal(s) in {:.3}s",
                summary.total_records,
                time_series.len(),
                countries.len(),
                journals.len(),
                start_time.elapsed().as_secs_f64()
            );
            ViewState::loaded(summary, time_series, countries, journals)
        }
        Err(e) => {
            log::error!(target: LOG_TARGET, "Loading metrics failed: {e}");
            ViewState::failed(e)
        }
    }
}
