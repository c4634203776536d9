use super::{Endpoint, LOG_TARGET, LoadError, TransportError, validation};
use crate::loading::RequestTracker;
use crate::metrics::{DistributionEntry, DistributionMap, MetricsSummary, TimeSeriesPoint};
use anyhow::Context;
use core::time::Duration;
use serde::de::DeserializeOwned;
use std::time::Instant;
use url::Url;

type Result<T> = core::result::Result<T, LoadError>;

/// Client for the metrics backend's read-only JSON API.
///
/// Every operation issues exactly one GET request. There are no retries; a failed
/// request surfaces as a [`TransportError`] and a response that does not match the
/// endpoint's shape as [`LoadError::InvalidResponse`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    tracker: Option<RequestTracker>,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url` (for example `http://localhost:8000/api`).
    pub fn new(base_url: &Url, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("creating the HTTP client")?;

        Ok(Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            http,
            tracker: None,
        })
    }

    /// Report every request issued by this client to `tracker`.
    #[must_use]
    pub fn with_tracker(mut self, tracker: RequestTracker) -> Self {
        self.tracker = Some(tracker);
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an endpoint.
    #[must_use]
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    pub async fn get_summary(&self) -> Result<MetricsSummary> {
        let summary: MetricsSummary = self.get_json(Endpoint::Summary).await?;
        validation::summary(&summary)?;
        Ok(summary)
    }

    pub async fn get_time_series(&self) -> Result<Vec<TimeSeriesPoint>> {
        let points: Vec<TimeSeriesPoint> = self.get_json(Endpoint::TimeSeries).await?;
        validation::time_series(&points)?;
        Ok(points)
    }

    /// Publication counts per affiliation country, one entry per country.
    pub async fn get_country_distribution(&self) -> Result<Vec<DistributionEntry>> {
        self.get_distribution(Endpoint::CountryDistribution).await
    }

    /// Publication counts per journal, one entry per journal.
    pub async fn get_journal_distribution(&self) -> Result<Vec<DistributionEntry>> {
        self.get_distribution(Endpoint::JournalDistribution).await
    }

    async fn get_distribution(&self, endpoint: Endpoint) -> Result<Vec<DistributionEntry>> {
        let DistributionMap(entries) = self.get_json(endpoint).await?;
        validation::distribution(endpoint, &entries)?;
        Ok(entries)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        let url = self.url(endpoint);
        log::debug!(target: LOG_TARGET, "GET {url}");

        let request = self.tracker.as_ref().map(RequestTracker::track);
        let start_time = Instant::now();
        let result = self.get_json_core(endpoint, &url).await;
        drop(request);

        match &result {
            Ok(_) => log::debug!(target: LOG_TARGET, "Fetched '{url}' in {:.3}s", start_time.elapsed().as_secs_f64()),
            Err(e) => log::warn!(target: LOG_TARGET, "Could not fetch '{url}': {e}"),
        }

        result
    }

    async fn get_json_core<T: DeserializeOwned>(&self, endpoint: Endpoint, url: &str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| TransportError::Request { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status { endpoint, status }.into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| TransportError::Request { endpoint, source })?;

        serde_json::from_slice(&body).map_err(|e| LoadError::invalid_response(endpoint, e.to_string()))
    }
}
