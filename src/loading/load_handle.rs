use super::{LOG_TARGET, MetricsLoader};
use crate::client::{ApiClient, LoadError};
use crate::metrics::ViewState;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// A metrics load running in the background.
///
/// The loader task is the only writer of the published [`ViewState`]; the handle only
/// reads it. Dropping the handle aborts the load, so a view that goes away never
/// receives a late result.
#[derive(Debug)]
pub struct LoadHandle {
    state: watch::Receiver<ViewState>,
    task: JoinHandle<()>,
}

impl LoadHandle {
    /// Start loading on the current tokio runtime.
    #[must_use]
    pub fn spawn(client: ApiClient) -> Self {
        let (sender, state) = watch::channel(ViewState::loading());
        let task = tokio::spawn(async move {
            let mut loader = MetricsLoader::new(client);
            let _ = loader.activate().await;
            let _ = sender.send_replace(loader.into_state());
        });

        Self { state, task }
    }

    /// A snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Abort the load. A load that has not settled yet ends as failed.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Wait for the load to reach its terminal state.
    ///
    /// If the load task ends without publishing a result (it was cancelled or panicked),
    /// the outcome is the generic "failed to fetch metrics" error.
    pub async fn settled(&mut self) -> ViewState {
        match self.state.wait_for(ViewState::is_settled).await {
            Ok(state) => state.clone(),
            Err(_) => {
                log::warn!(target: LOG_TARGET, "Metrics load ended without a result");
                ViewState::failed(LoadError::failed())
            }
        }
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        let base = Url::parse(&format!("{}/api", server.uri())).unwrap();
        ApiClient::new(&base, Duration::from_secs(30)).unwrap()
    }

    #[tokio::test]
    async fn test_starts_loading_then_settles() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_delay(Duration::from_millis(200)))
            .mount(&server)
            .await;

        let mut handle = LoadHandle::spawn(client_for(&server));
        assert!(handle.state().loading);

        let state = handle.settled().await;
        assert!(!state.loading);
        assert!(state.error.is_some());
        assert!(!handle.state().loading);
    }

    #[tokio::test]
    async fn test_cancel_reports_generic_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})).set_delay(Duration::from_secs(30)))
            .mount(&server)
            .await;

        let mut handle = LoadHandle::spawn(client_for(&server));
        handle.cancel();

        let state = handle.settled().await;
        assert!(!state.loading);
        assert_eq!(state.error.as_ref().map(ToString::to_string).as_deref(), Some("failed to fetch metrics"));
        assert!(state.time_series.is_empty());
    }
}
