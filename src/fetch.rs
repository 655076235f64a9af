//! Initial state retrieval.
//!
//! The fetch runs once, off the frame loop. Any failure is reported as a
//! `FetchError` and the caller keeps its current (default) state.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, warn};
use thiserror::Error;

use crate::app::AppEvent;
use crate::state::TreeState;

pub const DEFAULT_STATE_URL: &str = "http://localhost:8001/api/state";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),
    #[error("malformed state payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Somewhere a complete `TreeState` can be loaded from
pub trait StateSource: Send {
    fn fetch(&self) -> Result<TreeState, FetchError>;

    /// Short label for log lines
    fn describe(&self) -> String {
        "state source".to_string()
    }
}

/// GET a JSON `TreeState` from an HTTP endpoint
pub struct HttpStateSource {
    url: String,
    agent: ureq::Agent,
}

impl HttpStateSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();

        Self {
            url: url.into(),
            agent: config.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl StateSource for HttpStateSource {
    fn fetch(&self) -> Result<TreeState, FetchError> {
        let mut response = self.agent.get(&self.url).call()?;
        let body = response.body_mut().read_to_string()?;
        debug!("State payload from {}: {}", self.url, body);
        Ok(TreeState::from_json(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Runs the fetch on a background thread and reports the outcome as an event.
/// A closed receiver means the app already shut down, so the send error is dropped.
pub fn spawn_fetch(source: Box<dyn StateSource>, events: Sender<AppEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        let result = source.fetch();
        if let Err(e) = &result {
            warn!("Failed to fetch initial state from {}: {}", source.describe(), e);
        }
        let _ = events.send(AppEvent::StateFetched(result));
    })
}
