use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{local, remote, ConnectError, Credentials};

/// One calendar event as surfaced by an event source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEntry {
    pub description: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub time: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    LocalFile,
    Remote,
}

/// An authenticated connection to an event source. Constructing one is the
/// whole login: it either fully succeeds or fully fails.
#[derive(Debug, Clone)]
pub struct EventManager {
    username: String,
    source: SourceKind,
    events: Vec<EventEntry>,
}

impl EventManager {
    /// Attempt to log into the source named by `credentials`. Performs
    /// blocking-equivalent I/O (file read or network round trip); callers on
    /// a UI loop must run this on a worker task.
    pub async fn connect(credentials: Credentials) -> Result<Self, ConnectError> {
        tracing::debug!(user = credentials.username(), "connecting to event source");
        let result = match &credentials {
            Credentials::Local { username, path } => {
                local::load_events(path).await.map(|events| Self {
                    username: username.clone(),
                    source: SourceKind::LocalFile,
                    events,
                })
            }
            Credentials::Remote {
                service,
                username,
                password,
            } => remote::connect(service, username, password)
                .await
                .map(|events| Self {
                    username: username.clone(),
                    source: SourceKind::Remote,
                    events,
                }),
        };

        match &result {
            Ok(manager) => tracing::debug!(
                user = manager.username.as_str(),
                events = manager.events.len(),
                "event source login succeeded"
            ),
            Err(e) => tracing::debug!(error = %e, "event source login failed"),
        }

        result
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }

    pub fn events(&self) -> &[EventEntry] {
        &self.events
    }
}
