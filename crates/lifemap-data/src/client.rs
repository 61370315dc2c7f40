//! HTTP client for the remote document store.
//!
//! The store speaks plain JSON over HTTP: one endpoint mints anonymous
//! sessions, one lists the documents of a collection. Every fetch is a
//! full replacement of the event list -- there is no incremental sync and
//! no retry policy here; backoff belongs to the refresh loop that calls
//! this client.

use std::time::Duration;

use chrono::{DateTime, Utc};
use lifemap_types::LifeEvent;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::decode::decode_documents;
use crate::error::DataError;
use crate::session::StoreSession;

/// Connection settings for the document store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the store, without a trailing slash
    /// (e.g. `https://store.example.com`).
    pub base_url: String,
    /// Collection holding the life event documents.
    pub collection: String,
    /// Optional project API key sent on every request.
    pub api_key: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// One complete event-list delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDelivery {
    /// The decoded events, in document order.
    pub events: Vec<LifeEvent>,
    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
    /// Number of documents skipped as undecodable.
    pub skipped: usize,
}

/// Response body of the document listing endpoint.
#[derive(Debug, Deserialize)]
struct DocumentsResponse {
    #[serde(default)]
    documents: Vec<Value>,
}

/// Client for the document store.
pub struct StoreClient {
    client: reqwest::Client,
    config: StoreConfig,
}

impl StoreClient {
    /// Build a client from connection settings.
    pub fn new(config: StoreConfig) -> Result<Self, DataError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Mint an anonymous session.
    ///
    /// One bootstrap per client is enough; re-authentication on expiry is
    /// the caller's choice, never hidden here.
    pub async fn sign_in_anonymously(&self) -> Result<StoreSession, DataError> {
        let url = format!("{}/v1/sessions:anonymous", self.config.base_url);

        let mut request = self.client.post(&url);
        if let Some(key) = &self.config.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unable to read error body"));
            return Err(DataError::Status { status, body });
        }

        let session: StoreSession = response.json().await?;
        if !session.is_usable() {
            return Err(DataError::Session(String::from(
                "store returned an empty session token",
            )));
        }

        info!(session_id = %session.session_id, "anonymous session established");
        Ok(session)
    }

    /// Fetch the full event list.
    ///
    /// Undecodable documents are skipped with a warning (counted in the
    /// delivery), so one bad document never hides the rest.
    pub async fn fetch_events(&self, session: &StoreSession) -> Result<EventDelivery, DataError> {
        let url = self.documents_url();

        let mut request = self.client.get(&url).bearer_auth(&session.token);
        if let Some(key) = &self.config.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unable to read error body"));
            return Err(DataError::Status { status, body });
        }

        let body: DocumentsResponse = response.json().await?;
        let (events, skipped) = decode_documents(body.documents);

        debug!(
            events = events.len(),
            skipped, "event list fetched from store"
        );

        Ok(EventDelivery {
            events,
            fetched_at: Utc::now(),
            skipped,
        })
    }

    /// URL of the document listing endpoint.
    fn documents_url(&self) -> String {
        format!(
            "{}/v1/collections/{}/documents",
            self.config.base_url, self.config.collection
        )
    }
}
