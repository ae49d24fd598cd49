//! Display client
//!
//! Fetches the server time once and keeps it for rendering. There is no
//! polling and no retry: a failed fetch leaves the previous value in place.

use std::fmt;

use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper::Uri;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::ClockError;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080/db";

/// The only field the client reads from each row. Kept as the raw string
/// the server sent.
#[derive(Debug, Deserialize)]
struct DisplayRow {
    now: String,
}

pub struct DisplayClient {
    client: Client<HttpConnector, Empty<Bytes>>,
    url: Uri,
}

impl DisplayClient {
    pub fn new(url: &str) -> Result<Self, ClockError> {
        let uri: Uri = url
            .parse()
            .map_err(|_| ClockError::InvalidUrl(url.to_string()))?;

        // HttpConnector refuses anything but plain http
        if uri.scheme_str() != Some("http") || uri.host().is_none() {
            return Err(ClockError::InvalidUrl(url.to_string()));
        }

        Ok(Self {
            client: Client::builder(TokioExecutor::new()).build_http(),
            url: uri,
        })
    }

    pub fn url(&self) -> &Uri {
        &self.url
    }

    /// Issue one GET and return `response[0].now`.
    pub async fn fetch_now(&self) -> Result<String, ClockError> {
        let response = self.client.get(self.url.clone()).await?;
        let status = response.status();
        let body = response.into_body().collect().await?.to_bytes();

        if !status.is_success() {
            return Err(ClockError::UnexpectedStatus(status.as_u16()));
        }

        let rows: Vec<DisplayRow> = serde_json::from_slice(&body)?;
        rows.into_iter()
            .next()
            .map(|row| row.now)
            .ok_or(ClockError::EmptyResponse)
    }
}

/// What the client shows: `now: <value>`, empty until a fetch succeeds.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NowDisplay {
    now: Option<String>,
}

impl NowDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Option<&str> {
        self.now.as_deref()
    }

    /// Fetch once. Failures are logged and leave the current value unchanged.
    pub async fn load(&mut self, client: &DisplayClient) {
        match client.fetch_now().await {
            Ok(now) => {
                info!("Fetched server time from {}", client.url());
                self.now = Some(now);
            }
            Err(e) => {
                warn!(error = ?e, "Failed to fetch server time from {}", client.url());
            }
        }
    }
}

impl fmt::Display for NowDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "now: {}", self.now().unwrap_or(""))
    }
}
