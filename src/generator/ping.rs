//! Search engine sitemap notification.
//!
//! Sends `GET <endpoint>?sitemap=<encoded url>` to every endpoint at once.
//! A failing engine is logged and recorded; it never stops the others.
//! Endpoints default to the public Google and Bing ping URLs.

use crate::log;
use std::{fmt, time::Duration};

/// Engines notified after a sitemap update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngine {
    Google,
    Bing,
}

impl SearchEngine {
    pub const ALL: [Self; 2] = [Self::Google, Self::Bing];

    pub const fn base(self) -> &'static str {
        match self {
            Self::Google => "https://www.google.com/ping",
            Self::Bing => "https://www.bing.com/ping",
        }
    }

    /// Ping URL for `sitemap_url`, percent-encoded as a query value.
    pub fn ping_url(self, sitemap_url: &str) -> String {
        Endpoint::from(self).ping_url(sitemap_url)
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Google => "google",
            Self::Bing => "bing",
        })
    }
}

/// Where one engine receives its pings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub engine: SearchEngine,
    /// Ping URL without the query string
    pub base: String,
}

impl Endpoint {
    pub fn new(engine: SearchEngine, base: impl Into<String>) -> Self {
        Self {
            engine,
            base: base.into(),
        }
    }

    pub fn ping_url(&self, sitemap_url: &str) -> String {
        format!("{}?sitemap={}", self.base, urlencoding::encode(sitemap_url))
    }
}

impl From<SearchEngine> for Endpoint {
    fn from(engine: SearchEngine) -> Self {
        Self::new(engine, engine.base())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PingError {
    /// The request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("ping returned HTTP {0}")]
    HttpStatus(u16),

    #[error("ping task aborted: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result of pinging one engine.
#[derive(Debug)]
pub struct PingOutcome {
    pub engine: SearchEngine,
    pub url: String,
    /// HTTP status on success
    pub result: Result<u16, PingError>,
}

impl PingOutcome {
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct PingReport {
    pub outcomes: Vec<PingOutcome>,
}

impl PingReport {
    /// Whether every engine accepted the ping.
    pub fn all_ok(&self) -> bool {
        self.outcomes.iter().all(PingOutcome::is_ok)
    }

    pub fn failures(&self) -> impl Iterator<Item = &PingOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }
}

/// HTTP client for sitemap pings.
pub struct Pinger {
    client: reqwest::Client,
    endpoints: Vec<Endpoint>,
}

impl Pinger {
    /// Ping every [`SearchEngine`] at its public endpoint. Each request is
    /// bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, PingError> {
        Self::with_endpoints(timeout, SearchEngine::ALL.map(Endpoint::from).to_vec())
    }

    pub fn with_endpoints(timeout: Duration, endpoints: Vec<Endpoint>) -> Result<Self, PingError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Notify every endpoint concurrently. Outcomes keep endpoint order.
    pub async fn ping_all(&self, sitemap_url: &str) -> PingReport {
        let tasks: Vec<_> = self
            .endpoints
            .iter()
            .map(|endpoint| {
                let url = endpoint.ping_url(sitemap_url);
                let handle = tokio::spawn(ping(self.client.clone(), endpoint.engine, url.clone()));
                (endpoint.engine, url, handle)
            })
            .collect();

        let mut outcomes = Vec::with_capacity(tasks.len());
        for (engine, url, handle) in tasks {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(err) => {
                    log!("warn"; "ping {engine} aborted: {err}");
                    PingOutcome {
                        engine,
                        url,
                        result: Err(err.into()),
                    }
                }
            };
            outcomes.push(outcome);
        }
        PingReport { outcomes }
    }
}

async fn get(client: &reqwest::Client, url: &str) -> Result<u16, PingError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(PingError::HttpStatus(status.as_u16()));
    }
    Ok(status.as_u16())
}

async fn ping(client: reqwest::Client, engine: SearchEngine, url: String) -> PingOutcome {
    let result = get(&client, &url).await;
    match &result {
        Ok(status) => log!("ping"; "{engine}: {status}"),
        Err(err) => log!("warn"; "ping {engine} failed: {err}"),
    }
    PingOutcome { engine, url, result }
}

/// Notify all search engines that `sitemap_url` changed.
pub async fn ping_search_engines(sitemap_url: &str, timeout: Duration) -> Result<PingReport, PingError> {
    Ok(Pinger::new(timeout)?.ping_all(sitemap_url).await)
}
