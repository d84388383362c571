//! HTTP glue for the stats pipeline.
//!
//! Two collaborators feed the extraction engine:
//!
//! - The UGC content endpoint, tried directly (plain, then `?draft=true`).
//!   Endpoint failures are logged and swallowed; the first sub-400 JSON
//!   response wins.
//! - The details page itself, flattened to visible text, for the heuristic
//!   fallback when no payload could be fetched.

pub mod url;

use creations_core::{AppConfig, Error};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector, node::Node};
use serde_json::Value;
use std::time::Duration;

pub use url::{CreationUrl, canonicalize, parse_creation_url};

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string.
    pub user_agent: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum response body size in bytes.
    pub max_bytes: usize,
    /// Base URL of the UGC content endpoint, without a trailing slash.
    pub api_base: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
            max_bytes: config.max_bytes,
            api_base: config.api_base.clone(),
        }
    }
}

/// HTTP client for the content endpoint and the rendered details page.
pub struct FetchClient {
    http: Client,
    config: FetchConfig,
}

impl FetchClient {
    /// Create a new fetch client with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::HttpError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetch the structured payload for a creation, if any endpoint variant
    /// answers.
    ///
    /// Returns the decoded payload and the endpoint it came from. Endpoint
    /// errors are not propagated: a missing payload just means extraction
    /// falls back to the rendered text.
    pub async fn fetch_payload(&self, creation_id: &str) -> Option<(Value, String)> {
        let endpoints = [
            format!("{}/{}", self.config.api_base, creation_id),
            format!("{}/{}?draft=true", self.config.api_base, creation_id),
        ];

        for endpoint in endpoints {
            let response = match self.http.get(&endpoint).send().await {
                Ok(response) => response,
                Err(e) => {
                    tracing::debug!(endpoint = %endpoint, error = %e, "payload endpoint unreachable");
                    continue;
                }
            };

            if response.status().as_u16() >= 400 {
                tracing::debug!(endpoint = %endpoint, status = response.status().as_u16(), "payload endpoint refused");
                continue;
            }

            match response.json::<Value>().await {
                Ok(payload) => return Some((payload, endpoint)),
                Err(e) => {
                    tracing::debug!(endpoint = %endpoint, error = %e, "payload was not valid JSON");
                    continue;
                }
            }
        }

        None
    }

    /// Fetch the details page and flatten it to visible text.
    pub async fn fetch_page_text(&self, url: &reqwest::Url) -> Result<String, Error> {
        let response = self
            .http
            .get(url.as_str())
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::FetchTimeout(e.to_string())
                } else {
                    Error::HttpError(format!("network error: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpError(format!("status {}", status.as_u16())));
        }

        if let Some(len) = response.content_length()
            && len as usize > self.config.max_bytes
        {
            return Err(Error::FetchTooLarge(format!("{} bytes exceeds {}", len, self.config.max_bytes)));
        }

        let html = response
            .text()
            .await
            .map_err(|e| Error::HttpError(format!("failed to read body: {e}")))?;

        if html.len() > self.config.max_bytes {
            return Err(Error::FetchTooLarge(format!("{} bytes exceeds {}", html.len(), self.config.max_bytes)));
        }

        Ok(visible_text(&html))
    }
}

/// Flatten an HTML document to its visible text, whitespace-joined.
///
/// Script, style and noscript contents are skipped; everything else under
/// `<body>` is kept in document order.
fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = Selector::parse("body").expect("invalid selector");

    let Some(body) = document.select(&selector).next() else {
        return String::new();
    };

    let mut parts = Vec::new();
    for node in body.descendants() {
        if let Node::Text(text) = node.value() {
            let hidden = node
                .parent()
                .and_then(ElementRef::wrap)
                .is_some_and(|el| matches!(el.value().name(), "script" | "style" | "noscript"));
            if hidden {
                continue;
            }
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        }
    }

    parts.join(" ")
}
