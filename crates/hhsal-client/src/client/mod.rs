//! HTTP client for the public vacancy search endpoint.

mod fetch_all;

use std::time::Duration;

use hhsal_core::AppConfig;
use reqwest::{Client, Url};

use crate::error::ClientError;
use crate::types::SearchPage;

const DEFAULT_BASE_URL: &str = "https://api.hh.ru/vacancies";

/// Listings requested per page.
pub const PER_PAGE: u32 = 50;

/// Upper bound on pages fetched in one run. Guards against an API that
/// reports an implausible page count.
pub const MAX_PAGES: u32 = 200;

/// Client for the vacancy search endpoint.
///
/// Holds the HTTP client, endpoint URL, and the fixed region filter. Use
/// [`HhClient::new`] for production or [`HhClient::with_base_url`] to point at
/// a mock server in tests.
pub struct HhClient {
    client: Client,
    base_url: Url,
    area: String,
}

impl HhClient {
    /// Creates a client pointed at the production search endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str, area: &str) -> Result<Self, ClientError> {
        Self::with_base_url(timeout_secs, user_agent, area, DEFAULT_BASE_URL)
    }

    /// Creates a client from the application config.
    ///
    /// # Errors
    ///
    /// Same as [`HhClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            config.request_timeout_secs,
            &config.user_agent,
            &config.area,
            &config.api_base_url,
        )
    }

    /// Creates a client with a custom endpoint URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` is not a valid absolute URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        area: &str,
        base_url: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            area: area.to_owned(),
        })
    }

    /// Fetches one page of search results.
    ///
    /// # Errors
    ///
    /// - [`ClientError::ApiStatus`] on any non-2xx status.
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::Deserialize`] if the page envelope is malformed.
    pub async fn fetch_page(&self, text: &str, page: u32) -> Result<SearchPage, ClientError> {
        let url = self.build_url(text, page);
        tracing::debug!(%url, "requesting vacancy page");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::ApiStatus {
                status: status.as_u16(),
                page,
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<SearchPage>(&body).map_err(|e| ClientError::Deserialize {
            context: format!("vacancy page {page} for \"{text}\""),
            source: e,
        })
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, text: &str, page: u32) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("text", text);
            pairs.append_pair("area", &self.area);
            pairs.append_pair("per_page", &PER_PAGE.to_string());
            pairs.append_pair("page", &page.to_string());
        }
        url
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
