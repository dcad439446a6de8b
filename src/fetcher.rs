use crate::config::MensaConfig;
use crate::error::MensaError;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, Url};
use std::time::Duration;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, MensaError> {
        Self::with_config(&MensaConfig::default(), timeout)
    }

    /// Build a fetcher with the user agent and language from `config`.
    /// `timeout` overrides the configured one.
    pub fn with_config(config: &MensaConfig, timeout: Option<Duration>) -> Result<Self, MensaError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(config.timeout));

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language).map_err(|e| {
                config::ConfigError::Message(format!("invalid accept_language: {e}"))
            })?,
        );

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a page and return its decoded body.
    ///
    /// Timeouts, connection failures and non-success statuses all surface as
    /// [`MensaError::FetchError`].
    pub async fn fetch(&self, url: &str) -> Result<String, MensaError> {
        let url = normalize_url(url)?;
        debug!("Fetching URL {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;
        Ok(html)
    }
}

/// Parse a URL, percent-encoding non-ASCII characters in path and query.
pub fn normalize_url(url: &str) -> Result<Url, MensaError> {
    Url::parse(url).map_err(|e| MensaError::InvalidUrl(format!("{url}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_encodes_umlauts() {
        let url = normalize_url("https://www.stw.berlin/mensen/mensa-hu-süd.html").unwrap();
        assert_eq!(url.as_str(), "https://www.stw.berlin/mensen/mensa-hu-s%C3%BCd.html");
    }

    #[test]
    fn test_normalize_url_rejects_garbage() {
        let result = normalize_url("not a url");
        assert!(matches!(result, Err(MensaError::InvalidUrl(_))));
    }

    #[test]
    fn test_fetcher_builds_with_defaults() {
        assert!(RequestFetcher::new(Some(Duration::from_secs(1))).is_ok());
    }
}
