//! Content loader trait and implementations

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::LoadError;
use crate::Result;

/// Cache behavior for a remote pane fetch, resolved from the group's
/// `cache_ajax` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Let intermediaries and the client cache serve the response.
    Use,
    /// Ask for a fresh response on every fetch.
    Bypass,
}

/// Fetches remote pane content by URL.
#[async_trait]
pub trait ContentLoader: Send + Sync {
    async fn fetch(&self, url: &str, cache: CachePolicy) -> Result<String>;
}

/// Production loader over reqwest.
pub struct HttpLoader {
    client: reqwest::Client,
}

impl HttpLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentLoader for HttpLoader {
    async fn fetch(&self, url: &str, cache: CachePolicy) -> Result<String> {
        let mut request = self.client.get(url);
        if cache == CachePolicy::Bypass {
            request = request.header("Cache-Control", "no-cache");
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus(status.as_u16(), url.to_string()));
        }

        let body = response.text().await?;
        tracing::debug!(url = %url, bytes = body.len(), "Fetched remote pane content");
        Ok(body)
    }
}

/// Loader serving canned responses from a fixed URL map.
///
/// Headless counterpart to `HttpLoader`, used wherever tests need remote
/// panes without a network.
pub struct StaticLoader {
    responses: HashMap<String, String>,
}

impl StaticLoader {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), body.to_string());
        self
    }
}

impl Default for StaticLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentLoader for StaticLoader {
    async fn fetch(&self, url: &str, _cache: CachePolicy) -> Result<String> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| LoadError::NotConfigured(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_loader_serves_configured_url() {
        let loader = StaticLoader::new().with("https://example.com/pane", "<p>hello</p>");
        let body = loader
            .fetch("https://example.com/pane", CachePolicy::Use)
            .await
            .unwrap();
        assert_eq!(body, "<p>hello</p>");
    }

    #[tokio::test]
    async fn test_static_loader_fails_unknown_url() {
        let loader = StaticLoader::new();
        let err = loader
            .fetch("https://example.com/missing", CachePolicy::Use)
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::NotConfigured(_)));
    }
}
