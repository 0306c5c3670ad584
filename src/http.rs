//! HTTP collaborator boundary.
//!
//! The parsing core never talks to the network directly; a
//! [`HttpConnector`] supplied by the application hands it one
//! [`HttpFetch`] session per top-level operation. The production
//! session is a thin `reqwest` client with a cookie store — the CEP
//! service ties the lookup POST to session state set by the warm-up
//! GET, so the requests of one operation share one jar, and separate
//! operations get separate jars.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config;

/// Hands out one [`HttpFetch`] session per top-level operation. A
/// session is a private cookie context; nothing set during one
/// operation is visible to the next.
pub trait HttpConnector: Send + Sync {
    fn session(&self) -> anyhow::Result<Box<dyn HttpFetch>>;
}

#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// GET with optional query parameters.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> anyhow::Result<Vec<u8>>;

    /// POST with a form-encoded body.
    async fn post_form(&self, path: &str, form: &[(&str, String)]) -> anyhow::Result<Vec<u8>>;

    /// GET carrying a form-encoded *body*. Unusual, but the CEP download
    /// endpoint expects exactly that; the method and encoding are
    /// preserved as observed on the wire.
    async fn get_with_form_body(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> anyhow::Result<Vec<u8>>;
}

/// Production connector. Holds only the timeout; the client (and so the
/// cookie jar) is built fresh in every [`HttpConnector::session`] call.
pub struct ReqwestConnector {
    timeout: Duration,
}

impl ReqwestConnector {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(config::DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ReqwestConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpConnector for ReqwestConnector {
    fn session(&self) -> anyhow::Result<Box<dyn HttpFetch>> {
        Ok(Box::new(ReqwestFetcher::with_timeout(self.timeout)?))
    }
}

/// One session against the service: one client, one cookie jar. The
/// warm-up GET and the submit that follows it must go through the same
/// instance.
pub struct ReqwestFetcher {
    client: Client,
    base_url: String,
}

impl ReqwestFetcher {
    pub fn with_timeout(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(config::USER_AGENT)
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config::BASE_URL.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> anyhow::Result<Vec<u8>> {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn post_form(&self, path: &str, form: &[(&str, String)]) -> anyhow::Result<Vec<u8>> {
        let response = self
            .client
            .post(self.url(path))
            .form(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn get_with_form_body(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> anyhow::Result<Vec<u8>> {
        let response = self
            .client
            .get(self.url(path))
            .form(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
