use crate::domain::ports::ReactionTransport;
use crate::utils::error::{ReactionError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// `reqwest`-backed transport rooted at the blog server's base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: Url,
    client: Client,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        validate_url("server.base_url", base_url)?;
        let base_url = Url::parse(base_url)?;

        let builder = Client::builder();
        // wasm 上的 reqwest 沒有 timeout
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url,
            client: builder.build()?,
        })
    }

    /// Absolute URL for `segments`, each one percent-encoded on its own.
    pub fn url_for(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ReactionError::ConfigError {
                message: format!("{} cannot be used as a base URL", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait(?Send)]
impl ReactionTransport for HttpTransport {
    async fn get_json(&self, segments: &[&str]) -> Result<serde_json::Value> {
        let url = self.url_for(segments)?;
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(ReactionError::StatusError {
                status: response.status().as_u16(),
                path: url.path().to_string(),
            });
        }

        Ok(response.json().await?)
    }
}
