use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Thin JSON-over-HTTP transport bound to one backend origin.
///
/// JSON calls parse the body whatever the HTTP status is: the backend reports
/// conversion failures inside the JSON payload, so a 4xx/5xx with a JSON body
/// is still a structurally valid response.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(base_url.to_string()),
            )
        })?;

        let mut builder = reqwest::Client::builder();
        // No timeout unless asked for: a hung request stays "Converting...".
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path or a backend-supplied (possibly relative) URL.
    pub fn resolve(&self, path_or_url: &str) -> Result<Url> {
        self.base_url
            .join(path_or_url)
            .map_err(|e| Error::Transport(TransportError::InvalidUrl(format!("{}: {}", path_or_url, e))))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.resolve(path)?;
        debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        Self::read_json(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.resolve(path)?;
        debug!(%url, "POST");
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        Self::read_json(response).await
    }

    /// Fetch a raw body; unlike the JSON calls a non-2xx status is an error here.
    pub async fn get_bytes(&self, path_or_url: &str) -> Result<Bytes> {
        let url = self.resolve(path_or_url)?;
        debug!(%url, "GET (bytes)");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        if !status.is_success() {
            return Err(Error::Remote {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(bytes)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        debug!(status = status.as_u16(), len = bytes.len(), "response received");
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Transport error: {0}")]
    Other(String),
}
