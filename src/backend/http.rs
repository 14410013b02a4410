use super::{SpeechBackend, CONVERT_PATH, VOICES_PATH};
use crate::config::FormConfig;
use crate::transport::HttpTransport;
use crate::types::{ConversionRequest, ConversionResult, Voice};
use crate::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

/// [`SpeechBackend`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    transport: HttpTransport,
}

impl HttpBackend {
    pub fn builder() -> HttpBackendBuilder {
        HttpBackendBuilder::new()
    }

    pub fn from_config(config: &FormConfig) -> Result<Self> {
        let mut builder = Self::builder().base_url(config.base_url.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url().as_str()
    }
}

#[async_trait]
impl SpeechBackend for HttpBackend {
    async fn list_voices(&self) -> Result<Vec<Voice>> {
        self.transport.get_json(VOICES_PATH).await
    }

    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult> {
        self.transport.post_json(CONVERT_PATH, request).await
    }

    async fn fetch_audio(&self, audio_url: &str) -> Result<Bytes> {
        self.transport.get_bytes(audio_url).await
    }
}

pub struct HttpBackendBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl HttpBackendBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Per-request timeout. Unset means requests may wait forever.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<HttpBackend> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::configuration("Base URL must be specified"))?;
        Ok(HttpBackend {
            transport: HttpTransport::new(&base_url, self.timeout)?,
        })
    }
}

impl Default for HttpBackendBuilder {
    fn default() -> Self {
        Self::new()
    }
}
