//! 语音后端：列出可用语音、提交转换、下载音频。
//!
//! Speech backend seam.
//!
//! The controller only ever talks to a [`SpeechBackend`]; [`HttpBackend`] is
//! the implementation for the web service exposing `/get_voices` and
//! `/convert`.

mod http;

pub use http::{HttpBackend, HttpBackendBuilder};

use crate::types::{ConversionRequest, ConversionResult, Voice};
use crate::Result;
use async_trait::async_trait;
use bytes::Bytes;

pub const VOICES_PATH: &str = "/get_voices";
pub const CONVERT_PATH: &str = "/convert";

#[async_trait]
pub trait SpeechBackend: Send + Sync {
    /// Voices in the order the backend lists them.
    async fn list_voices(&self) -> Result<Vec<Voice>>;

    /// Submit one conversion. A non-success status is an `Ok` result, not an error.
    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult>;

    /// Fetch the audio behind an `audio_url` returned by [`SpeechBackend::convert`].
    async fn fetch_audio(&self, audio_url: &str) -> Result<Bytes>;
}
