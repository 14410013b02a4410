//! Conversion request/result payloads for the `/convert` endpoint.

use serde::{Deserialize, Serialize};

/// Filename used when the user leaves the field empty or turns saving off.
pub const DEFAULT_FILENAME: &str = "output.mp3";

/// Status value the backend uses for a successful conversion.
pub const STATUS_SUCCESS: &str = "success";

/// Body of `POST /convert`.
///
/// `voice_index` always serializes, as `null` when no valid voice was picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub text: String,
    pub voice_index: Option<u64>,
    pub save_to_file: bool,
    pub filename: String,
}

impl ConversionRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_index: None,
            save_to_file: false,
            filename: DEFAULT_FILENAME.to_string(),
        }
    }

    pub fn voice_index(mut self, index: Option<u64>) -> Self {
        self.voice_index = index;
        self
    }

    pub fn save_to_file(mut self, save: bool) -> Self {
        self.save_to_file = save;
        self
    }

    /// Set the filename; an empty value falls back to [`DEFAULT_FILENAME`].
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        let filename = filename.into();
        self.filename = if filename.is_empty() {
            DEFAULT_FILENAME.to_string()
        } else {
            filename
        };
        self
    }
}

/// Response of `POST /convert`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}
