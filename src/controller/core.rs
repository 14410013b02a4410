use super::messages;
use crate::backend::SpeechBackend;
use crate::types::{parse_voice_selection, ConversionRequest, DEFAULT_FILENAME};
use crate::view::FormView;
use crate::{Error, ErrorContext, Result};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info};

/// What a submit did, for hosts that want more than the status text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank text; nothing was sent.
    EmptyText,
    /// Backend reported success.
    Converted {
        audio_url: Option<String>,
        filename: String,
    },
    /// Backend answered with a non-success status.
    Rejected { message: Option<String> },
    /// Network failure or unparseable response.
    Failed,
}

/// Controller for the conversion form.
///
/// Constructed once per page and never torn down. Clones share the same
/// backend, view and request counter, so a host can run several submits at
/// once; they are neither ordered nor cancelled and whichever finishes last
/// owns the status and download link.
pub struct FormController<B, V> {
    backend: Arc<B>,
    view: Arc<V>,
    default_filename: Arc<str>,
    next_request: Arc<AtomicU64>,
}

impl<B, V> Clone for FormController<B, V> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            view: Arc::clone(&self.view),
            default_filename: Arc::clone(&self.default_filename),
            next_request: Arc::clone(&self.next_request),
        }
    }
}

impl<B, V> FormController<B, V>
where
    B: SpeechBackend,
    V: FormView,
{
    pub fn new(backend: Arc<B>, view: Arc<V>) -> Self {
        Self {
            backend,
            view,
            default_filename: Arc::from(DEFAULT_FILENAME),
            next_request: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Replace the `output.mp3` fallback filename.
    ///
    /// Only the reset and empty-field paths use it; a view that should start
    /// with this name must be built with it (see [`InMemoryView::with_filename`]).
    ///
    /// [`InMemoryView::with_filename`]: crate::view::InMemoryView::with_filename
    pub fn with_default_filename(mut self, filename: impl Into<String>) -> Self {
        self.default_filename = Arc::from(filename.into());
        self
    }

    pub fn view(&self) -> &Arc<V> {
        &self.view
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    /// Load the voice list into the selection control.
    ///
    /// Returns how many options were added; zero on failure, in which case the
    /// status region shows the load error.
    pub async fn initialize(&self) -> usize {
        match self.backend.list_voices().await {
            Ok(voices) => {
                for voice in &voices {
                    self.view.add_voice_option(voice.to_option());
                }
                info!(count = voices.len(), "voices loaded");
                voices.len()
            }
            Err(e) => {
                error!(error = %e, "failed to load voices");
                self.view.set_status(messages::LOADING_VOICES_FAILED);
                0
            }
        }
    }

    /// Change handler for the save-to-file checkbox.
    pub fn on_save_to_file_changed(&self) {
        let checked = self.view.save_to_file();
        self.view.set_filename_enabled(checked);
        if !checked {
            self.view.set_filename(&self.default_filename);
        }
    }

    /// Build the request from the current form state; `None` for blank text.
    pub fn read_request(&self) -> Option<ConversionRequest> {
        let text = self.view.text();
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let filename = self.view.filename();
        let filename = if filename.is_empty() {
            self.default_filename.to_string()
        } else {
            filename
        };
        Some(ConversionRequest {
            text: text.to_string(),
            voice_index: parse_voice_selection(&self.view.selected_voice()),
            save_to_file: self.view.save_to_file(),
            filename,
        })
    }

    /// Click handler for the convert action.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(request) = self.read_request() else {
            self.view.set_status(messages::TEXT_REQUIRED);
            return SubmitOutcome::EmptyText;
        };

        let seq = self.next_request.fetch_add(1, Ordering::Relaxed);
        debug!(
            seq,
            voice_index = ?request.voice_index,
            save_to_file = request.save_to_file,
            chars = request.text.chars().count(),
            "submitting conversion"
        );
        self.view.set_status(messages::CONVERTING);
        self.view.hide_download();

        match self.backend.convert(&request).await {
            Ok(result) if result.is_success() => {
                info!(seq, audio_url = ?result.audio_url, "conversion succeeded");
                self.view.set_status(messages::CONVERSION_SUCCEEDED);
                // An empty URL counts as no audio.
                let audio_url = result.audio_url.filter(|u| !u.is_empty());
                if let Some(url) = audio_url.as_deref() {
                    self.view
                        .show_download(url, &messages::download_label(&request.filename));
                }
                SubmitOutcome::Converted {
                    audio_url,
                    filename: request.filename,
                }
            }
            Ok(result) => {
                info!(seq, status = %result.status, message = ?result.message, "conversion rejected");
                self.view
                    .set_status(&messages::rejected(result.message.as_deref()));
                SubmitOutcome::Rejected {
                    message: result.message,
                }
            }
            Err(e) => {
                error!(seq, error = %e, "conversion request failed");
                self.view.set_status(messages::CONVERSION_FAILED);
                SubmitOutcome::Failed
            }
        }
    }

    /// Follow a download link: fetch `audio_url` and write it as `filename`
    /// inside `dest_dir`. Only the final path component of `filename` is used.
    pub async fn save_audio(
        &self,
        audio_url: &str,
        filename: &str,
        dest_dir: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let name = Path::new(filename)
            .file_name()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                Error::validation_with_context(
                    "download filename has no file component",
                    ErrorContext::new()
                        .with_field_path("filename")
                        .with_details(filename.to_string()),
                )
            })?;
        let bytes = self.backend.fetch_audio(audio_url).await?;
        let path = dest_dir.as_ref().join(name);
        tokio::fs::write(&path, &bytes).await?;
        info!(path = %path.display(), bytes = bytes.len(), "audio saved");
        Ok(path)
    }
}
