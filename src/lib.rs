//! # tts-form
//!
//! 文字转语音表单控制器：加载语音列表、提交转换请求、展示结果或下载链接。
//!
//! Headless controller for a text-to-speech conversion form.
//!
//! ## Overview
//!
//! A user picks a voice, types some text, optionally asks for a saved audio
//! file, and submits. The controller talks to a backend that exposes two
//! endpoints:
//!
//! - `GET /get_voices` returning `[{ "index", "name", "gender" }]`
//! - `POST /convert` taking `{ "text", "voice_index", "save_to_file", "filename" }`
//!   and answering `{ "status", "message"?, "audio_url"? }`
//!
//! and renders the outcome into a [`FormView`]: a status line and, on success,
//! a download link.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tts_form::{FormConfig, FormController, HttpBackend, InMemoryView};
//!
//! #[tokio::main]
//! async fn main() -> tts_form::Result<()> {
//!     let config = FormConfig::from_env()?;
//!     let backend = Arc::new(HttpBackend::from_config(&config)?);
//!     let view = Arc::new(InMemoryView::new());
//!     let controller = FormController::new(backend, Arc::clone(&view));
//!
//!     controller.initialize().await;
//!     view.set_text("Hello there");
//!     controller.submit().await;
//!     println!("{}", view.status());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Voice and conversion payloads |
//! | [`view`] | The UI surface trait and an in-memory implementation |
//! | [`backend`] | Backend trait and its HTTP implementation |
//! | [`controller`] | The form controller |
//! | [`transport`] | JSON-over-HTTP transport |
//! | [`config`] | Environment / YAML configuration |

pub mod backend;
pub mod config;
pub mod controller;
pub mod transport;
pub mod types;
pub mod view;

pub use backend::{HttpBackend, HttpBackendBuilder, SpeechBackend};
pub use config::FormConfig;
pub use controller::{FormController, SubmitOutcome};
pub use types::{ConversionRequest, ConversionResult, Voice, VoiceOption, DEFAULT_FILENAME};
pub use view::{DownloadLink, FormView, InMemoryView};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
