//! 核心类型：语音列表与转换请求/响应。
//!
//! Core data types exchanged with the speech backend.

pub mod conversion;
pub mod voice;

pub use conversion::{ConversionRequest, ConversionResult, DEFAULT_FILENAME, STATUS_SUCCESS};
pub use voice::{parse_voice_selection, Voice, VoiceOption};
