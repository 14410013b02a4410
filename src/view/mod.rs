//! 表单视图：控制器读写的 UI 表面（语音选择、文本、文件名、状态、下载链接）。
//!
//! The UI surface the controller binds to.
//!
//! | Element | Read | Write |
//! |---------|------|-------|
//! | voice selection | [`FormView::selected_voice`] | [`FormView::add_voice_option`] |
//! | text input | [`FormView::text`] | |
//! | save-to-file checkbox | [`FormView::save_to_file`] | |
//! | filename input | [`FormView::filename`] | [`FormView::set_filename`], [`FormView::set_filename_enabled`] |
//! | status region | | [`FormView::set_status`] |
//! | download section + link | | [`FormView::show_download`], [`FormView::hide_download`] |
//!
//! Methods take `&self`; implementations use interior mutability so one view
//! can be shared by overlapping submissions.

mod memory;

pub use memory::{DownloadLink, InMemoryView};

use crate::types::VoiceOption;

pub trait FormView: Send + Sync {
    /// Raw (untrimmed) contents of the text input.
    fn text(&self) -> String;

    /// Value of the selected voice option, empty when there are no options.
    fn selected_voice(&self) -> String;

    fn save_to_file(&self) -> bool;

    fn filename(&self) -> String;

    fn set_filename(&self, value: &str);

    fn set_filename_enabled(&self, enabled: bool);

    /// Append an option; display order is insertion order.
    fn add_voice_option(&self, option: VoiceOption);

    fn set_status(&self, text: &str);

    /// Reveal the download section pointing at `href`.
    fn show_download(&self, href: &str, label: &str);

    fn hide_download(&self);
}
