use super::FormView;
use crate::types::{VoiceOption, DEFAULT_FILENAME};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Target and label of the download link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub href: String,
    pub label: String,
}

#[derive(Debug)]
struct FormState {
    text: String,
    options: Vec<VoiceOption>,
    selected: Option<usize>,
    save_to_file: bool,
    filename: String,
    filename_enabled: bool,
    status: String,
    download_visible: bool,
    link: Option<DownloadLink>,
}

/// Headless [`FormView`] holding the form state in memory.
///
/// The `set_*`/`select_voice` methods stand in for user input; the getters
/// expose what a user would see.
#[derive(Debug)]
pub struct InMemoryView {
    state: RwLock<FormState>,
}

impl InMemoryView {
    pub fn new() -> Self {
        Self::with_filename(DEFAULT_FILENAME)
    }

    /// Start with `filename` in the (disabled) filename input.
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(FormState {
                text: String::new(),
                options: Vec::new(),
                selected: None,
                save_to_file: false,
                filename: filename.into(),
                filename_enabled: false,
                status: String::new(),
                download_visible: false,
                link: None,
            }),
        }
    }

    // A poisoned lock only means a panicking writer; the state itself is plain data.
    fn read(&self) -> RwLockReadGuard<'_, FormState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, FormState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.write().text = text.into();
    }

    /// Select the option whose value is `value`. Returns false (selection
    /// unchanged) when no option has that value.
    pub fn select_voice(&self, value: &str) -> bool {
        let mut state = self.write();
        match state.options.iter().position(|o| o.value == value) {
            Some(i) => {
                state.selected = Some(i);
                true
            }
            None => false,
        }
    }

    /// Flip the checkbox only; the controller's change handler applies the
    /// filename rules.
    pub fn set_save_to_file(&self, checked: bool) {
        self.write().save_to_file = checked;
    }

    pub fn status(&self) -> String {
        self.read().status.clone()
    }

    pub fn voice_options(&self) -> Vec<VoiceOption> {
        self.read().options.clone()
    }

    pub fn filename_enabled(&self) -> bool {
        self.read().filename_enabled
    }

    /// The download link, if the download section is visible.
    pub fn download(&self) -> Option<DownloadLink> {
        let state = self.read();
        if state.download_visible {
            state.link.clone()
        } else {
            None
        }
    }
}

impl Default for InMemoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView for InMemoryView {
    fn text(&self) -> String {
        self.read().text.clone()
    }

    fn selected_voice(&self) -> String {
        let state = self.read();
        // A select control with options always has one selected, the first by default.
        let idx = state.selected.unwrap_or(0);
        state
            .options
            .get(idx)
            .map(|o| o.value.clone())
            .unwrap_or_default()
    }

    fn save_to_file(&self) -> bool {
        self.read().save_to_file
    }

    fn filename(&self) -> String {
        self.read().filename.clone()
    }

    fn set_filename(&self, value: &str) {
        self.write().filename = value.to_string();
    }

    fn set_filename_enabled(&self, enabled: bool) {
        self.write().filename_enabled = enabled;
    }

    fn add_voice_option(&self, option: VoiceOption) {
        self.write().options.push(option);
    }

    fn set_status(&self, text: &str) {
        self.write().status = text.to_string();
    }

    fn show_download(&self, href: &str, label: &str) {
        let mut state = self.write();
        state.link = Some(DownloadLink {
            href: href.to_string(),
            label: label.to_string(),
        });
        state.download_visible = true;
    }

    fn hide_download(&self) {
        self.write().download_visible = false;
    }
}
