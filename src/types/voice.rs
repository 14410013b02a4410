//! Voice listing types.

use serde::{Deserialize, Serialize};

/// A voice offered by the backend's `/get_voices` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Backend-assigned, unique per listing. Signed so one odd entry cannot
    /// spoil the whole listing; negative values select no voice.
    pub index: i64,
    pub name: String,
    pub gender: String,
}

impl Voice {
    pub fn new(index: i64, name: impl Into<String>, gender: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            gender: gender.into(),
        }
    }

    /// Display label, e.g. `"Zira (Female)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.gender)
    }

    /// The selection option this voice renders as.
    pub fn to_option(&self) -> VoiceOption {
        VoiceOption {
            value: self.index.to_string(),
            label: self.label(),
        }
    }
}

/// One entry of the voice selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceOption {
    pub value: String,
    pub label: String,
}

/// Parse a raw selection value the way a lenient integer parse would:
/// leading whitespace, optional sign, then as many decimal digits as present.
///
/// Anything negative, empty or without leading digits maps to `None`, which is
/// sent to the backend as an absent voice.
pub fn parse_voice_selection(raw: &str) -> Option<u64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }
    if negative {
        // "-0" parses to zero, which is still a valid selection.
        return if digits.bytes().all(|b| b == b'0') {
            Some(0)
        } else {
            None
        };
    }
    digits.parse::<u64>().ok()
}
