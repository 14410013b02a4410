//! Fixed status-region texts.

pub const LOADING_VOICES_FAILED: &str = "Error loading voices.";
pub const TEXT_REQUIRED: &str = "Please enter some text.";
pub const CONVERTING: &str = "Converting...";
pub const CONVERSION_SUCCEEDED: &str = "Conversion successful!";
pub const CONVERSION_FAILED: &str = "Error during conversion.";

/// Stands in for a rejection that carried no `message`.
pub const UNKNOWN_REJECTION: &str = "unknown error";

/// Status text for a conversion the backend rejected.
pub fn rejected(message: Option<&str>) -> String {
    format!("Error: {}", message.unwrap_or(UNKNOWN_REJECTION))
}

/// Label of the download link.
pub fn download_label(filename: &str) -> String {
    format!("Download {}", filename)
}
