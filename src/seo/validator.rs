//! Title and description validation.
//!
//! Nothing here rejects input: out-of-range text is coerced to a usable
//! value and the problems come back as advisory warnings.

use crate::seo::SeoLimits;
use serde::Serialize;

/// Appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Result of validating one text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    /// Trimmed, possibly truncated value
    pub value: String,

    /// True when no warning was raised
    pub is_valid: bool,

    pub warnings: Vec<String>,
}

/// Truncate `text` to at most `max_length` characters, ellipsis included.
///
/// Prefers to cut at the last space before the truncation point, but only
/// when that space lies past 70% of it; otherwise cuts mid-word. When
/// `max_length` leaves no room for the ellipsis, the text is hard-cut
/// without one.
///
/// # Arguments
/// * `text` - Text to shorten
/// * `max_length` - Maximum length of the result, in characters
/// * `ellipsis` - Marker appended to shortened text
///
/// # Returns
/// `text` unchanged if it fits, otherwise a string of at most `max_length`
/// characters.
pub fn truncate_text(text: &str, max_length: usize, ellipsis: &str) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let ellipsis_length = ellipsis.chars().count();
    if ellipsis_length >= max_length {
        return text.chars().take(max_length).collect();
    }

    let truncate_at = max_length - ellipsis_length;
    let cut = text
        .char_indices()
        .nth(truncate_at)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let truncated = &text[..cut];

    if let Some(space) = truncated.rfind(' ') {
        let space_chars = truncated[..space].chars().count();
        if space_chars as f64 > truncate_at as f64 * 0.7 {
            return format!("{}{}", &truncated[..space], ellipsis);
        }
    }

    format!("{}{}", truncated, ellipsis)
}

/// Shared algorithm for titles and descriptions.
fn validate_length(label: &str, text: &str, min: usize, max: usize) -> FieldValidation {
    let mut warnings = Vec::new();
    let mut value = text.trim().to_string();
    let length = value.chars().count();

    if length < min {
        warnings.push(format!(
            "{} is too short ({}/{} chars minimum)",
            label, length, min
        ));
    }

    if length > max {
        warnings.push(format!("{} truncated from {} to {} chars", label, length, max));
        value = truncate_text(&value, max, ELLIPSIS);
    }

    FieldValidation {
        value,
        is_valid: warnings.is_empty(),
        warnings,
    }
}

impl SeoLimits {
    /// Validate a meta title against these limits.
    pub fn validate_title(&self, title: &str) -> FieldValidation {
        validate_length("Title", title, self.title_min, self.title_max)
    }

    /// Validate a meta description against these limits.
    pub fn validate_description(&self, description: &str) -> FieldValidation {
        validate_length(
            "Description",
            description,
            self.description_min,
            self.description_max,
        )
    }
}

/// Validate a meta title with the default limits (30–60 chars).
pub fn validate_title(title: &str) -> FieldValidation {
    SeoLimits::default().validate_title(title)
}

/// Validate a meta description with the default limits (70–160 chars).
pub fn validate_description(description: &str) -> FieldValidation {
    SeoLimits::default().validate_description(description)
}
