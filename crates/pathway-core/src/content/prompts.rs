//! Prompt templates and output cleanup.

use crate::models::FormData;

/// Prompt for the character story tied to the user's addiction and struggles.
pub fn story(form: &FormData) -> String {
    format!(
        "Create a compelling and deep story (300 words) about a fictional character overcoming {} addiction and {}.",
        form.addictions, form.struggles
    )
}

/// Prompt for background on how the addiction forms and how to combat it.
pub fn info(form: &FormData) -> String {
    format!(
        "Provide information about how {} addiction forms, how it grows, and general solutions to combat it.",
        form.addictions
    )
}

/// Prompt for a short affirmation.
pub fn affirmation(addictions: &str) -> String {
    format!(
        "Create a confidence-boosting affirmation related to overcoming {addictions} addiction."
    )
}

/// Strips generated text down to ASCII word characters, whitespace, and
/// `. , ! ?`, then trims it.
///
/// ```rust
/// use pathway_core::content::clean_text;
///
/// assert_eq!(clean_text("  **You can** do it! #1 ✨ "), "You can do it! 1");
/// ```
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| {
            c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace() || ".,!?".contains(*c)
        })
        .collect::<String>()
        .trim()
        .to_string()
}
