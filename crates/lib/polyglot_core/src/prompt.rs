//! Prompt construction for the chat relay.

/// Language used when the caller does not name one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Builds the single instruction sent to the generation service.
///
/// `text` is embedded verbatim; callers validate emptiness beforehand.
pub fn build_prompt(language: &str, text: &str) -> String {
    format!("Respond to the following message in {language}: {text}")
}
