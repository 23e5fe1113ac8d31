use crate::mode::Mode;

/// Builds the instruction sent to the backend for `mode`.
///
/// Unrecognized modes return `text` as is. A missing `target_language` is
/// interpolated as an empty string; callers that care must reject it first.
pub fn build_prompt(text: &str, mode: &str, target_language: Option<&str>) -> String {
    let Ok(mode) = mode.parse::<Mode>() else {
        return text.to_string();
    };

    let instruction = match mode {
        Mode::Improve => "Improve the following text by correcting grammatical errors and \
             improving its clarity, fluency and coherence, without changing its original meaning:"
            .to_string(),
        Mode::Summarize => "Summarize the following text, keeping the key points and \
             the most important information:"
            .to_string(),
        Mode::Translate => format!(
            "Translate the following text into {}, keeping the original tone and style:",
            target_language.unwrap_or_default()
        ),
        Mode::Continue => "Continue the following text in a coherent and natural way, \
             keeping the same style and tone:"
            .to_string(),
    };

    format!("{instruction}\n\n{text}\n\n{}", mode.marker())
}

/// Drops everything up to and including the first `marker`, then trims.
/// Text without the marker is returned unchanged.
pub fn strip_marker(generated: &str, marker: &str) -> String {
    match generated.split_once(marker) {
        Some((_, rest)) => rest.trim().to_string(),
        None => generated.to_string(),
    }
}
