//! Candidate Tokenizer
//!
//! Splits free-form text into candidate codes.
//! Focus: one pass over the input, no regex, no allocation for delimiters.

/// Full-width comma as typed by Chinese input methods.
const FULLWIDTH_COMMA: char = '\u{FF0C}';

/// Whether `ch` separates two candidates
///
/// Besides Unicode whitespace, the ASCII file/group/record/unit separators
/// (U+001C..=U+001F) split candidates too.
fn is_delimiter(ch: char) -> bool {
    ch == ','
        || ch == FULLWIDTH_COMMA
        || ch.is_whitespace()
        || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Split `text` into candidate codes
///
/// Any run of commas, full-width commas and whitespace (newlines included)
/// acts as a single delimiter. Empty fragments are dropped and the order of
/// appearance is kept; repeated codes are not deduplicated.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_delimiter)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}
