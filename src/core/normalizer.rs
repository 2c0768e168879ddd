//! Transcript cleanup: whitespace, capitalization and terminal punctuation

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters accepted as sentence terminators
const TERMINAL_PUNCTUATION: [char; 3] = ['.', '?', '!'];

/// Clean raw speech-to-text output into a single readable sentence.
///
/// Trims, collapses whitespace runs to one space, uppercases the first
/// character and appends a period unless the text already ends in `.`, `?`
/// or `!`. Blank input yields an empty string.
pub fn clean_and_improve(text: &str) -> String {
    let collapsed = collapse_whitespace(text.trim_matches(is_separator));

    let mut chars = collapsed.chars();
    let Some(first) = chars.next() else {
        return collapsed;
    };

    let mut improved = if first.is_uppercase() {
        collapsed.clone()
    } else {
        first.to_uppercase().chain(chars).collect()
    };

    if !improved.ends_with(TERMINAL_PUNCTUATION) {
        improved.push('.');
    }

    improved
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn collapse_whitespace(input: &str) -> String {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\x1c-\x1f]+").unwrap());
    RE.replace_all(input, " ").into_owned()
}
