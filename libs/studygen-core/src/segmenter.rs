//! Sentence segmentation.

use crate::types::char_len;

/// Sentences shorter than this many characters are discarded.
pub const MIN_SENTENCE_LEN: usize = 20;

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split text into trimmed sentences.
///
/// Each sentence ends after a run of `.`, `!` or `?`; the run stays attached.
/// Trailing text without terminal punctuation forms a final sentence.
pub fn segment(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_terminal_run = false;

    for (idx, c) in text.char_indices() {
        if is_terminal(c) {
            in_terminal_run = true;
        } else if in_terminal_run {
            pieces.push(&text[start..idx]);
            start = idx;
            in_terminal_run = false;
        }
    }
    pieces.push(&text[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|s| char_len(s) >= MIN_SENTENCE_LEN)
        .collect()
}
