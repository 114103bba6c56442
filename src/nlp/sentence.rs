//! Sentence segmentation
//!
//! A deliberately naive heuristic: a sentence ends at `.`, `?` or `!` when the
//! terminator is followed by whitespace. Abbreviations ("Dr. Smith"), decimal
//! numbers followed by a space and quoted punctuation all split as well.

use once_cell::sync::Lazy;
use regex::Regex;

static BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.?!]\s+").expect("valid regex"));

/// Split `text` into sentences.
///
/// The terminator stays attached to the preceding sentence and the
/// whitespace run after it is consumed. The text after the last boundary is
/// always returned as the final sentence, even when empty.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in BOUNDARY.find_iter(text) {
        // Terminators are single-byte ASCII
        let end = m.start() + 1;
        sentences.push(&text[start..end]);
        start = m.end();
    }
    sentences.push(&text[start..]);

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let sentences = split_sentences("One two. Three four? Five!  Six");
        assert_eq!(sentences, vec!["One two.", "Three four?", "Five!", "Six"]);
    }

    #[test]
    fn test_terminator_without_whitespace_does_not_split() {
        let sentences = split_sentences("Version 2.5 shipped.Then more");
        assert_eq!(sentences, vec!["Version 2.5 shipped.Then more"]);
    }

    #[test]
    fn test_abbreviation_splits() {
        let sentences = split_sentences("Dr. Smith arrived.");
        assert_eq!(sentences, vec!["Dr.", "Smith arrived."]);
    }

    #[test]
    fn test_newlines_are_separators() {
        let sentences = split_sentences("First.\n\nSecond.");
        assert_eq!(sentences, vec!["First.", "Second."]);
    }

    #[test]
    fn test_trailing_whitespace_yields_empty_tail() {
        let sentences = split_sentences("Only one. ");
        assert_eq!(sentences, vec!["Only one.", ""]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(split_sentences(""), vec![""]);
    }
}
