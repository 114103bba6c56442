//! Word tokenization with stopword removal
//!
//! Text is lowercased, every character that is neither alphanumeric nor
//! whitespace acts as a separator, and the resulting words are dropped when
//! they appear in the [`StopwordSet`]. There is no stemming and no minimum
//! length, so "couldn't" becomes `["couldn", "t"]`.

use std::sync::Arc;

use super::stopwords::StopwordSet;

/// Sentence tokenizer bound to a shared stopword set
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: Arc<StopwordSet>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Arc::new(StopwordSet::default()))
    }
}

impl Tokenizer {
    pub fn new(stopwords: Arc<StopwordSet>) -> Self {
        Self { stopwords }
    }

    /// The stopword set this tokenizer filters against
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Tokenize one sentence into its content words, in order
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        let lowered = sentence.to_lowercase();
        let mut tokens = Vec::new();
        let mut current = String::new();

        for ch in lowered.chars() {
            if ch.is_alphanumeric() {
                current.push(ch);
            } else if !current.is_empty() {
                self.push_word(&mut tokens, std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            self.push_word(&mut tokens, current);
        }

        tokens
    }

    #[inline]
    fn push_word(&self, tokens: &mut Vec<String>, word: String) {
        if !self.stopwords.contains(&word) {
            tokens.push(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::default()
    }

    #[test]
    fn test_lowercases_and_filters() {
        let tokens = tokenizer().tokenize("The Person was GOOD.");
        assert_eq!(tokens, vec!["the", "was"]);
    }

    #[test]
    fn test_punctuation_becomes_separator() {
        let tokens = tokenizer().tokenize("I couldn't re-enlist; sadly");
        assert_eq!(tokens, vec!["i", "couldn", "t", "re", "enlist", "sadly"]);
    }

    #[test]
    fn test_underscore_is_a_separator() {
        let tokens = tokenizer().tokenize("snake_case");
        assert_eq!(tokens, vec!["snake", "case"]);
    }

    #[test]
    fn test_numbers_are_kept() {
        let tokens = tokenizer().tokenize("In 1998 I was 19.");
        assert_eq!(tokens, vec!["in", "1998", "i", "was", "19"]);
    }

    #[test]
    fn test_unicode_letters() {
        let tokens = tokenizer().tokenize("Éducation à Montréal");
        assert_eq!(tokens, vec!["éducation", "à", "montréal"]);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert!(tokenizer().tokenize("").is_empty());
        assert!(tokenizer().tokenize("  ...!?  ").is_empty());
    }

    #[test]
    fn test_stopword_after_punctuation_split() {
        // "people's" splits into "people" + "s"; "people" is a stopword
        let tokens = tokenizer().tokenize("people's choice");
        assert_eq!(tokens, vec!["s", "choice"]);
    }

    #[test]
    fn test_custom_stopwords() {
        let tokenizer = Tokenizer::new(Arc::new(StopwordSet::from_list(&["the"])));
        let tokens = tokenizer.tokenize("The person");
        assert_eq!(tokens, vec!["person"]);
    }
}
