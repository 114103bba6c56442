//! Intermediate artifacts passed between pipeline stages.
//!
//! The segmenter yields borrowed sentence slices, the tokenizer turns them
//! into a [`TokenStream`], and the accumulator folds that into a
//! [`CooccurrenceGraph`](crate::graph::builder::CooccurrenceGraph). All of
//! them are request-local and dropped once the report is built.

/// Tokenized sentences of one document, in document order.
///
/// Sentences that contained only stopwords or punctuation are kept as empty
/// rows so that sentence indices line up with the segmenter output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    sentences: Vec<Vec<String>>,
}

impl TokenStream {
    pub fn new(sentences: Vec<Vec<String>>) -> Self {
        Self { sentences }
    }

    /// Tokenized rows, one per sentence
    pub fn sentences(&self) -> &[Vec<String>] {
        &self.sentences
    }

    pub fn num_sentences(&self) -> usize {
        self.sentences.len()
    }

    /// Total content tokens across all sentences
    pub fn num_tokens(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }

    /// `true` when no sentence produced a token
    pub fn is_empty(&self) -> bool {
        self.sentences.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let stream = TokenStream::new(vec![
            vec!["a".to_string(), "b".to_string()],
            vec![],
            vec!["c".to_string()],
        ]);

        assert_eq!(stream.num_sentences(), 3);
        assert_eq!(stream.num_tokens(), 3);
        assert!(!stream.is_empty());
    }

    #[test]
    fn test_empty_rows_only() {
        let stream = TokenStream::new(vec![vec![], vec![]]);
        assert!(stream.is_empty());
        assert_eq!(stream.num_sentences(), 2);
    }
}
