//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations are
//! statically dispatched; the defaults reproduce the standard behavior.

use crate::graph::builder::{build_cooccurrence_parallel, CooccurrenceGraph};
use crate::nlp::sentence::split_sentences;
use crate::pipeline::artifacts::TokenStream;
use crate::types::AnalysisConfig;

// ============================================================================
// Segmenter — document to sentences (stage 0)
// ============================================================================

/// Splits a document into sentences.
///
/// # Contract
///
/// - Returned slices borrow from `text` and appear in document order.
/// - Co-occurrence never crosses a returned boundary.
pub trait Segmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Splits after `.`, `?` or `!` followed by whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPunctuationSegmenter;

impl Segmenter for TerminalPunctuationSegmenter {
    #[inline]
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_sentences(text)
    }
}

// ============================================================================
// Accumulator — token stream to frequency/co-occurrence counts (stage 2)
// ============================================================================

/// Folds tokenized sentences into frequency and co-occurrence counts.
///
/// # Contract
///
/// - Every token occurrence adds one to its frequency.
/// - Every position pair `i < j` in a sentence adds one to the pair's count
///   in both directions.
/// - Every token seen gets a node, even without partners.
pub trait Accumulator {
    fn accumulate(&self, tokens: &TokenStream, cfg: &AnalysisConfig) -> CooccurrenceGraph;
}

/// Default accumulator: sequential for short documents, rayon above
/// [`AnalysisConfig::parallel_sentence_threshold`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CooccurrenceAccumulator;

impl Accumulator for CooccurrenceAccumulator {
    fn accumulate(&self, tokens: &TokenStream, cfg: &AnalysisConfig) -> CooccurrenceGraph {
        build_cooccurrence_parallel(tokens.sentences(), cfg.parallel_sentence_threshold)
    }
}

/// Always accumulates on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialAccumulator;

impl Accumulator for SequentialAccumulator {
    fn accumulate(&self, tokens: &TokenStream, _cfg: &AnalysisConfig) -> CooccurrenceGraph {
        CooccurrenceGraph::from_sentences(tokens.sentences())
    }
}
