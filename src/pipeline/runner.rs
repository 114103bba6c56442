//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of stages.
//! Calling [`Pipeline::run`] executes them in order, threading artifacts
//! between stages and notifying a [`PipelineObserver`] at each boundary:
//!
//! 1. Segment the document into sentences
//! 2. Tokenize and filter each sentence
//! 3. Accumulate frequency and co-occurrence counts
//! 4. Export the ranked frequency list and node-link graph
//!
//! Every artifact is request-local, so one pipeline can serve any number of
//! concurrent callers through `&self`.

use std::sync::Arc;

use crate::error::{AnalysisError, Result};
use crate::graph::builder::CooccurrenceGraph;
use crate::graph::export::{node_link_graph, ranked_frequencies};
use crate::nlp::stopwords::StopwordSet;
use crate::nlp::tokenizer::Tokenizer;
use crate::pipeline::artifacts::TokenStream;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReportBuilder, STAGE_ACCUMULATE,
    STAGE_EXPORT, STAGE_SEGMENT, STAGE_TOKENIZE,
};
use crate::pipeline::traits::{
    Accumulator, CooccurrenceAccumulator, Segmenter, TerminalPunctuationSegmenter,
};
use crate::types::{AnalysisConfig, AnalysisReport};

/// Enter a tracing span for a pipeline stage; it closes at the end of the
/// enclosing block.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::debug_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline — statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Seg` | [`Segmenter`] | [`TerminalPunctuationSegmenter`] |
/// | `Acc` | [`Accumulator`] | [`CooccurrenceAccumulator`] |
#[derive(Debug, Clone)]
pub struct Pipeline<Seg = TerminalPunctuationSegmenter, Acc = CooccurrenceAccumulator> {
    pub segmenter: Seg,
    pub tokenizer: Tokenizer,
    pub accumulator: Acc,
    pub config: AnalysisConfig,
}

impl Pipeline {
    /// Default stages with the given stopwords and configuration
    pub fn new(stopwords: Arc<StopwordSet>, config: AnalysisConfig) -> Self {
        Pipeline {
            segmenter: TerminalPunctuationSegmenter,
            tokenizer: Tokenizer::new(stopwords),
            accumulator: CooccurrenceAccumulator,
            config,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Arc::new(StopwordSet::default()), AnalysisConfig::default())
    }
}

impl<Seg, Acc> Pipeline<Seg, Acc>
where
    Seg: Segmenter,
    Acc: Accumulator,
{
    /// Analyze a document, rejecting blank input
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        self.analyze_with(text, &mut NoopObserver)
    }

    /// Analyze a document, reporting stage boundaries to `observer`
    pub fn analyze_with(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<AnalysisReport> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyDocument);
        }
        Ok(self.run(text, observer))
    }

    /// Execute all stages. Blank text yields an empty report.
    pub fn run(&self, text: &str, observer: &mut impl PipelineObserver) -> AnalysisReport {
        let (tokens, graph) = self.accumulate_with(text, observer);

        // Stage 3: Export
        trace_stage!(STAGE_EXPORT);
        observer.on_stage_start(STAGE_EXPORT);
        let clock = StageClock::start();
        let frequency = ranked_frequencies(&graph);
        let node_links = node_link_graph(&frequency, &graph, self.config.min_edge_weight);
        let report = StageReportBuilder::new(clock.elapsed())
            .nodes(node_links.nodes.len())
            .edges(node_links.links.len())
            .build();
        observer.on_stage_end(STAGE_EXPORT, &report);

        tracing::debug!(
            sentences = tokens.num_sentences(),
            tokens = tokens.num_tokens(),
            nodes = node_links.nodes.len(),
            links = node_links.links.len(),
            "analysis complete"
        );

        AnalysisReport {
            frequency,
            graph: node_links,
        }
    }

    /// Run the stages up to accumulation and return the raw counts
    pub fn accumulate(&self, text: &str) -> CooccurrenceGraph {
        self.accumulate_with(text, &mut NoopObserver).1
    }

    fn accumulate_with(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> (TokenStream, CooccurrenceGraph) {
        // Stage 0: Segment
        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let sentences = self.segmenter.segment(text);
            let report = StageReportBuilder::new(clock.elapsed())
                .sentences(sentences.len())
                .build();
            observer.on_stage_end(STAGE_SEGMENT, &report);
            sentences
        };

        // Stage 1: Tokenize
        let tokens = {
            trace_stage!(STAGE_TOKENIZE);
            observer.on_stage_start(STAGE_TOKENIZE);
            let clock = StageClock::start();
            let tokens = TokenStream::new(
                sentences
                    .iter()
                    .map(|sentence| self.tokenizer.tokenize(sentence))
                    .collect(),
            );
            let report = StageReportBuilder::new(clock.elapsed())
                .sentences(tokens.num_sentences())
                .tokens(tokens.num_tokens())
                .build();
            observer.on_stage_end(STAGE_TOKENIZE, &report);
            observer.on_tokens(&tokens);
            tokens
        };

        // Stage 2: Accumulate
        let graph = {
            trace_stage!(STAGE_ACCUMULATE);
            observer.on_stage_start(STAGE_ACCUMULATE);
            let clock = StageClock::start();
            let graph = self.accumulator.accumulate(&tokens, &self.config);
            let report = StageReportBuilder::new(clock.elapsed())
                .nodes(graph.node_count())
                .edges(graph.edge_count())
                .build();
            observer.on_stage_end(STAGE_ACCUMULATE, &report);
            observer.on_graph(&graph);
            graph
        };

        (tokens, graph)
    }
}

// ============================================================================
// PipelineBuilder — fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// ```
/// # use transcript_graph::pipeline::runner::PipelineBuilder;
/// # use transcript_graph::pipeline::traits::SequentialAccumulator;
/// let pipeline = PipelineBuilder::new()
///     .accumulator(SequentialAccumulator)
///     .build();
/// let report = pipeline.analyze("Farm life. Farm days.").unwrap();
/// assert_eq!(report.frequency[0].word, "farm");
/// ```
pub struct PipelineBuilder<Seg = TerminalPunctuationSegmenter, Acc = CooccurrenceAccumulator> {
    segmenter: Seg,
    tokenizer: Tokenizer,
    accumulator: Acc,
    config: AnalysisConfig,
}

impl PipelineBuilder {
    /// Start building from the default stages
    pub fn new() -> Self {
        PipelineBuilder {
            segmenter: TerminalPunctuationSegmenter,
            tokenizer: Tokenizer::default(),
            accumulator: CooccurrenceAccumulator,
            config: AnalysisConfig::default(),
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Seg, Acc> PipelineBuilder<Seg, Acc> {
    /// Override the segmenter stage
    pub fn segmenter<S: Segmenter>(self, s: S) -> PipelineBuilder<S, Acc> {
        PipelineBuilder {
            segmenter: s,
            tokenizer: self.tokenizer,
            accumulator: self.accumulator,
            config: self.config,
        }
    }

    /// Override the accumulator stage
    pub fn accumulator<A: Accumulator>(self, a: A) -> PipelineBuilder<Seg, A> {
        PipelineBuilder {
            segmenter: self.segmenter,
            tokenizer: self.tokenizer,
            accumulator: a,
            config: self.config,
        }
    }

    /// Filter against a different stopword set
    pub fn stopwords(mut self, stopwords: Arc<StopwordSet>) -> Self {
        self.tokenizer = Tokenizer::new(stopwords);
        self
    }

    pub fn config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Pipeline<Seg, Acc> {
        Pipeline {
            segmenter: self.segmenter,
            tokenizer: self.tokenizer,
            accumulator: self.accumulator,
            config: self.config,
        }
    }
}
