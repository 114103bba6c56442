//! # transcript-graph
//!
//! Lexical analysis of interview transcripts: word frequencies and a
//! sentence-bounded co-occurrence graph, plus a small HTTP service that holds
//! one active transcript and analyzes it on demand.
//!
//! ## Quick start
//!
//! ```
//! use transcript_graph::analyze_text;
//!
//! let report = analyze_text("The person was good. The person was good.").unwrap();
//! assert_eq!(report.frequency.len(), 2);
//! assert_eq!(report.graph.links[0].value, 2);
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod nlp;
pub mod pipeline;
pub mod server;
pub mod store;
pub mod types;

pub use error::{AnalysisError, Result};
pub use nlp::stopwords::StopwordSet;
pub use pipeline::runner::{Pipeline, PipelineBuilder};
pub use store::DocumentStore;
pub use types::{AnalysisConfig, AnalysisReport, FrequencyEntry, GraphLink, GraphNode, NodeLinkGraph};

/// Analyze `text` with the curated stopwords and default configuration
pub fn analyze_text(text: &str) -> Result<AnalysisReport> {
    Pipeline::default().analyze(text)
}
