//! Core types shared across the analysis pipeline
//!
//! Everything in here is a plain value: configuration going in, and the
//! serializable report coming out.

use serde::{Deserialize, Serialize};

/// Default minimum co-occurrence count for a pair to become a graph link
pub const DEFAULT_MIN_EDGE_WEIGHT: u64 = 2;

/// Default number of sentences above which accumulation runs in parallel
pub const DEFAULT_PARALLEL_SENTENCE_THRESHOLD: usize = 256;

/// Configuration for a single analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Pairs whose accumulated count is below this value produce no link
    pub min_edge_weight: u64,
    /// Documents with more sentences than this are accumulated with rayon
    pub parallel_sentence_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_edge_weight: DEFAULT_MIN_EDGE_WEIGHT,
            parallel_sentence_threshold: DEFAULT_PARALLEL_SENTENCE_THRESHOLD,
        }
    }
}

impl AnalysisConfig {
    /// Set the minimum link weight
    pub fn with_min_edge_weight(mut self, min_edge_weight: u64) -> Self {
        self.min_edge_weight = min_edge_weight;
        self
    }

    /// Set the parallel accumulation threshold
    pub fn with_parallel_sentence_threshold(mut self, threshold: usize) -> Self {
        self.parallel_sentence_threshold = threshold;
        self
    }
}

/// A token together with the number of times it occurs in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: u64,
}

/// A node of the exported graph, one per distinct content token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
}

/// An undirected link between two tokens; `source < target` always holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub value: u64,
}

/// Node-link graph in the shape consumed by force-directed visualizers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLinkGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// Result of analyzing one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Tokens ranked by count (descending), ties broken by token (ascending)
    pub frequency: Vec<FrequencyEntry>,
    pub graph: NodeLinkGraph,
}

impl AnalysisReport {
    /// Total number of content tokens counted across the document
    pub fn total_tokens(&self) -> u64 {
        self.frequency.iter().map(|e| e.count).sum()
    }

    /// Number of graph nodes (distinct content tokens)
    pub fn node_count(&self) -> usize {
        self.graph.nodes.len()
    }

    /// Number of graph links that passed the weight threshold
    pub fn link_count(&self) -> usize {
        self.graph.links.len()
    }

    /// Count for a given token, if it was seen
    pub fn count_of(&self, word: &str) -> Option<u64> {
        self.frequency
            .iter()
            .find(|e| e.word == word)
            .map(|e| e.count)
    }
}
