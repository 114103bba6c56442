//! Frequency and co-occurrence accumulation
//!
//! This module provides a mutable, interned adjacency structure that uses
//! FxHashMap for O(1) lookups while sentences are folded in. Each node holds
//! the token's document frequency and a sparse row of co-occurrence counts.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Sentences per rayon task when accumulating in parallel
const PARALLEL_CHUNK_SENTENCES: usize = 64;

/// A token in the co-occurrence graph
#[derive(Debug, Clone)]
pub struct TermNode {
    /// The token text
    pub term: String,
    /// Number of occurrences across the document
    pub frequency: u64,
    /// Adjacency list: partner node ID -> co-occurrence count
    pub edges: FxHashMap<u32, u64>,
}

impl TermNode {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            frequency: 0,
            edges: FxHashMap::default(),
        }
    }
}

/// Frequency map and symmetric co-occurrence map for one document
///
/// Every increment is applied to both directions of a pair, so
/// `cooccurrence(a, b) == cooccurrence(b, a)` holds at all times.
#[derive(Debug, Default)]
pub struct CooccurrenceGraph {
    /// Maps term -> node ID
    term_to_id: FxHashMap<String, u32>,
    /// Node storage, in first-seen order
    nodes: Vec<TermNode>,
}

impl CooccurrenceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with pre-allocated node capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            term_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given term, returning its ID
    pub fn get_or_create_node(&mut self, term: &str) -> u32 {
        if let Some(&id) = self.term_to_id.get(term) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.term_to_id.insert(term.to_string(), id);
        self.nodes.push(TermNode::new(term));
        id
    }

    /// Add `count` occurrences to a node's frequency
    pub fn add_occurrences(&mut self, id: u32, count: u64) {
        if let Some(node) = self.nodes.get_mut(id as usize) {
            node.frequency += count;
        }
    }

    /// Increment the co-occurrence count between two nodes in both directions
    ///
    /// Pairs of the same node are ignored; they can never become links.
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: u64) {
        if from == to {
            return;
        }

        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0) += weight;
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            *node.edges.entry(from).or_insert(0) += weight;
        }
    }

    /// Fold one tokenized sentence into the counts
    ///
    /// Every token occurrence adds one to its frequency. Every position pair
    /// `i < j` adds one to the pair's count, so a token repeated within a
    /// sentence strengthens its links once per occurrence.
    pub fn add_sentence<S: AsRef<str>>(&mut self, tokens: &[S]) {
        let ids: Vec<u32> = tokens
            .iter()
            .map(|t| {
                let id = self.get_or_create_node(t.as_ref());
                self.add_occurrences(id, 1);
                id
            })
            .collect();

        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                self.increment_edge(ids[i], ids[j], 1);
            }
        }
    }

    /// Build counts sequentially from tokenized sentences
    pub fn from_sentences<S: AsRef<str>>(sentences: &[Vec<S>]) -> Self {
        let mut graph = Self::with_capacity(sentences.len());
        for sentence in sentences {
            graph.add_sentence(sentence);
        }
        graph
    }

    /// Merge another graph's counts into this one, matching nodes by term
    pub fn merge(&mut self, other: &CooccurrenceGraph) {
        let remap: Vec<u32> = other
            .nodes
            .iter()
            .map(|node| {
                let id = self.get_or_create_node(&node.term);
                self.add_occurrences(id, node.frequency);
                id
            })
            .collect();

        for (from, node) in other.nodes() {
            for (&to, &weight) in &node.edges {
                // Each undirected pair is stored twice; apply it once
                if from < to {
                    self.increment_edge(remap[from as usize], remap[to as usize], weight);
                }
            }
        }
    }

    /// Get the number of distinct terms
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of co-occurring pairs (each undirected pair once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    pub fn get_node(&self, id: u32) -> Option<&TermNode> {
        self.nodes.get(id as usize)
    }

    pub fn get_node_id(&self, term: &str) -> Option<u32> {
        self.term_to_id.get(term).copied()
    }

    pub fn get_term(&self, id: u32) -> Option<&str> {
        self.nodes.get(id as usize).map(|n| n.term.as_str())
    }

    /// Frequency of a term, if it was seen
    pub fn frequency(&self, term: &str) -> Option<u64> {
        self.get_node_id(term)
            .and_then(|id| self.get_node(id))
            .map(|n| n.frequency)
    }

    /// Co-occurrence count from `a` to `b` (zero when never seen together)
    pub fn cooccurrence(&self, a: &str, b: &str) -> u64 {
        match (self.get_node_id(a), self.get_node_id(b)) {
            (Some(ia), Some(ib)) => self
                .get_node(ia)
                .and_then(|n| n.edges.get(&ib))
                .copied()
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Sum of all frequencies
    pub fn total_occurrences(&self) -> u64 {
        self.nodes.iter().map(|n| n.frequency).sum()
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &TermNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Build counts, switching to rayon for documents with many sentences
///
/// Sentences are split into chunks, each chunk is accumulated into a
/// partial graph in parallel, and partials are merged in document order.
/// Counts are additive, so the result equals the sequential one.
pub fn build_cooccurrence_parallel<S>(sentences: &[Vec<S>], threshold: usize) -> CooccurrenceGraph
where
    S: AsRef<str> + Sync,
{
    if sentences.len() <= threshold {
        return CooccurrenceGraph::from_sentences(sentences);
    }

    let partials: Vec<CooccurrenceGraph> = sentences
        .par_chunks(PARALLEL_CHUNK_SENTENCES)
        .map(CooccurrenceGraph::from_sentences)
        .collect();

    let mut graph = CooccurrenceGraph::with_capacity(sentences.len());
    for partial in &partials {
        graph.merge(partial);
    }
    graph
}
