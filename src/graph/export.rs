//! Conversion of accumulated counts into the public report shapes
//!
//! The frequency list is ranked by count, the node list mirrors it, and
//! links are emitted once per unordered pair whose count reaches the
//! configured threshold.

use std::cmp::Ordering;

use super::builder::CooccurrenceGraph;
use crate::types::{FrequencyEntry, GraphLink, GraphNode, NodeLinkGraph};

/// Frequency entries sorted by count descending, then by word ascending
pub fn ranked_frequencies(graph: &CooccurrenceGraph) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = graph
        .nodes()
        .map(|(_, node)| FrequencyEntry {
            word: node.term.clone(),
            count: node.frequency,
        })
        .collect();

    entries.sort_by(compare_entries);
    entries
}

fn compare_entries(a: &FrequencyEntry, b: &FrequencyEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// Links for every pair `a < b` whose count is at least `min_weight`
///
/// Iterating under the `a < b` constraint emits each undirected pair exactly
/// once with `a` as the source. Links are ordered by (source, target).
pub fn threshold_links(graph: &CooccurrenceGraph, min_weight: u64) -> Vec<GraphLink> {
    let mut links = Vec::new();

    for (_, node) in graph.nodes() {
        for (&partner, &value) in &node.edges {
            let Some(target) = graph.get_term(partner) else {
                continue;
            };
            if node.term.as_str() < target && value >= min_weight {
                links.push(GraphLink {
                    source: node.term.clone(),
                    target: target.to_string(),
                    value,
                });
            }
        }
    }

    links.sort_by(|a, b| a.source.cmp(&b.source).then_with(|| a.target.cmp(&b.target)));
    links
}

/// Build the node-link graph; nodes follow the ranked frequency order
pub fn node_link_graph(
    frequency: &[FrequencyEntry],
    graph: &CooccurrenceGraph,
    min_weight: u64,
) -> NodeLinkGraph {
    let nodes = frequency
        .iter()
        .map(|entry| GraphNode {
            id: entry.word.clone(),
        })
        .collect();

    NodeLinkGraph {
        nodes,
        links: threshold_links(graph, min_weight),
    }
}
