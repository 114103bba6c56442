use std::collections::HashSet;
use std::sync::Arc;

use transcript_graph::nlp::sentence::split_sentences;
use transcript_graph::nlp::stopwords::INTERVIEW_STOPWORDS;
use transcript_graph::nlp::tokenizer::Tokenizer;
use transcript_graph::pipeline::traits::SequentialAccumulator;
use transcript_graph::{
    analyze_text, AnalysisConfig, AnalysisError, AnalysisReport, Pipeline, PipelineBuilder,
    StopwordSet,
};

const TRANSCRIPTS: &[&str] = &[
    "Interviewer: Tell me about your first job. Informant: I joined the army at nineteen! \
     The army taught me discipline. My father was an electrician, and I wanted to study too.",
    "We didn't have much money. My parents said study, study, study. \
     I couldn't afford the course, so I worked nights? Nights were long. Long nights, long days.",
    "Dr. Smith said 2.5 percent of kids drop out. That number stuck with me.  It still does.",
    "one two three. one two three. one two three.",
];

fn check_invariants(text: &str, report: &AnalysisReport, min_weight: u64) {
    // Ranked by count descending, ties by word ascending
    for pair in report.frequency.windows(2) {
        assert!(
            pair[0].count > pair[1].count
                || (pair[0].count == pair[1].count && pair[0].word < pair[1].word),
            "bad order: {:?}",
            pair
        );
    }

    // Sum of counts equals the number of content tokens
    let tokenizer = Tokenizer::default();
    let expected: usize = split_sentences(text)
        .iter()
        .map(|s| tokenizer.tokenize(s).len())
        .sum();
    assert_eq!(report.total_tokens(), expected as u64);

    // Node set equals the frequency word set
    let nodes: HashSet<&str> = report.graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(nodes.len(), report.frequency.len());
    for entry in &report.frequency {
        assert!(nodes.contains(entry.word.as_str()));
    }

    // Links: canonical, unique, thresholded, endpoints present
    let mut seen = HashSet::new();
    for link in &report.graph.links {
        assert!(link.source < link.target);
        assert!(link.value >= min_weight);
        assert!(nodes.contains(link.source.as_str()));
        assert!(nodes.contains(link.target.as_str()));
        assert!(seen.insert((link.source.clone(), link.target.clone())));
    }

    // Curated stopwords never surface
    for stopword in INTERVIEW_STOPWORDS {
        assert!(!nodes.contains(stopword));
    }
}

#[test]
fn invariants_hold_for_sample_transcripts() {
    for text in TRANSCRIPTS {
        let report = analyze_text(text).unwrap();
        check_invariants(text, &report, 2);
    }
}

#[test]
fn invariants_hold_with_lower_threshold() {
    let pipeline = PipelineBuilder::new()
        .config(AnalysisConfig::default().with_min_edge_weight(1))
        .build();

    for text in TRANSCRIPTS {
        let report = pipeline.analyze(text).unwrap();
        check_invariants(text, &report, 1);
    }
}

#[test]
fn cooccurrence_is_symmetric() {
    let pipeline = Pipeline::default();

    for text in TRANSCRIPTS {
        let graph = pipeline.accumulate(text);
        for (_, node) in graph.nodes() {
            for (&partner, &count) in &node.edges {
                let other = graph.get_term(partner).unwrap();
                assert_eq!(graph.cooccurrence(other, &node.term), count);
            }
        }
    }
}

#[test]
fn reanalysis_is_identical() {
    for text in TRANSCRIPTS {
        let first = serde_json::to_string(&analyze_text(text).unwrap()).unwrap();
        let second = serde_json::to_string(&analyze_text(text).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn parallel_and_sequential_pipelines_agree() {
    let text = TRANSCRIPTS.join(" ").repeat(40);

    let parallel = PipelineBuilder::new()
        .config(AnalysisConfig::default().with_parallel_sentence_threshold(4))
        .build()
        .analyze(&text)
        .unwrap();
    let sequential = PipelineBuilder::new()
        .accumulator(SequentialAccumulator)
        .build()
        .analyze(&text)
        .unwrap();

    assert_eq!(parallel, sequential);
}

#[test]
fn repeated_sentence_links_its_words() {
    let report = analyze_text("The person was good. The person was good.").unwrap();

    let words: Vec<(&str, u64)> = report
        .frequency
        .iter()
        .map(|e| (e.word.as_str(), e.count))
        .collect();
    assert_eq!(words, vec![("the", 2), ("was", 2)]);
    assert_eq!(report.link_count(), 1);
    assert_eq!(report.graph.links[0].source, "the");
    assert_eq!(report.graph.links[0].target, "was");
    assert_eq!(report.graph.links[0].value, 2);
}

#[test]
fn single_sentence_of_distinct_words_has_no_links() {
    let report = analyze_text("a b c").unwrap();

    assert_eq!(report.node_count(), 3);
    assert_eq!(report.link_count(), 0);

    let graph = Pipeline::default().accumulate("a b c");
    assert_eq!(graph.cooccurrence("a", "b"), 1);
    assert_eq!(graph.cooccurrence("a", "c"), 1);
    assert_eq!(graph.cooccurrence("b", "c"), 1);
}

#[test]
fn blank_document_is_rejected() {
    assert_eq!(analyze_text(""), Err(AnalysisError::EmptyDocument));
    assert_eq!(analyze_text("\n\t  "), Err(AnalysisError::EmptyDocument));
}

#[test]
fn standard_stopwords_remove_function_words() {
    let pipeline = PipelineBuilder::new()
        .stopwords(Arc::new(StopwordSet::with_standard("en")))
        .build();

    let report = pipeline
        .analyze("The farm was near the river. The river flooded the farm.")
        .unwrap();

    assert_eq!(report.count_of("the"), None);
    assert_eq!(report.count_of("farm"), Some(2));
    assert_eq!(report.count_of("river"), Some(2));
    assert!(report
        .graph
        .links
        .iter()
        .any(|l| l.source == "farm" && l.target == "river" && l.value == 2));
}
