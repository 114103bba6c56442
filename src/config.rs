//! Server configuration from command-line flags and environment

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use clap::Parser;

use crate::nlp::stopwords::StopwordSet;
use crate::types::{AnalysisConfig, DEFAULT_MIN_EDGE_WEIGHT, DEFAULT_PARALLEL_SENTENCE_THRESHOLD};

/// transcript-graph - word frequency and co-occurrence graphs for interview transcripts
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "TRANSCRIPT_GRAPH_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Allowed CORS origin (repeatable, or comma-separated); any origin when unset
    #[arg(long = "allowed-origin", env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    /// Union the curated stopwords with the standard corpus for --stopword-language
    #[arg(long, env = "STANDARD_STOPWORDS")]
    pub standard_stopwords: bool,

    /// Language of the standard stopword corpus
    #[arg(long, env = "STOPWORD_LANGUAGE", default_value = "en")]
    pub stopword_language: String,

    /// Additional stopwords (repeatable, or comma-separated)
    #[arg(long = "extra-stopword", env = "EXTRA_STOPWORDS", value_delimiter = ',')]
    pub extra_stopwords: Vec<String>,

    /// Minimum co-occurrence count for a graph link
    #[arg(long, env = "MIN_EDGE_WEIGHT", default_value_t = DEFAULT_MIN_EDGE_WEIGHT)]
    pub min_edge_weight: u64,

    /// Sentence count above which accumulation runs in parallel
    #[arg(long, env = "PARALLEL_THRESHOLD", default_value_t = DEFAULT_PARALLEL_SENTENCE_THRESHOLD)]
    pub parallel_threshold: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5000,
            allowed_origins: Vec::new(),
            standard_stopwords: false,
            stopword_language: "en".to_string(),
            extra_stopwords: Vec::new(),
            min_edge_weight: DEFAULT_MIN_EDGE_WEIGHT,
            parallel_threshold: DEFAULT_PARALLEL_SENTENCE_THRESHOLD,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::default()
            .with_min_edge_weight(self.min_edge_weight)
            .with_parallel_sentence_threshold(self.parallel_threshold)
    }

    /// Build the stopword set once for the lifetime of the process
    pub fn stopwords(&self) -> Arc<StopwordSet> {
        let mut set = if self.standard_stopwords {
            StopwordSet::with_standard(&self.stopword_language)
        } else {
            StopwordSet::curated()
        };
        set.add_stopwords(&self.extra_stopwords);
        Arc::new(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_parser_defaults() {
        // PORT may come from the environment
        let parsed = ServerConfig::try_parse_from(["transcript-graph"]).unwrap();
        let default = ServerConfig::default();

        assert_eq!(parsed.stopword_language, default.stopword_language);
        assert_eq!(parsed.min_edge_weight, 2);
        assert!(!parsed.standard_stopwords);
        assert!(parsed.allowed_origins.is_empty());
    }

    #[test]
    fn test_comma_separated_lists() {
        let parsed = ServerConfig::try_parse_from([
            "transcript-graph",
            "--allowed-origin",
            "https://a.example,https://b.example",
            "--extra-stopword",
            "um,uh",
            "--port",
            "8080",
        ])
        .unwrap();

        assert_eq!(parsed.allowed_origins.len(), 2);
        assert_eq!(parsed.socket_addr().port(), 8080);

        let stopwords = parsed.stopwords();
        assert!(stopwords.contains("um"));
        assert!(stopwords.contains("person"));
        assert!(!stopwords.contains("the"));
    }

    #[test]
    fn test_standard_stopwords_flag() {
        let parsed =
            ServerConfig::try_parse_from(["transcript-graph", "--standard-stopwords"]).unwrap();
        assert!(parsed.stopwords().contains("the"));
    }

    #[test]
    fn test_analysis_config() {
        let parsed = ServerConfig::try_parse_from([
            "transcript-graph",
            "--min-edge-weight",
            "3",
            "--parallel-threshold",
            "10",
        ])
        .unwrap();

        let cfg = parsed.analysis_config();
        assert_eq!(cfg.min_edge_weight, 3);
        assert_eq!(cfg.parallel_sentence_threshold, 10);
    }
}
