//! Error types for ingestion and analysis

use thiserror::Error;

/// Errors reported by the document store and the analysis pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Ingestion was attempted without a usable text payload
    #[error("No text field found")]
    MissingInput,

    /// Analysis was requested with no document, or only whitespace, stored
    #[error("No transcripts found. Please upload first.")]
    EmptyDocument,
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
