//! The single active document
//!
//! Exactly one transcript is held at a time. Ingestion replaces it
//! wholesale and analysis reads a snapshot. The slot sits behind a lock, so
//! a reader sees either the previous document or the new one in full, never
//! a mix. Analysis runs on the snapshot after the lock is released.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{AnalysisError, Result};

/// Lock-guarded single-slot holder for the current document text
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    slot: Arc<RwLock<Option<Arc<str>>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current document verbatim
    ///
    /// `None` means the caller had no usable text. An empty string is a
    /// valid payload; it is stored and later reported as an empty document.
    pub fn ingest(&self, text: Option<String>) -> Result<()> {
        let text = text.ok_or(AnalysisError::MissingInput)?;
        *self.slot.write() = Some(Arc::from(text));
        Ok(())
    }

    /// The current document, if one was ever ingested
    pub fn snapshot(&self) -> Option<Arc<str>> {
        self.slot.read().clone()
    }

    /// The current document, or `EmptyDocument` when absent or blank
    pub fn require_document(&self) -> Result<Arc<str>> {
        match self.snapshot() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(AnalysisError::EmptyDocument),
        }
    }

    /// Drop the current document
    pub fn clear(&self) {
        *self.slot.write() = None;
    }
}
