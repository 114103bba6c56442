//! Per-request analysis pipeline
//!
//! Stages run in sequence over one document: segment, tokenize, accumulate,
//! export.

pub mod artifacts;
pub mod observer;
pub mod runner;
pub mod traits;
