//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts in tests, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::graph::builder::CooccurrenceGraph;
use crate::pipeline::artifacts::TokenStream;

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_ACCUMULATE: &str = "accumulate";
pub const STAGE_EXPORT: &str = "export";

/// Wall-clock timer for a single stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// What a stage reports when it finishes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageReport {
    pub elapsed: Duration,
    pub sentences: Option<usize>,
    pub tokens: Option<usize>,
    pub nodes: Option<usize>,
    pub edges: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Default::default()
        }
    }
}

/// Fluent construction of a [`StageReport`] with optional counters
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn sentences(mut self, n: usize) -> Self {
        self.report.sentences = Some(n);
        self
    }

    pub fn tokens(mut self, n: usize) -> Self {
        self.report.tokens = Some(n);
        self
    }

    pub fn nodes(mut self, n: usize) -> Self {
        self.report.nodes = Some(n);
        self
    }

    pub fn edges(mut self, n: usize) -> Self {
        self.report.edges = Some(n);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks fired by [`Pipeline::run`](super::runner::Pipeline::run).
///
/// All methods default to no-ops so implementors only override what they
/// need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Called after tokenization with the full token stream
    fn on_tokens(&mut self, _tokens: &TokenStream) {}

    /// Called after accumulation with the frequency/co-occurrence counts
    fn on_graph(&mut self, _graph: &CooccurrenceGraph) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records the report of every stage in execution order
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports in the order the stages finished
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    pub fn get(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

/// Emits one `debug` event per finished stage
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        tracing::debug!(
            stage,
            elapsed_us = report.elapsed.as_micros() as u64,
            sentences = report.sentences,
            tokens = report.tokens,
            nodes = report.nodes,
            edges = report.edges,
            "pipeline stage finished"
        );
    }
}
