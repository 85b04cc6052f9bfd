//! # bpmig Progress Reporting (`common::ui::progress`)
//!
//! File: cli/src/common/ui/progress.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Pipelines report what they are doing through a single narrow interface,
//! [`ProgressSink::report`], instead of printing directly. The command layer
//! decides where reports go: the CLI uses [`TracingProgress`], which logs each
//! report and echoes a timestamped line to stderr; tests use
//! [`RecordingProgress`] to assert on the sequence of reports.
//!
//! Every pipeline step reports `begin` and `end`, and failures are reported
//! with the operation name and target so a user can diagnose them from the
//! progress output alone.
//!
use chrono::Local;
#[cfg(test)]
use std::sync::Mutex;
use tracing::info;

/// Receives ordered progress reports from a single pipeline run.
pub trait ProgressSink: Send + Sync {
    /// Reports one event. `stage` names the operation (e.g. `pull_config`),
    /// `detail` says what happened.
    fn report(&self, stage: &str, detail: &str);

    fn begin(&self, stage: &str, target: &str) {
        self.report(stage, &format!("begin {}", target));
    }

    fn end(&self, stage: &str, target: &str) {
        self.report(stage, &format!("end {}", target));
    }

    fn failed(&self, stage: &str, target: &str, error: &anyhow::Error) {
        self.report(stage, &format!("failed {}: {:#}", target, error));
    }
}

/// Default sink: `tracing` at info level plus a timestamped stderr line.
#[derive(Debug, Default)]
pub struct TracingProgress {
    /// Suppresses the stderr echo, leaving only the log event.
    pub quiet: bool,
}

impl ProgressSink for TracingProgress {
    fn report(&self, stage: &str, detail: &str) {
        info!(stage, "{}", detail);
        if !self.quiet {
            eprintln!("{} {}: {}", Local::now().format("%H:%M:%S%.6f"), stage, detail);
        }
    }
}

/// Keeps every report in memory, in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<(String, String)>>,
}

#[cfg(test)]
impl RecordingProgress {
    pub fn events(&self) -> Vec<(String, String)> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// True if any report for `stage` has a detail starting with `prefix`.
    pub fn saw(&self, stage: &str, prefix: &str) -> bool {
        self.events()
            .iter()
            .any(|(s, d)| s == stage && d.starts_with(prefix))
    }
}

#[cfg(test)]
impl ProgressSink for RecordingProgress {
    fn report(&self, stage: &str, detail: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push((stage.to_string(), detail.to_string()));
        }
    }
}
