use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// How one scenario ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    /// Generator seed the scenario ran with
    pub seed: u64,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub outcome: Outcome,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }
}

/// Result of one runner invocation
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    /// In registration order
    pub entries: Vec<ScenarioReport>,
    /// Names filtered out by include/exclude
    pub skipped: Vec<String>,
}

impl RunReport {
    /// True when every executed scenario passed
    pub fn passed(&self) -> bool {
        self.entries.iter().all(ScenarioReport::passed)
    }

    pub fn failures(&self) -> Vec<&ScenarioReport> {
        self.entries.iter().filter(|entry| !entry.passed()).collect()
    }

    pub fn entry(&self, name: &str) -> Option<&ScenarioReport> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            match &entry.outcome {
                Outcome::Passed => writeln!(f, "  ok    {} ({} ms)", entry.name, entry.elapsed_ms)?,
                Outcome::Failed { error } => writeln!(
                    f,
                    "  FAIL  {} ({} ms)\n        {}",
                    entry.name, entry.elapsed_ms, error
                )?,
            }
        }

        let failed = self.failures().len();
        write!(
            f,
            "{} passed, {} failed, {} skipped in {} ms (seed {})",
            self.entries.len() - failed,
            failed,
            self.skipped.len(),
            self.elapsed_ms,
            self.seed
        )
    }
}
