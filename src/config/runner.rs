use crate::core::{Result, ScenarioError};
use serde::Deserialize;

/// How the scenario runner selects and schedules scenarios
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunnerConfig {
    /// Scenarios in flight at once
    pub concurrency: usize,
    /// When non-empty, a scenario runs only if its name contains one of these
    pub include: Vec<String>,
    /// A scenario whose name contains any of these is skipped
    pub exclude: Vec<String>,
    /// Run seed; every scenario derives its generator seed from it
    pub seed: Option<u64>,
    /// Where to write the JSON report
    pub report_path: Option<String>,
}

impl RunnerConfig {
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(RunnerConfig {
            concurrency: lookup("MALL_E2E_CONCURRENCY")
                .unwrap_or_else(|| "1".to_string())
                .parse()
                .map_err(|_| {
                    ScenarioError::Configuration("Invalid MALL_E2E_CONCURRENCY".to_string())
                })?,
            include: split_patterns(lookup("MALL_E2E_INCLUDE")),
            exclude: split_patterns(lookup("MALL_E2E_EXCLUDE")),
            seed: lookup("MALL_E2E_SEED")
                .map(|s| s.parse())
                .transpose()
                .map_err(|_| ScenarioError::Configuration("Invalid MALL_E2E_SEED".to_string()))?,
            report_path: lookup("MALL_E2E_REPORT").filter(|s| !s.trim().is_empty()),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(ScenarioError::Configuration(
                "Concurrency must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether a scenario named `name` passes the include/exclude filters
    pub fn selects(&self, name: &str) -> bool {
        let included =
            self.include.is_empty() || self.include.iter().any(|p| name.contains(p.as_str()));
        let excluded = self.exclude.iter().any(|p| name.contains(p.as_str()));
        included && !excluded
    }
}

fn split_patterns(raw: Option<String>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
