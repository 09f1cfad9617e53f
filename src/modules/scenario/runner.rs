use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use futures_util::stream::{self, StreamExt};
use futures_util::FutureExt;
use tracing::{error, info, Instrument};

use super::context::ScenarioContext;
use super::report::{Outcome, RunReport, ScenarioReport};
use crate::config::RunnerConfig;
use crate::core::{Connection, Result, Scenario, ScenarioError};

/// Scenario backed by an async function
pub struct FnScenario<F> {
    name: String,
    body: F,
}

impl<F> FnScenario<F> {
    pub fn new(name: impl Into<String>, body: F) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

#[async_trait]
impl<F, Fut> Scenario for FnScenario<F>
where
    F: Fn(ScenarioContext) -> Fut + Send + Sync,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, ctx: ScenarioContext) -> Result<()> {
        (self.body)(ctx).await
    }
}

/// Register an async function as a scenario
pub fn scenario<F, Fut>(name: &str, body: F) -> Arc<dyn Scenario>
where
    F: Fn(ScenarioContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    Arc::new(FnScenario::new(name, body))
}

/// Runs registered scenarios against one backend.
///
/// Scenarios provision their own actors and resources, so several can be in
/// flight at once; results are reported in registration order.
pub struct ScenarioRunner {
    scenarios: Vec<Arc<dyn Scenario>>,
    config: RunnerConfig,
}

impl ScenarioRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            scenarios: Vec::new(),
            config,
        }
    }

    pub fn register(&mut self, scenario: Arc<dyn Scenario>) -> &mut Self {
        self.scenarios.push(scenario);
        self
    }

    pub fn register_all<I>(&mut self, scenarios: I) -> &mut Self
    where
        I: IntoIterator<Item = Arc<dyn Scenario>>,
    {
        self.scenarios.extend(scenarios);
        self
    }

    /// Names that pass the include/exclude filters
    pub fn selected(&self) -> Vec<&str> {
        self.scenarios
            .iter()
            .map(|s| s.name())
            .filter(|name| self.config.selects(name))
            .collect()
    }

    pub async fn run(&self, base: &Connection) -> RunReport {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let concurrency = self.config.concurrency.max(1);
        let started_at = Utc::now();
        let started = Instant::now();

        let (selected, skipped): (Vec<_>, Vec<_>) = self
            .scenarios
            .iter()
            .cloned()
            .partition(|s| self.config.selects(s.name()));
        let skipped: Vec<String> = skipped.iter().map(|s| s.name().to_string()).collect();

        info!(
            seed,
            concurrency,
            selected = selected.len(),
            skipped = skipped.len(),
            host = base.host(),
            "starting scenario run"
        );

        let mut finished: Vec<(usize, ScenarioReport)> = stream::iter(selected.into_iter().enumerate())
            .map(|(index, scenario)| {
                let scenario_seed = scenario_seed(seed, scenario.name());
                let ctx = ScenarioContext::new(scenario.name(), base, scenario_seed);
                async move { (index, run_one(scenario, ctx).await) }
            })
            .buffer_unordered(concurrency)
            .collect()
            .await;
        finished.sort_by_key(|(index, _)| *index);

        let report = RunReport {
            seed,
            started_at,
            elapsed_ms: started.elapsed().as_millis() as u64,
            entries: finished.into_iter().map(|(_, entry)| entry).collect(),
            skipped,
        };

        info!(
            passed = report.entries.len() - report.failures().len(),
            failed = report.failures().len(),
            elapsed_ms = report.elapsed_ms,
            "scenario run finished"
        );
        report
    }
}

async fn run_one(scenario: Arc<dyn Scenario>, ctx: ScenarioContext) -> ScenarioReport {
    let name = scenario.name().to_string();
    let seed = ctx.seed;
    let span = tracing::info_span!("scenario", name = %name, seed);
    let started_at = Utc::now();
    let started = Instant::now();

    let result = AssertUnwindSafe(scenario.run(ctx))
        .catch_unwind()
        .instrument(span.clone())
        .await;

    let outcome = match result {
        Ok(Ok(())) => Outcome::Passed,
        Ok(Err(err)) => Outcome::Failed {
            error: err.to_string(),
        },
        Err(panic) => Outcome::Failed {
            error: ScenarioError::Panicked(panic_message(panic.as_ref())).to_string(),
        },
    };

    let elapsed_ms = started.elapsed().as_millis() as u64;
    span.in_scope(|| match &outcome {
        Outcome::Passed => info!(elapsed_ms, "scenario passed"),
        Outcome::Failed { error } => error!(elapsed_ms, %error, "scenario failed"),
    });

    ScenarioReport {
        name,
        seed,
        started_at,
        elapsed_ms,
        outcome,
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Per-scenario seed: the run seed mixed with an FNV-1a hash of the name, so
/// a scenario's inputs do not depend on which other scenarios were selected
pub fn scenario_seed(run_seed: u64, name: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    name.bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
        ^ run_seed
}
