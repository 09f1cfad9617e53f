use std::collections::HashMap;
use std::future::Future;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::{Result, ScenarioError};

/// Resources recorded by a dependency chain, in creation order
#[derive(Debug, Clone, Default)]
pub struct ChainOutputs {
    order: Vec<String>,
    values: HashMap<String, Value>,
}

impl ChainOutputs {
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn value(&self, name: &str) -> Result<&Value> {
        self.values
            .get(name)
            .ok_or_else(|| ScenarioError::missing_dependency(name))
    }

    /// Typed copy of a recorded output
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        Ok(serde_json::from_value(self.value(name)?.clone())?)
    }

    /// The `id` field of a recorded output
    pub fn id(&self, name: &str) -> Result<Uuid> {
        self.value(name)?
            .get("id")
            .and_then(Value::as_str)
            .and_then(|id| Uuid::parse_str(id).ok())
            .ok_or_else(|| ScenarioError::missing_dependency(format!("{}.id", name)))
    }

    /// Step names in the order they were recorded
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn insert(&mut self, name: &str, value: Value) {
        self.order.push(name.to_string());
        self.values.insert(name.to_string(), value);
    }
}

/// Builds prerequisite resources one after another.
///
/// Each step sees a snapshot of everything recorded before it, so later
/// steps can map ids out of earlier ones. A step starts only after the
/// previous one has been recorded.
#[derive(Debug)]
pub struct DependencyChain {
    scenario: String,
    outputs: ChainOutputs,
}

impl DependencyChain {
    pub fn new(scenario: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
            outputs: ChainOutputs::default(),
        }
    }

    /// Create one resource and record it under `name`
    pub async fn step<T, F, Fut>(&mut self, name: &str, build: F) -> Result<T>
    where
        F: FnOnce(ChainOutputs) -> Fut,
        Fut: Future<Output = Result<T>>,
        T: Serialize,
    {
        if self.outputs.contains(name) {
            return Err(ScenarioError::DuplicateStep(name.to_string()));
        }

        let started = Instant::now();
        let resource = match build(self.outputs.clone()).await {
            Ok(resource) => resource,
            Err(err) => {
                warn!(scenario = %self.scenario, step = name, error = %err, "dependency step failed");
                return Err(err);
            }
        };

        self.record(name, &resource)?;
        debug!(
            scenario = %self.scenario,
            step = name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "dependency created"
        );
        Ok(resource)
    }

    /// Record a resource obtained outside the chain (e.g. an actor session)
    pub fn record<T: Serialize>(&mut self, name: &str, resource: &T) -> Result<()> {
        if self.outputs.contains(name) {
            return Err(ScenarioError::DuplicateStep(name.to_string()));
        }
        self.outputs.insert(name, serde_json::to_value(resource)?);
        Ok(())
    }

    pub fn outputs(&self) -> &ChainOutputs {
        &self.outputs
    }

    pub fn finish(self) -> ChainOutputs {
        self.outputs
    }
}
