use std::future::Future;

use super::chain::DependencyChain;
use super::invoker;
use crate::core::{Connection, RandomGenerator, Result};
use crate::modules::actors::ActorProvisioner;

/// Everything a scenario receives from the runner
#[derive(Debug, Clone)]
pub struct ScenarioContext {
    pub name: String,
    /// Anonymous connection to the backend; actor sessions derive from it
    pub connection: Connection,
    pub random: RandomGenerator,
    pub seed: u64,
}

impl ScenarioContext {
    pub fn new(name: impl Into<String>, connection: &Connection, seed: u64) -> Self {
        Self {
            name: name.into(),
            connection: connection.anonymous(),
            random: RandomGenerator::seeded(seed),
            seed,
        }
    }

    pub fn actors(&self) -> ActorProvisioner {
        ActorProvisioner::new(&self.connection)
    }

    pub fn chain(&self) -> DependencyChain {
        DependencyChain::new(self.name.clone())
    }

    /// Invoke the operation under test, logged under this scenario's name
    pub async fn invoke<T, Fut>(&self, operation: &str, call: Fut) -> Result<T>
    where
        Fut: Future<Output = Result<T>>,
    {
        invoker::invoke(&self.name, operation, call).await
    }
}
