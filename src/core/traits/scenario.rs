use async_trait::async_trait;

use crate::core::Result;
use crate::modules::scenario::ScenarioContext;

/// One end-to-end scenario: a named, linear sequence of API calls and checks
#[async_trait]
pub trait Scenario: Send + Sync {
    /// Registry name, conventionally prefixed with `test_api_`
    fn name(&self) -> &str;

    /// Execute the scenario. Any error fails it.
    async fn run(&self, ctx: ScenarioContext) -> Result<()>;
}
