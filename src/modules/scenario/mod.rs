// Scenario-runner pattern
//
// context   - what the runner hands each scenario
// chain     - sequential prerequisite creation
// invoker   - the operation under test
// validator - consistency invariants over typed responses
// prober    - negative paths that must reject
// runner    - registry, filtering, concurrency, panic isolation
// report    - per-scenario outcomes

pub mod chain;
pub mod context;
pub mod invoker;
pub mod prober;
pub mod report;
pub mod runner;
pub mod validator;

pub use chain::{ChainOutputs, DependencyChain};
pub use context::ScenarioContext;
pub use invoker::invoke;
pub use prober::{expect_rejection, nonexistent_id, ProbeKind};
pub use report::{Outcome, RunReport, ScenarioReport};
pub use runner::{scenario, scenario_seed, FnScenario, ScenarioRunner};
pub use validator::SortDirection;
