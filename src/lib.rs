//! End-to-end scenario suite for the shopping-mall backend
//!
//! Scenarios provision real actors over HTTP, build their prerequisite
//! resources through a dependency chain, then call the operation under test
//! and check its response both structurally and against business invariants.

pub mod config;
pub mod core;
pub mod modules;
pub mod scenarios;

// Re-export commonly used types
pub use crate::core::{Connection, RandomGenerator, Result, ScenarioError};
pub use modules::actors;
pub use modules::scenario::{RunReport, ScenarioContext, ScenarioRunner};
pub use modules::sdk;
