// Integration test: the full catalog through the runner

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::{spawn_mock_mall, spawn_mock_mall_with, Faults};
use mall_e2e::config::RunnerConfig;
use mall_e2e::modules::scenario::{Outcome, ScenarioRunner};
use mall_e2e::scenarios::catalog;

fn runner(config: RunnerConfig) -> ScenarioRunner {
    let mut runner = ScenarioRunner::new(config);
    runner.register_all(catalog());
    runner
}

#[actix_web::test]
async fn test_catalog_passes_against_healthy_backend() {
    let backend = spawn_mock_mall();
    let report = runner(RunnerConfig {
        concurrency: 3,
        seed: Some(2026),
        ..Default::default()
    })
    .run(&backend.connection)
    .await;

    assert!(report.passed(), "{}", report);
    assert_eq!(report.entries.len(), catalog().len());
    assert!(report.skipped.is_empty());
    assert_eq!(report.seed, 2026);
}

#[actix_web::test]
async fn test_filters_select_scenarios() {
    let backend = spawn_mock_mall();
    let report = runner(RunnerConfig {
        concurrency: 1,
        include: vec!["order".to_string()],
        exclude: vec!["cross_tenant".to_string()],
        seed: Some(1),
        ..Default::default()
    })
    .run(&backend.connection)
    .await;

    let names: Vec<_> = report.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["test_api_cart_order_flow"]);
    assert_eq!(report.skipped.len(), catalog().len() - 1);
}

#[actix_web::test]
async fn test_faulty_backend_fails_only_affected_scenarios() {
    let backend = spawn_mock_mall_with(Faults {
        ignore_unit_updates: true,
        ..Default::default()
    });
    let report = runner(RunnerConfig {
        concurrency: 2,
        seed: Some(99),
        ..Default::default()
    })
    .run(&backend.connection)
    .await;

    assert!(!report.passed());
    let failures: Vec<_> = report.failures().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(failures, vec!["test_api_sale_unit_update"]);
    match &report.entry("test_api_sale_unit_update").unwrap().outcome {
        Outcome::Failed { error } => assert!(error.contains("[sale_unit.name]")),
        Outcome::Passed => unreachable!(),
    }

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["entries"][0]["outcome"]["status"], "failed");
    assert_eq!(json["seed"], 99);
}
