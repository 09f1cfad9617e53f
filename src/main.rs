use anyhow::Context;
use mall_e2e::config::Config;
use mall_e2e::{scenarios, Connection, ScenarioRunner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("mall_e2e={}", config.app.log_level).into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.app.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting shopping-mall e2e run");
    tracing::info!("Backend: {}", config.connection.host);

    let connection = Connection::from_config(&config.connection)?;
    let mut runner = ScenarioRunner::new(config.runner.clone());
    runner.register_all(scenarios::catalog());

    let report = runner.run(&connection).await;
    println!("{}", report);

    if let Some(path) = &config.runner.report_path {
        let json = report.to_json()?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write report to {}", path))?;
        tracing::info!("Report written to {}", path);
    }

    if !report.passed() {
        std::process::exit(1);
    }
    Ok(())
}
