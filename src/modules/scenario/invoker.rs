use std::future::Future;
use std::time::Instant;

use tracing::{info, info_span, warn, Instrument};

use crate::core::Result;

/// Run the operation under test inside a span named after the scenario and
/// operation, logging how long it took and whether it failed.
pub async fn invoke<T, Fut>(scenario: &str, operation: &str, call: Fut) -> Result<T>
where
    Fut: Future<Output = Result<T>>,
{
    let span = info_span!("invoke", scenario, operation);

    async move {
        let started = Instant::now();
        let outcome = call.await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &outcome {
            Ok(_) => info!(elapsed_ms, "target operation succeeded"),
            Err(err) => warn!(elapsed_ms, error = %err, "target operation failed"),
        }

        outcome
    }
    .instrument(span)
    .await
}
