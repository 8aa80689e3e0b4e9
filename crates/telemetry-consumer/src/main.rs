//! Patient Telemetry Pipeline - Main Entry Point

use alert_engine::{AlertEvaluator, EvaluatorConfig, StdoutSink};
use telemetry_consumer::{init_logging, run, ConsumerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Patient Telemetry Pipeline v{} ===", env!("CARGO_PKG_VERSION"));
    info!("START consumer.");

    let config = ConsumerConfig::load()?;
    let evaluator = AlertEvaluator::new(EvaluatorConfig::default(), Box::new(StdoutSink));

    run(config, evaluator).await?;

    Ok(())
}
