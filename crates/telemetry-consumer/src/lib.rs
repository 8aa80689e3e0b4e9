//! Patient Telemetry Consumer
//!
//! Subscribes to a telemetry topic over MQTT and hands each message payload
//! to the alert engine, strictly one at a time. Connection handling, retries,
//! and delivery semantics are the client library's concern.

use std::time::Duration;

use alert_engine::AlertEvaluator;
use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS};
use thiserror::Error;
use tracing::{debug, error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod config;

pub use config::ConsumerConfig;

/// Consumer error types
#[derive(Error, Debug)]
pub enum ConsumerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Subscribe failed: {0}")]
    Subscribe(#[from] rumqttc::ClientError),
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the consumption loop until interrupted.
///
/// Each payload is evaluated to completion before the next poll. Poll errors
/// are logged and retried after a backoff; they never reach the evaluator.
pub async fn run(config: ConsumerConfig, evaluator: AlertEvaluator) -> Result<(), ConsumerError> {
    info!(
        "Consumer: topic='{}', client='{}'",
        config.topic, config.client_id
    );

    let mut options = MqttOptions::new(&config.client_id, &config.broker_host, config.broker_port);
    options.set_keep_alive(Duration::from_secs(30));

    let (client, mut eventloop) = AsyncClient::new(options, 10);
    client.subscribe(&config.topic, QoS::AtLeastOnce).await?;

    info!("Polling messages from topic '{}'...", config.topic);
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                warn!("Consumer interrupted by user.");
                break;
            }
            event = eventloop.poll() => match event {
                Ok(Event::Incoming(Packet::Publish(publish))) => {
                    if let Some(text) = payload_text(&publish.payload) {
                        debug!("Received message on '{}': {}", publish.topic, text);
                        evaluator.evaluate(text);
                    }
                }
                Ok(event) => debug!("MQTT event: {:?}", event),
                Err(e) => {
                    error!("Error while consuming messages: {}", e);
                    tokio::time::sleep(Duration::from_secs(5)).await;
                }
            }
        }
    }

    info!("END consumer for topic '{}'.", config.topic);
    Ok(())
}

/// Decode a publish payload as UTF-8 text.
///
/// Invalid payloads are logged at warn and skipped, never evaluated; a bad
/// payload is not fatal to the consumer.
fn payload_text(payload: &[u8]) -> Option<&str> {
    match std::str::from_utf8(payload) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Skipping non-UTF-8 payload: {}", e);
            None
        }
    }
}
