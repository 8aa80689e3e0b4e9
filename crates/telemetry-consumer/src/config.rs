//! Consumer Configuration

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::ConsumerError;

/// Connection and subscription settings for the consumer.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsumerConfig {
    /// MQTT broker host
    pub broker_host: String,
    /// MQTT broker port
    pub broker_port: u16,
    /// Topic carrying telemetry messages
    pub topic: String,
    /// Client id presented to the broker
    pub client_id: String,
}

impl ConsumerConfig {
    /// Load configuration from defaults, an optional `telemetry.toml`, and
    /// `TELEMETRY_`-prefixed environment variables, later sources winning.
    pub fn load() -> Result<Self, ConsumerError> {
        let config = Config::builder()
            .set_default("broker_host", "localhost")?
            .set_default("broker_port", 1883)?
            .set_default("topic", "unknown_topic")?
            .set_default("client_id", "patient-monitor")?
            .add_source(File::with_name("telemetry").required(false))
            .add_source(Environment::with_prefix("TELEMETRY"))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            broker_host: "localhost".to_string(),
            broker_port: 1883,
            topic: "unknown_topic".to_string(),
            client_id: "patient-monitor".to_string(),
        }
    }
}
