//! Alert Sink Abstraction

use tracing::warn;

/// Kind of rule that produced an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Heart rate above threshold
    Tachycardia,
    /// Gait quality score below floor
    LowGaitScore,
    /// Step count above threshold
    StepSurge,
    /// Fixed phrase found in a plain-text message
    SpecialMessage,
}

/// A one-shot alert. Emitted once per triggering condition per message,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub text: String,
}

impl Alert {
    pub fn new(kind: AlertKind, text: String) -> Self {
        Self { kind, text }
    }
}

/// Destination for triggered alerts, injected into the evaluator so tests can
/// capture output instead of scraping stdout.
pub trait AlertSink {
    /// Deliver a single alert. Must not block.
    fn emit(&self, alert: &Alert);
}

/// Production sink: writes alert text to stdout and to a warning-level log.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl AlertSink for StdoutSink {
    fn emit(&self, alert: &Alert) {
        println!("{}", alert.text);
        warn!("{}", alert.text);
    }
}
