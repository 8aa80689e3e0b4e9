//! Alert Engine
//!
//! Evaluates patient telemetry messages against fixed threshold rules and
//! emits one-shot alerts. Alerts are never persisted, deduplicated, or
//! rate-limited.

mod evaluator;
mod event;
mod sink;

pub use evaluator::{AlertEvaluator, EvaluatorConfig};
pub use event::VitalsEvent;
pub use sink::{Alert, AlertKind, AlertSink, StdoutSink};
