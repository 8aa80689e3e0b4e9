//! Threshold Rule Evaluator

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::event::VitalsEvent;
use crate::sink::{Alert, AlertKind, AlertSink};

/// Evaluator thresholds and the special-phrase rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Heart rate above this fires a tachycardia alert (default: 120)
    pub hr_threshold: i64,
    /// Gait score below this fires a low-gait-score alert (default: 0.40)
    pub gait_score_floor: f64,
    /// Step count above this fires a step-surge alert (default: 12)
    pub steps_threshold: i64,
    /// Substring that fires the special-message alert on plain text
    pub special_phrase: String,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            hr_threshold: 120,
            gait_score_floor: 0.40,
            steps_threshold: 12,
            special_phrase: "I just loved a movie! It was funny.".to_string(),
        }
    }
}

/// Evaluates one message at a time against the threshold rules.
///
/// Holds no mutable state across calls; repeated identical inputs reproduce
/// identical alerts. Thresholds and the output sink are injected at
/// construction.
pub struct AlertEvaluator {
    config: EvaluatorConfig,
    sink: Box<dyn AlertSink>,
}

impl AlertEvaluator {
    /// Create an evaluator with the given thresholds and alert destination.
    pub fn new(config: EvaluatorConfig, sink: Box<dyn AlertSink>) -> Self {
        info!("Creating alert evaluator with config: {:?}", config);
        Self { config, sink }
    }

    /// Process a single message. Side-effecting only; never fails.
    ///
    /// Messages that look structured (after trimming: start with `{` and end
    /// with `}`) are decoded as JSON and run through the threshold rules.
    /// Anything else, including bracketed text that fails to decode, takes
    /// the plain-text path.
    pub fn evaluate(&self, message: &str) {
        info!("Processing message: {}", message);

        match try_decode_structured(message) {
            Some(obj) => self.evaluate_structured(&VitalsEvent::from_object(&obj)),
            None => self.evaluate_plain(message),
        }
    }

    /// Run the structured-path rules. Each rule is independent; all that
    /// match fire, none short-circuits the others.
    fn evaluate_structured(&self, evt: &VitalsEvent) {
        let patient = VitalsEvent::render_opaque(evt.patient_id.as_ref());
        let ts = VitalsEvent::render_opaque(evt.ts.as_ref());

        if let Some(hr) = evt.hr {
            if hr > self.config.hr_threshold {
                self.sink.emit(&Alert::new(
                    AlertKind::Tachycardia,
                    format!("ALERT Tachycardia: patient={patient} hr={hr} ts={ts}"),
                ));
            }
        }

        if let Some(gait) = &evt.gait_score {
            if gait.as_f64().is_some_and(|g| g < self.config.gait_score_floor) {
                self.sink.emit(&Alert::new(
                    AlertKind::LowGaitScore,
                    format!("ALERT Low gait_score: patient={patient} gait_score={gait} ts={ts}"),
                ));
            }
        }

        if let Some(steps) = evt.steps {
            if steps > self.config.steps_threshold {
                self.sink.emit(&Alert::new(
                    AlertKind::StepSurge,
                    format!("ALERT Step surge: patient={patient} steps={steps} ts={ts}"),
                ));
            }
        }
    }

    /// Plain-text path: only the fixed-phrase rule applies.
    fn evaluate_plain(&self, message: &str) {
        if message.contains(&self.config.special_phrase) {
            self.sink.emit(&Alert::new(
                AlertKind::SpecialMessage,
                format!("ALERT: The special message was found!\n{message}"),
            ));
        }
    }
}

/// Decode a message as a JSON object if it looks like one.
///
/// The brace heuristic is deliberate: arrays are rejected, and coincidentally
/// bracketed text is attempted and falls through on decode failure. Failure
/// is not an error condition.
fn try_decode_structured(message: &str) -> Option<Map<String, Value>> {
    let trimmed = message.trim();
    if !(trimmed.starts_with('{') && trimmed.ends_with('}')) {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(obj)) => Some(obj),
        Ok(_) => None,
        Err(e) => {
            debug!("Message is not valid JSON, taking plain-text path: {}", e);
            None
        }
    }
}
