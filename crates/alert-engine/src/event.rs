//! Parsed Telemetry Event Model

use serde_json::{Map, Number, Value};

/// A telemetry event decoded from a structured message.
///
/// Every field is independently optional and independently typed; there is no
/// schema tying them together. Type checks are strict: `hr` and `steps` must
/// be JSON integers (floats and booleans are rejected), while `gait_score`
/// accepts both integer and real numbers. A field carrying the wrong type is
/// treated the same as an absent field.
#[derive(Debug, Clone, Default)]
pub struct VitalsEvent {
    /// Heart rate, beats per minute
    pub hr: Option<i64>,
    /// Gait quality score; original number token kept for alert rendering
    pub gait_score: Option<Number>,
    /// Step count over the reporting window
    pub steps: Option<i64>,
    /// Opaque patient identifier, any representable value
    pub patient_id: Option<Value>,
    /// Opaque timestamp value, never validated or parsed
    pub ts: Option<Value>,
}

impl VitalsEvent {
    /// Extract recognized fields from a decoded JSON object.
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            hr: obj.get("hr").and_then(as_strict_int),
            gait_score: obj.get("gait_score").and_then(as_number),
            steps: obj.get("steps").and_then(as_strict_int),
            patient_id: obj.get("patient_id").cloned(),
            ts: obj.get("ts").cloned(),
        }
    }

    /// Render an opaque field for alert text.
    ///
    /// Strings render bare (no quotes); absent and null fields render as
    /// `None`, matching the upstream feed's formatting; anything else renders
    /// as its JSON token.
    pub fn render_opaque(value: Option<&Value>) -> String {
        match value {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => "None".to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/// Accept only JSON integers. `serde_json` never decodes booleans as numbers,
/// and `as_i64` fails for values with a fractional representation.
fn as_strict_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

/// Accept any JSON number, integer or real.
fn as_number(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        _ => None,
    }
}
