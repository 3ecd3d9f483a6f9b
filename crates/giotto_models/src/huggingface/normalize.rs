//! Normalization of heterogeneous upstream response shapes.

use serde_json::Value;

/// Shape matchers tried in priority order against a successful response
/// body. Different model families return different shapes; the first
/// matcher that recognizes the body wins.
const SHAPE_MATCHERS: &[fn(&Value) -> Option<String>] =
    &[sequence_generated_text, mapping_generated_text];

/// Reduce a successful upstream body to a single output string.
pub fn normalize_body(body: &Value) -> String {
    for matcher in SHAPE_MATCHERS {
        if let Some(output) = matcher(body) {
            return output;
        }
    }
    // Unrecognized shape: pass the whole body through as formatted JSON.
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}

/// A sequence whose first element carries a textual `generated_text` field.
fn sequence_generated_text(body: &Value) -> Option<String> {
    body.as_array()?
        .first()?
        .get("generated_text")?
        .as_str()
        .map(String::from)
}

/// A mapping with a textual `generated_text` field.
fn mapping_generated_text(body: &Value) -> Option<String> {
    if !body.is_object() {
        return None;
    }
    body.get("generated_text")?.as_str().map(String::from)
}
