use serde_json::Value;

/// Parse a `200 OK` body. Anything that isn't valid JSON comes back as a
/// JSON string holding the raw text.
pub fn parse_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
