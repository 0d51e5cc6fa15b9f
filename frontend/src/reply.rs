use serde_json::Value;

pub const NO_REPLY: &str = "Sorry, no reply.";

/// Pulls a reply string out of one response shape.
pub type ReplyStrategy = fn(&Value) -> Option<String>;

/// Tried in order; the first hit wins.
pub const REPLY_STRATEGIES: &[ReplyStrategy] = &[choice_content, flat_message];

/// `choices[0].message.content` (chat-completions shape).
pub fn choice_content(json: &Value) -> Option<String> {
    json.pointer("/choices/0/message/content").and_then(as_text)
}

/// Top-level `message` field.
pub fn flat_message(json: &Value) -> Option<String> {
    json.get("message").and_then(as_text)
}

pub fn extract_reply(json: &Value) -> String {
    REPLY_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(json))
        .unwrap_or_else(|| NO_REPLY.to_string())
}

// null counts as absent; everything else is coerced like JavaScript `String(value)`.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(js_string(other)),
    }
}

fn js_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            // 1.0 prints as "1"
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(js_string).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
