use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/chat`.
///
/// `messages` is kept as raw JSON: the relay forwards whatever the caller
/// sent without validating it.
#[derive(Debug, Default, Deserialize)]
pub struct RelayRequest {
    #[serde(default)]
    pub messages: Option<Value>,
}

impl RelayRequest {
    /// Lenient parse: anything that is not a JSON object counts as an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// The caller's messages, or `[]` when absent or `null`.
    pub fn into_messages(self) -> Value {
        self.messages.unwrap_or_else(|| Value::Array(Vec::new()))
    }
}

/// Payload sent to `<base>/chat/completions`.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a Value,
    pub max_tokens: u32,
}

/// What came back from the completion service, passed through untouched.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Value,
}
