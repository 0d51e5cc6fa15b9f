use serde_json::Value;
use tracing::{debug, error, warn};

use crate::config::ApiKey;
use crate::errors::AppError;
use crate::models::{CompletionRequest, UpstreamReply};

pub const MODEL: &str = "gpt-3.5-turbo";
pub const MAX_TOKENS: u32 = 400;

/// Thin client for an OpenAI-style `/chat/completions` endpoint.
/// Responses are returned as received; nothing is normalised here.
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    base_url: String,
}

impl CompletionClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Issues exactly one completion call with `messages` forwarded verbatim.
    pub async fn complete(
        &self,
        api_key: &ApiKey,
        messages: &Value,
    ) -> Result<UpstreamReply, AppError> {
        let url = self.endpoint();
        let payload = CompletionRequest { model: MODEL, messages, max_tokens: MAX_TOKENS };

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key.expose())
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("Completion request to {url} failed: {e}");
                AppError::UpstreamUnreachable(e)
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            error!("Failed to read completion response body: {e}");
            AppError::UpstreamBody(e)
        })?;

        let body = relayable_body(&bytes);

        debug!(%status, "Completion service replied");
        Ok(UpstreamReply { status, body })
    }
}

/// A body that isn't JSON, or is JSON `null`, is relayed as an empty object.
fn relayable_body(bytes: &[u8]) -> Value {
    match serde_json::from_slice(bytes) {
        Ok(Value::Null) => Value::Object(Default::default()),
        Ok(value) => value,
        Err(e) => {
            warn!("Completion service returned non-JSON body ({} bytes): {e}", bytes.len());
            Value::Object(Default::default())
        }
    }
}
