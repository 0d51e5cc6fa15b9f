use gloo_net::http::Request;
use serde_json::Value;

use crate::models::RelayRequest;

/// Path of the relay endpoint on the backend.
const RELAY_PATH: &str = "/api/chat";

/// Relay URL. Same-origin unless `CHAT_API_BASE` is set at build time.
fn relay_url() -> String {
    format!("{}{RELAY_PATH}", option_env!("CHAT_API_BASE").unwrap_or(""))
}

/// Posts the conversation to the relay and returns the JSON body.
///
/// The HTTP status is deliberately ignored: an error body goes through reply
/// extraction like any other. Only network and parse failures are errors.
pub async fn send_chat(request: &RelayRequest) -> Result<Value, String> {
    let resp = Request::post(&relay_url())
        .json(request)
        .map_err(|e| format!("Serialize error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.ok() {
        log::warn!("Relay answered {}", resp.status());
    }

    resp.json::<Value>()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}
