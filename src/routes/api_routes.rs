use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::errors::AppError;
use crate::models::RelayRequest;
use crate::service::relay_service::RelayService;

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST `/api/chat` — forwards `{messages}` to the completion service and
/// relays its status and JSON body unchanged.
pub async fn chat_handler(State(svc): State<RelayService>, body: Bytes) -> Response {
    let request = RelayRequest::from_body(&body);

    match svc.relay(request).await {
        Ok(reply) => (reply.status, Json(reply.body)).into_response(),
        Err(err) => error_response(&err),
    }
}

// ── Helper ────────────────────────────────────────────────────────────────────

fn error_response(err: &AppError) -> Response {
    // 502 when the completion service couldn't be reached or read, 500 otherwise.
    let status = if err.is_upstream() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
