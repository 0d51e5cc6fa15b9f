use tracing::{info, warn, Instrument};
use uuid::Uuid;

use crate::config::RelayConfig;
use crate::errors::AppError;
use crate::models::{RelayRequest, UpstreamReply};
use crate::upstream::CompletionClient;

/// Stateless relay: attaches the credential and forwards to the completion service.
#[derive(Clone)]
pub struct RelayService {
    config: RelayConfig,
    client: CompletionClient,
}

impl RelayService {
    pub fn new(config: RelayConfig) -> Self {
        let client = CompletionClient::new(&config.api_base_url);
        Self { config, client }
    }

    pub async fn relay(&self, request: RelayRequest) -> Result<UpstreamReply, AppError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("relay", %request_id);

        async move {
            // ── Credential check (no upstream call without it) ────────────────
            let Some(api_key) = self.config.api_key.as_ref() else {
                warn!("Rejecting chat relay: OPENAI_API_KEY is not configured");
                return Err(AppError::MissingApiKey);
            };

            let messages = request.into_messages();
            let count = messages.as_array().map_or(0, Vec::len);
            info!(messages = count, "Forwarding conversation to completion service");

            let reply = self.client.complete(api_key, &messages).await?;
            info!(status = %reply.status, "Relaying completion response");
            Ok(reply)
        }
        .instrument(span)
        .await
    }
}
