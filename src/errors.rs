use thiserror::Error;

/// Top-level application error.
/// The `Display` text of each variant is what the client sees in `{"error": ...}`.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Configuration errors ─────────────────────────────────────────────────
    #[error("OpenAI API key not configured.")]
    MissingApiKey,

    // ── Upstream errors ──────────────────────────────────────────────────────
    #[error("Upstream completion service unreachable.")]
    UpstreamUnreachable(#[source] reqwest::Error),

    #[error("Failed to read upstream response.")]
    UpstreamBody(#[source] reqwest::Error),
}

impl AppError {
    pub fn is_upstream(&self) -> bool {
        matches!(self, AppError::UpstreamUnreachable(_) | AppError::UpstreamBody(_))
    }
}
