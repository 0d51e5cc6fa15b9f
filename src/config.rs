use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_PORT: u16 = 8080;

/// Secret bearer token for the completion service. `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Everything the relay needs to reach the completion service.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    /// `None` means the relay answers every request with a configuration error.
    pub api_key: Option<ApiKey>,
    pub api_base_url: String,
}

impl RelayConfig {
    pub fn new(api_key: Option<ApiKey>, api_base_url: impl Into<String>) -> Self {
        Self { api_key, api_base_url: api_base_url.into() }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// Directory holding the built widget, served for non-API paths.
    pub static_dir: Option<PathBuf>,
    /// Single allowed CORS origin; permissive when unset.
    pub cors_allow_origin: Option<String>,
    pub relay: RelayConfig,
}

impl AppConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable              | Default                      |
    /// |-----------------------|------------------------------|
    /// | `OPENAI_API_KEY`      | unset                        |
    /// | `OPENAI_API_BASE_URL` | `https://api.openai.com/v1`  |
    /// | `PORT`                | `8080`                       |
    /// | `STATIC_DIR`          | unset                        |
    /// | `CORS_ALLOW_ORIGIN`   | unset                        |
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("OPENAI_API_KEY").map(ApiKey::new);
        let api_base_url = non_empty("OPENAI_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            port: non_empty("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            static_dir: non_empty("STATIC_DIR").map(PathBuf::from),
            cors_allow_origin: non_empty("CORS_ALLOW_ORIGIN"),
            relay: RelayConfig::new(api_key, api_base_url),
        }
    }
}
