pub mod api_routes;

use axum::http::HeaderValue;
use axum::routing::post;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::routes::api_routes::chat_handler;
use crate::service::relay_service::RelayService;

/// Builds the full application router.
pub fn router(svc: RelayService, config: &AppConfig) -> Router {
    let mut app = Router::new()
        .route("/api/chat", post(chat_handler))
        .with_state(svc);

    // Built widget assets, when present
    if let Some(dir) = &config.static_dir {
        info!("Serving static files from {}", dir.display());
        app = app.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
    }

    app.layer(cors_layer(config.cors_allow_origin.as_deref()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let Some(origin) = origin else {
        return CorsLayer::permissive();
    };
    match HeaderValue::from_str(origin) {
        Ok(value) => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(value))
            .allow_methods([axum::http::Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
        Err(e) => {
            warn!("Ignoring invalid CORS_ALLOW_ORIGIN {origin:?}: {e}");
            CorsLayer::permissive()
        }
    }
}
