use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use ojgate_config::CorsConfig;
use tower_http::cors::CorsLayer;
use tracing::warn;

/// Credentialed CORS for the configured origins.
///
/// Installed outside the auth middleware so preflight requests are answered
/// without a credential.
pub fn cors_layer(cors_config: &CorsConfig) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(cors_config.max_age))
}
