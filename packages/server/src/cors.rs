use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::CorsConfig;

/// Build the CORS layer. Methods and headers are never restricted; origins are
/// unrestricted unless the config lists specific ones.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = match listed_origins(&config.allow_origins) {
        None => AllowOrigin::any(),
        Some(origins) => AllowOrigin::list(origins),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(config.max_age))
}

/// `None` means any origin: the list is empty or contains `"*"`.
/// Entries that are not valid header values are skipped with a warning.
fn listed_origins(allow_origins: &[String]) -> Option<Vec<HeaderValue>> {
    if allow_origins.is_empty() || allow_origins.iter().any(|o| o == "*") {
        return None;
    }

    let origins: Vec<HeaderValue> = allow_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o.escape_debug(), "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        tracing::warn!("No valid CORS origins configured; cross-origin requests will be refused");
    }
    Some(origins)
}
