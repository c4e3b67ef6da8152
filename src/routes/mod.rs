pub mod employees;
pub mod products;
pub mod test_pages;

use axum::{routing::get, Router};
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use crate::middleware::antiforgery::TOKEN_HEADER;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(employees::routes(state))
        .merge(test_pages::routes())
}

/// Full application: every controller plus the service endpoints and layers.
pub fn build_app(state: AppState, cors_origins: &[String]) -> Router {
    create_router(state.clone())
        .route("/", get(|| async { "MVC samples" }))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

// Only listed origins may read form views cross-origin; an empty list
// leaves the browser's same-origin policy in charge.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, TOKEN_HEADER])
        .allow_credentials(true)
}

async fn health_check() -> &'static str {
    "OK"
}
