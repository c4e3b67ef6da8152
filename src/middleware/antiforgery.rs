use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::{HeaderName, Method};
use crate::auth::antiforgery::{nonce_from_headers, verify_token};
use crate::error::AppError;
use crate::state::AppState;

pub const TOKEN_HEADER: HeaderName = HeaderName::from_static("requestverificationtoken");

// Safe methods pass through; everything else must carry a valid token
// together with the nonce cookie it was issued for.
pub async fn require_antiforgery(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if matches!(*req.method(), Method::GET | Method::HEAD | Method::OPTIONS) {
        return next.run(req).await;
    }

    let token = match req.headers()
        .get(&TOKEN_HEADER)
        .and_then(|v| v.to_str().ok()) {
        Some(t) if !t.is_empty() => t,
        _ => {
            tracing::warn!(uri = %req.uri(), "Missing antiforgery token");
            return AppError::antiforgery("Missing antiforgery token").into_response();
        }
    };

    let nonce = match nonce_from_headers(req.headers()) {
        Some(n) => n,
        None => {
            tracing::warn!(uri = %req.uri(), "Missing antiforgery cookie");
            return AppError::antiforgery("Missing antiforgery cookie").into_response();
        }
    };

    if let Err(e) = verify_token(token, &state.antiforgery_secret, &nonce) {
        tracing::warn!(uri = %req.uri(), "Rejected antiforgery token");
        return e.into_response();
    }

    next.run(req).await
}
