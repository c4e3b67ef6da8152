// Router-level helpers for handler tests. Everything runs against the
// in-memory employee store.
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use crate::database::EmployeeDbContext;
use crate::middleware::antiforgery::TOKEN_HEADER;
use crate::routes::build_app;
use crate::state::AppState;

pub const SECRET: &str = "test-antiforgery-secret";

/// A form token and the `name=value` cookie pair it is bound to.
#[derive(Debug, Clone)]
pub struct FormToken {
    pub token: String,
    pub cookie: String,
}

pub fn app() -> Router {
    build_app(AppState::new(EmployeeDbContext::in_memory(), SECRET), &[])
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    get_with_cookie(app, uri, None).await
}

pub async fn get_with_cookie(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(c) = cookie {
        builder = builder.header(header::COOKIE, c);
    }
    let req = builder.body(Body::empty()).unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: &Value, token: Option<&FormToken>) -> Response<Body> {
    post_raw(app, uri, body.to_string(), token).await
}

pub async fn post_raw(app: &Router, uri: &str, body: String, token: Option<&FormToken>) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(t) = token {
        builder = builder
            .header(TOKEN_HEADER, t.token.as_str())
            .header(header::COOKIE, t.cookie.as_str());
    }
    let req = builder.body(Body::from(body)).unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `name=value` part of the response's Set-Cookie header.
pub fn issued_cookie(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

/// Fetches a blank create form as a fresh client and returns its token.
pub async fn token(app: &Router) -> FormToken {
    let resp = get(app, "/Employee/Create").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = issued_cookie(&resp).unwrap();
    let token = body_json(resp).await["antiforgery_token"]
        .as_str()
        .unwrap()
        .to_string();
    FormToken { token, cookie }
}

/// Rows currently listed by the index view.
pub async fn listed(app: &Router) -> Vec<Value> {
    let resp = get(app, "/Employee/Index").await;
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await["model"].as_array().unwrap().clone()
}

pub fn location(resp: &Response<Body>) -> Option<&str> {
    resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok())
}
