// src/dtos/view.rs
use axum::{http::{header, HeaderValue, StatusCode}, response::{IntoResponse, Response}, Json};
use serde::Serialize;
use crate::dtos::employee::FieldError;

/// A named render target and the model handed to it.
#[derive(Debug, Serialize)]
pub struct View<M> {
    pub view: &'static str,
    pub model: M,
}

impl<M: Serialize> View<M> {
    pub fn new(view: &'static str, model: M) -> Self {
        Self { view, model }
    }
}

impl View<()> {
    pub fn empty(view: &'static str) -> Self {
        Self { view, model: () }
    }
}

impl<M: Serialize> IntoResponse for View<M> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// A view containing a form to be posted back. Carries the antiforgery token
/// and, when re-rendered after a failed submission, the field errors.
#[derive(Debug, Serialize)]
pub struct FormView<M> {
    pub view: &'static str,
    pub model: M,
    pub antiforgery_token: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
    /// Nonce cookie to hand out when the client did not send one yet.
    #[serde(skip)]
    pub set_cookie: Option<HeaderValue>,
}

impl<M: Serialize> IntoResponse for FormView<M> {
    fn into_response(self) -> Response {
        let status = if self.errors.is_empty() {
            StatusCode::OK
        } else {
            StatusCode::UNPROCESSABLE_ENTITY
        };
        let set_cookie = self.set_cookie.clone();
        let mut resp = (status, Json(self)).into_response();
        if let Some(cookie) = set_cookie {
            resp.headers_mut().insert(header::SET_COOKIE, cookie);
        }
        resp
    }
}
