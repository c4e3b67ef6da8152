use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap, HeaderValue};
use chrono::{Utc, Duration};
use jsonwebtoken::{encode, decode, Header, Validation, EncodingKey, DecodingKey, Algorithm};
use serde::{Serialize, Deserialize};
use std::convert::Infallible;
use uuid::Uuid;
use crate::error::AppError;

const PURPOSE: &str = "antiforgery";

/// Cookie holding the client nonce every token is bound to.
pub const COOKIE_NAME: &str = "mvc.antiforgery";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub purpose: String,
    pub nonce: String,
    pub exp: usize,
    pub iat: usize,
}

pub fn new_nonce() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Issues a token that form views hand back on the next mutating request.
/// Only valid together with the cookie carrying `nonce`.
pub fn issue_token(secret: &str, nonce: &str) -> Result<String, AppError> {
    let now = Utc::now();
    let exp = now + Duration::hours(2);
    let claims = Claims {
        purpose: PURPOSE.to_string(),
        nonce: nonce.to_string(),
        iat: now.timestamp() as usize,
        exp: exp.timestamp() as usize,
    };
    encode(&Header::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| AppError::internal(format!("Antiforgery token signing failed: {e}")))
}

pub fn verify_token(token: &str, secret: &str, nonce: &str) -> Result<Claims, AppError> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256)
    )
    .map(|d| d.claims)
    .map_err(|e| AppError::antiforgery(format!("Invalid or expired antiforgery token: {e}")))?;

    if claims.purpose != PURPOSE {
        return Err(AppError::antiforgery("Token was not issued for form submission"));
    }
    if claims.nonce != nonce {
        return Err(AppError::antiforgery("Token was issued to a different client"));
    }
    Ok(claims)
}

pub fn nonce_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == COOKIE_NAME && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

pub fn nonce_cookie(nonce: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!("{COOKIE_NAME}={nonce}; Path=/; HttpOnly; SameSite=Strict")).ok()
}

/// The nonce cookie sent with the request, if any.
pub struct AntiforgeryCookie(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for AntiforgeryCookie {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(AntiforgeryCookie(nonce_from_headers(&parts.headers)))
    }
}
