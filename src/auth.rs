//! HTTP basic authentication gate.
//!
//! Every route extracts a [`BasicAuthUser`]; the extractor checks the
//! `Authorization` header against the configured credentials before any
//! handler logic runs.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, web};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

use crate::models::config::BasicAuthConfig;

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuthUser {
    pub username: String,
}

/// Reasons a request fails the auth gate. All map to 401.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing credentials")]
    MissingCredentials,
    #[error("malformed authorization header")]
    MalformedHeader,
    #[error("invalid credentials")]
    InvalidCredentials,
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized()
            .insert_header((header::WWW_AUTHENTICATE, "Basic realm=\"auctions\""))
            .finish()
    }
}

impl FromRequest for BasicAuthUser {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<BasicAuthUser, AuthError> {
    let config = req
        .app_data::<web::Data<BasicAuthConfig>>()
        .ok_or_else(|| {
            log::error!("Basic auth credentials are not registered in app data");
            AuthError::InvalidCredentials
        })?;

    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    let encoded = header_value
        .strip_prefix("Basic ")
        .ok_or(AuthError::MalformedHeader)?;

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| AuthError::MalformedHeader)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::MalformedHeader)?;

    let (username, password) = decoded.split_once(':').ok_or(AuthError::MalformedHeader)?;

    if username == config.username && password == config.password {
        Ok(BasicAuthUser {
            username: username.to_string(),
        })
    } else {
        Err(AuthError::InvalidCredentials)
    }
}
