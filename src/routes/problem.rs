use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Problem-details body returned for every failed request.
///
/// Shape on the wire:
/// `{"type":"about:blank","title":"Bad Request","status":400,"detail":"...","instance":"/auctions"}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub instance: String,
}

impl ProblemDetail {
    pub fn new(status: StatusCode, detail: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            problem_type: "about:blank".to_string(),
            title: status.canonical_reason().unwrap_or("Unknown").to_string(),
            status: status.as_u16(),
            detail: detail.into(),
            instance: instance.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>, instance: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail, instance)
    }

    pub fn not_found(detail: impl Into<String>, instance: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail, instance)
    }

    pub fn internal_server_error(
        detail: impl Into<String>,
        instance: impl Into<String>,
    ) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail, instance)
    }
}
