use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use greenscape_assistant::{AssistantError, UNCLEAR_REPLY};
use greenscape_core::DomainError;
use greenscape_infra::{MailError, RenderError, StoreError};

/// Every failure a handler can surface, mapped to one JSON error body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Mail(#[from] MailError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Assistant(#[from] AssistantError),

    /// Malformed request (body or query) rejected before reaching a handler.
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Domain(DomainError::Validation(msg)) => {
                json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
            }
            ApiError::Domain(DomainError::InvalidId(msg)) => {
                json_error(StatusCode::BAD_REQUEST, "invalid_id", msg)
            }
            ApiError::Domain(DomainError::NotFound(msg)) => {
                json_error(StatusCode::NOT_FOUND, "not_found", msg)
            }
            ApiError::BadRequest(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
            ApiError::Store(e) => {
                tracing::error!(error = %e, "store failure");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
            }
            ApiError::Render(e) => {
                tracing::error!(error = %e, "report rendering failed");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "render_error", e.to_string())
            }
            ApiError::Mail(MailError::NotConfigured) => json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "configuration_error",
                MailError::NotConfigured.to_string(),
            ),
            ApiError::Mail(e) => {
                tracing::warn!(error = %e, "mail relay failure");
                json_error(StatusCode::BAD_GATEWAY, "upstream_error", e.to_string())
            }
            ApiError::Assistant(e) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({
                    "error": "validation_error",
                    "message": e.to_string(),
                    "reply": UNCLEAR_REPLY,
                })),
            )
                .into_response(),
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
