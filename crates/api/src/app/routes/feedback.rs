use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use chrono::Utc;

use greenscape_core::DomainError;
use greenscape_feedback::{Feedback, FeedbackId, NewFeedback, newest_first};

use crate::app::dto::{self, ApiJson};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/create", post(submit_feedback))
        .route("/all", get(list_feedback))
        .route("/delete/:id", delete(delete_feedback))
}

pub async fn submit_feedback(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewFeedback>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = Feedback::submit(FeedbackId::new(), body, Utc::now())?;
    services.feedback.put(&entry).await?;
    tracing::info!(department = entry.department(), rating = entry.rating(), "feedback submitted");

    Ok((
        StatusCode::CREATED,
        Json(dto::MessageResponse {
            message: "Feedback submitted successfully.",
        }),
    ))
}

pub async fn list_feedback(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<dto::FeedbackList>, ApiError> {
    let mut feedbacks = services.feedback.list().await?;
    newest_first(&mut feedbacks);
    Ok(Json(dto::FeedbackList { feedbacks }))
}

pub async fn delete_feedback(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<dto::MessageResponse>, ApiError> {
    let id = id.parse::<FeedbackId>()?;
    services
        .feedback
        .delete(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Feedback not found."))?;

    Ok(Json(dto::MessageResponse {
        message: "Feedback deleted successfully.",
    }))
}
