use std::sync::Arc;

use axum::{Json, extract::Extension};

use crate::app::dto::{self, ApiJson};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

/// Answer the last message of a chat transcript.
pub async fn chat(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<dto::ChatRequest>,
) -> Result<Json<dto::ChatReply>, ApiError> {
    let reply = services.assistant.respond(&body.messages)?;
    tracing::debug!(intent = ?reply.intent, score = reply.score, "chatbot reply");
    Ok(Json(dto::ChatReply { reply: reply.text }))
}
