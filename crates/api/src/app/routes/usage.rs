use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use greenscape_core::DomainError;
use greenscape_usage::{NewUsageRecord, UsagePatch, UsageRecord, UsageRecordId};

use crate::app::dto::{self, ApiJson};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_reports).post(add_report))
        .route("/:id", get(get_report).put(update_report).delete(delete_report))
}

async fn load(services: &AppServices, raw_id: &str) -> Result<UsageRecord, ApiError> {
    let id: UsageRecordId = raw_id.parse()?;
    services
        .usage
        .get(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("No usage report found with this ID").into())
}

pub async fn list_reports(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<dto::UsageList>, ApiError> {
    let usage_reports = services.usage.list().await?;
    if usage_reports.is_empty() {
        return Err(DomainError::not_found("No usage reports found").into());
    }
    Ok(Json(dto::UsageList { usage_reports }))
}

pub async fn add_report(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewUsageRecord>,
) -> Result<impl IntoResponse, ApiError> {
    let record = UsageRecord::create(UsageRecordId::new(), body)?;
    services.usage.put(&record).await?;
    tracing::info!(record_id = %record.id_typed(), project = record.project_name(), "usage recorded");

    Ok((StatusCode::CREATED, Json(dto::UsageEnvelope { usage_report: record })))
}

pub async fn get_report(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<dto::UsageEnvelope>, ApiError> {
    let usage_report = load(&services, &id).await?;
    Ok(Json(dto::UsageEnvelope { usage_report }))
}

pub async fn update_report(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<UsagePatch>,
) -> Result<Json<dto::UsageEnvelope>, ApiError> {
    let mut record = load(&services, &id).await?;
    record.apply(patch)?;
    services.usage.put(&record).await?;
    Ok(Json(dto::UsageEnvelope { usage_report: record }))
}

pub async fn delete_report(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<dto::MessageResponse>, ApiError> {
    let id: UsageRecordId = id.parse()?;
    services
        .usage
        .delete(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Usage report not found"))?;

    Ok(Json(dto::MessageResponse {
        message: "Usage report deleted successfully",
    }))
}
