use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use greenscape_core::DomainError;
use greenscape_maintenance::{MaintenancePatch, MaintenanceRecord, MaintenanceRecordId, NewMaintenanceRecord};

use crate::app::dto::{self, ApiJson};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

const NOT_FOUND: &str = "No maintenance record found with this ID";

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_records).post(add_record))
        .route("/:id", get(get_record).put(update_record).delete(delete_record))
}

fn parse_id(raw: &str) -> Result<MaintenanceRecordId, ApiError> {
    Ok(raw.parse::<MaintenanceRecordId>()?)
}

async fn load(services: &AppServices, id: &MaintenanceRecordId) -> Result<MaintenanceRecord, ApiError> {
    services
        .maintenance
        .get(id)
        .await?
        .ok_or_else(|| DomainError::not_found(NOT_FOUND).into())
}

pub async fn list_records(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<dto::MaintenanceList>, ApiError> {
    let maintenance_records = services.maintenance.list().await?;
    if maintenance_records.is_empty() {
        return Err(DomainError::not_found("No maintenance records found").into());
    }
    Ok(Json(dto::MaintenanceList { maintenance_records }))
}

pub async fn add_record(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewMaintenanceRecord>,
) -> Result<impl IntoResponse, ApiError> {
    let record = MaintenanceRecord::create(MaintenanceRecordId::new(), body)?;
    services.maintenance.put(&record).await?;
    tracing::info!(record_id = %record.id_typed(), item = record.item_name(), "maintenance logged");

    Ok((
        StatusCode::CREATED,
        Json(dto::MaintenanceEnvelope {
            maintenance_record: record,
        }),
    ))
}

pub async fn get_record(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<dto::MaintenanceEnvelope>, ApiError> {
    let maintenance_record = load(&services, &parse_id(&id)?).await?;
    Ok(Json(dto::MaintenanceEnvelope { maintenance_record }))
}

pub async fn update_record(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<MaintenancePatch>,
) -> Result<Json<dto::MaintenanceEnvelope>, ApiError> {
    let mut record = load(&services, &parse_id(&id)?).await?;
    record.apply(patch)?;
    services.maintenance.put(&record).await?;
    Ok(Json(dto::MaintenanceEnvelope {
        maintenance_record: record,
    }))
}

pub async fn delete_record(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<dto::MessageResponse>, ApiError> {
    services
        .maintenance
        .delete(&parse_id(&id)?)
        .await?
        .ok_or_else(|| DomainError::not_found("Maintenance record not found"))?;

    Ok(Json(dto::MessageResponse {
        message: "Maintenance record deleted successfully",
    }))
}
