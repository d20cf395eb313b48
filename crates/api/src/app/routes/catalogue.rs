use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};

use greenscape_appointments::{Service, ServiceDetails, ServiceId};
use greenscape_core::DomainError;

use crate::app::dto::{self, ApiJson};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

const NOT_FOUND: &str = "Service not found";

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_services))
        .route("/add", post(add_service))
        .route("/update/:id", put(update_service))
        .route("/delete/:id", delete(delete_service))
}

fn parse_id(raw: &str) -> Result<ServiceId, ApiError> {
    Ok(raw.parse::<ServiceId>()?)
}

pub async fn list_services(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<Service>>, ApiError> {
    Ok(Json(services.services.list().await?))
}

pub async fn add_service(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<ServiceDetails>,
) -> Result<impl IntoResponse, ApiError> {
    let service = Service::create(ServiceId::new(), body)?;
    services.services.put(&service).await?;
    tracing::info!(service = service.name(), "catalogue service added");

    Ok((
        StatusCode::CREATED,
        Json(dto::ServiceResponse {
            message: "Service added successfully",
            service,
        }),
    ))
}

pub async fn update_service(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<ServiceDetails>,
) -> Result<Json<dto::ServiceResponse>, ApiError> {
    let id = parse_id(&id)?;
    let mut service = services
        .services
        .get(&id)
        .await?
        .ok_or_else(|| DomainError::not_found(NOT_FOUND))?;
    service.replace_details(body)?;
    services.services.put(&service).await?;

    Ok(Json(dto::ServiceResponse {
        message: "Service updated successfully",
        service,
    }))
}

pub async fn delete_service(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<dto::MessageResponse>, ApiError> {
    services
        .services
        .delete(&parse_id(&id)?)
        .await?
        .ok_or_else(|| DomainError::not_found(NOT_FOUND))?;

    Ok(Json(dto::MessageResponse {
        message: "Service deleted successfully",
    }))
}
