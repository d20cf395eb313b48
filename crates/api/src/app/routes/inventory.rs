use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post, put},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value as JsonValue;

use greenscape_core::DomainError;
use greenscape_infra::{OutgoingMail, ReportDocument};
use greenscape_inventory::{
    InventoryItem, InventoryItemId, InventoryQuery, NewInventoryItem, ReorderField, ReorderThreshold,
    ReportKind, ReportTable, evaluate,
};

use crate::app::dto::{self, ApiJson, ApiQuery};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(add_item))
        .route("/low-stock", get(low_stock))
        .route("/low-stock/email", post(email_low_stock_report))
        .route("/report", get(download_report))
        .route("/send-email", post(send_pdf_report))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
        .route("/:id/reorder-level", put(update_reorder_level))
        .route("/:id/reorder-amount", put(update_reorder_amount))
}

fn parse_id(raw: &str) -> Result<InventoryItemId, ApiError> {
    Ok(raw.parse::<InventoryItemId>()?)
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(query): ApiQuery<InventoryQuery>,
) -> Result<Json<dto::InventoryList>, ApiError> {
    let inventories = services.query_inventory(&query).await?;
    Ok(Json(dto::InventoryList { inventories }))
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewInventoryItem>,
) -> Result<impl IntoResponse, ApiError> {
    let item = InventoryItem::create(InventoryItemId::new(), body)?;
    services.inventories.put(&item).await?;
    tracing::info!(item_id = %item.id_typed(), name = item.name(), "inventory item added");

    Ok((StatusCode::CREATED, Json(dto::InventoryEnvelope { inventory: item })))
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<dto::InventoryEnvelope>, ApiError> {
    let inventory = services.inventory_item(&parse_id(&id)?).await?;
    Ok(Json(dto::InventoryEnvelope { inventory }))
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<NewInventoryItem>,
) -> Result<Json<dto::InventoryEnvelope>, ApiError> {
    let mut item = services.inventory_item(&parse_id(&id)?).await?;
    item.replace_details(body)?;
    services.inventories.put(&item).await?;
    Ok(Json(dto::InventoryEnvelope { inventory: item }))
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<dto::InventoryDeleted>, ApiError> {
    let inventory = services
        .inventories
        .delete(&parse_id(&id)?)
        .await?
        .ok_or_else(|| DomainError::not_found("Inventory item not found"))?;

    Ok(Json(dto::InventoryDeleted {
        message: "Inventory item deleted successfully",
        inventory,
    }))
}

pub async fn update_reorder_level(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<JsonValue>,
) -> Result<Json<InventoryItem>, ApiError> {
    update_threshold(&services, &id, ReorderField::Level, &body).await
}

pub async fn update_reorder_amount(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<JsonValue>,
) -> Result<Json<InventoryItem>, ApiError> {
    update_threshold(&services, &id, ReorderField::Amount, &body).await
}

/// Validate first; the store is only read once the value is acceptable.
async fn update_threshold(
    services: &AppServices,
    id: &str,
    field: ReorderField,
    body: &JsonValue,
) -> Result<Json<InventoryItem>, ApiError> {
    let raw = body.get(field.wire_name()).unwrap_or(&JsonValue::Null);
    let value = ReorderThreshold::parse(field, raw)?;
    let id = parse_id(id)?;

    let mut item = services.inventory_item(&id).await?;
    item.set_threshold(field, value);
    services.inventories.put(&item).await?;

    tracing::info!(item_id = %id, field = field.wire_name(), value = value.get(), "reorder threshold updated");
    Ok(Json(item))
}

pub async fn low_stock(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(query): ApiQuery<InventoryQuery>,
) -> Result<Json<dto::LowStockResponse>, ApiError> {
    let items = services.query_inventory(&query).await?;
    Ok(Json(evaluate(&items).into()))
}

fn build_table(kind: ReportKind, items: &[InventoryItem]) -> ReportTable {
    match kind {
        ReportKind::Inventory => ReportTable::inventory(items),
        ReportKind::LowStock => ReportTable::low_stock(&evaluate(items)),
    }
}

pub async fn download_report(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(params): ApiQuery<dto::ReportParams>,
) -> Result<impl IntoResponse, ApiError> {
    let kind = params.kind.unwrap_or(ReportKind::Inventory);
    let items = services.query_inventory(&params.filter).await?;
    let document = services.renderer.document(&build_table(kind, &items))?;

    let disposition = format!("attachment; filename=\"{}\"", document.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, document.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.bytes,
    ))
}

/// Mail a low-stock PDF rendered by the client.
pub async fn send_pdf_report(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<dto::SendPdfRequest>,
) -> Result<Json<dto::MessageResponse>, ApiError> {
    let (Some(pdf_data), Some(recipient)) = (dto::present(&body.pdf_data), dto::present(&body.recipient_email))
    else {
        return Err(DomainError::validation("Missing required data").into());
    };

    let bytes = STANDARD
        .decode(pdf_data)
        .map_err(|e| DomainError::validation(format!("pdfData is not valid base64: {e}")))?;

    let mail = OutgoingMail::report(ReportDocument::low_stock_pdf(bytes), recipient);
    services.mailer.send(&mail).await?;

    Ok(Json(dto::MessageResponse {
        message: "Email sent successfully",
    }))
}

/// Render the (filtered) low-stock report server-side and mail it. Nothing is
/// sent while no item needs reordering.
pub async fn email_low_stock_report(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<dto::EmailLowStockRequest>,
) -> Result<Json<dto::MessageResponse>, ApiError> {
    let Some(recipient) = dto::present(&body.recipient_email) else {
        return Err(DomainError::validation("Missing required data").into());
    };

    let items = services.query_inventory(&body.filter).await?;
    let evaluation = evaluate(&items);
    if evaluation.is_empty() {
        return Err(DomainError::validation("No low stock items to report").into());
    }

    let document = services.renderer.document(&ReportTable::low_stock(&evaluation))?;
    services
        .mailer
        .send(&OutgoingMail::report(document, recipient))
        .await?;

    Ok(Json(dto::MessageResponse {
        message: "Email sent successfully",
    }))
}
