use axum::extract::{FromRequest, FromRequestParts};
use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

use greenscape_appointments::{Appointment, ProjectStatus, Service};
use greenscape_assistant::ChatMessage;
use greenscape_feedback::Feedback;
use greenscape_inventory::{
    InventoryItem, InventoryQuery, LowStockEntry, LowStockEvaluation, ReportKind, SeverityCounts,
    StockSeverity,
};
use greenscape_maintenance::MaintenanceRecord;
use greenscape_usage::UsageRecord;

use crate::app::errors::ApiError;

// -------------------------
// Extractors
// -------------------------

/// `axum::Json` with rejections reported as [`ApiError`] bodies.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` with rejections reported as [`ApiError`] bodies.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `GET /inventories/report`.
#[derive(Debug, Deserialize)]
pub struct ReportParams {
    pub kind: Option<ReportKind>,
    #[serde(flatten)]
    pub filter: InventoryQuery,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendPdfRequest {
    #[serde(default)]
    pub pdf_data: Option<String>,
    #[serde(default)]
    pub recipient_email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailLowStockRequest {
    #[serde(default)]
    pub recipient_email: Option<String>,
    #[serde(flatten)]
    pub filter: InventoryQuery,
}

#[derive(Debug, Deserialize)]
pub struct CustomerLookup {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteVisitRequest {
    pub site_visit_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct ProjectStatusRequest {
    pub status: ProjectStatus,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct InventoryList {
    pub inventories: Vec<InventoryItem>,
}

#[derive(Debug, Serialize)]
pub struct InventoryEnvelope {
    pub inventory: InventoryItem,
}

#[derive(Debug, Serialize)]
pub struct InventoryDeleted {
    pub message: &'static str,
    pub inventory: InventoryItem,
}

#[derive(Debug, Serialize)]
pub struct LowStockResponse {
    pub items: Vec<LowStockEntry>,
    pub counts: SeverityCounts,
    pub overall: Option<StockSeverity>,
    /// Alert banner text; `null` when nothing needs reordering.
    pub message: Option<String>,
}

impl From<LowStockEvaluation> for LowStockResponse {
    fn from(evaluation: LowStockEvaluation) -> Self {
        let message = evaluation.notification();
        Self {
            items: evaluation.items,
            counts: evaluation.counts,
            overall: evaluation.overall,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceList {
    pub maintenance_records: Vec<MaintenanceRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceEnvelope {
    pub maintenance_record: MaintenanceRecord,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageList {
    pub usage_reports: Vec<UsageRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEnvelope {
    pub usage_report: UsageRecord,
}

#[derive(Debug, Serialize)]
pub struct AppointmentResponse {
    pub message: String,
    pub appointment: Appointment,
}

#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    pub message: &'static str,
    pub service: Service,
}

#[derive(Debug, Serialize)]
pub struct FeedbackList {
    pub feedbacks: Vec<Feedback>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Trimmed, non-empty value of an optional text field.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
