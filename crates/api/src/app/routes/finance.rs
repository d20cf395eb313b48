//! Ledger transactions, petty-cash entries and invoices.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use greenscape_core::DomainError;
use greenscape_finance::{
    Invoice, InvoiceId, InvoicePatch, MinorTransaction, MinorTransactionId, NewInvoice,
    NewMinorTransaction, NewTransaction, Transaction, TransactionId, TransactionPatch,
};

use crate::app::dto::{self, ApiJson};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn transactions() -> Router {
    Router::new()
        .route("/", get(list_transactions).post(add_transaction))
        .route(
            "/:id",
            get(get_transaction).put(update_transaction).delete(delete_transaction),
        )
}

pub fn minor_transactions() -> Router {
    Router::new()
        .route("/", get(list_minor))
        .route("/add", post(add_minor))
        .route("/:id", get(get_minor).put(update_minor).delete(delete_minor))
}

pub fn invoices() -> Router {
    Router::new()
        .route("/", get(list_invoices).post(add_invoice))
        .route("/:id", get(get_invoice).put(update_invoice).delete(delete_invoice))
}

// -------------------------
// Transactions
// -------------------------

const TRANSACTION_NOT_FOUND: &str = "Transaction not found";

async fn load_transaction(services: &AppServices, raw: &str) -> Result<Transaction, ApiError> {
    let id = raw.parse::<TransactionId>()?;
    services
        .transactions
        .get(&id)
        .await?
        .ok_or_else(|| DomainError::not_found(TRANSACTION_NOT_FOUND).into())
}

pub async fn list_transactions(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    Ok(Json(services.transactions.list().await?))
}

pub async fn add_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewTransaction>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction = Transaction::create(TransactionId::new(), body)?;
    services.transactions.put(&transaction).await?;
    tracing::info!(kind = ?transaction.kind(), amount = transaction.amount(), "transaction recorded");
    Ok((StatusCode::CREATED, Json(transaction)))
}

pub async fn get_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, ApiError> {
    Ok(Json(load_transaction(&services, &id).await?))
}

pub async fn update_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<TransactionPatch>,
) -> Result<Json<Transaction>, ApiError> {
    let mut transaction = load_transaction(&services, &id).await?;
    transaction.apply(patch)?;
    services.transactions.put(&transaction).await?;
    Ok(Json(transaction))
}

pub async fn delete_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<dto::MessageResponse>, ApiError> {
    services
        .transactions
        .delete(&id.parse::<TransactionId>()?)
        .await?
        .ok_or_else(|| DomainError::not_found(TRANSACTION_NOT_FOUND))?;

    Ok(Json(dto::MessageResponse {
        message: "Transaction deleted successfully",
    }))
}

// -------------------------
// Petty cash
// -------------------------

const MINOR_NOT_FOUND: &str = "Minor transaction not found";

async fn load_minor(services: &AppServices, raw: &str) -> Result<MinorTransaction, ApiError> {
    let id = raw.parse::<MinorTransactionId>()?;
    services
        .minor_transactions
        .get(&id)
        .await?
        .ok_or_else(|| DomainError::not_found(MINOR_NOT_FOUND).into())
}

pub async fn list_minor(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<MinorTransaction>>, ApiError> {
    Ok(Json(services.minor_transactions.list().await?))
}

pub async fn add_minor(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewMinorTransaction>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = MinorTransaction::create(MinorTransactionId::new(), body, Utc::now())?;
    services.minor_transactions.put(&entry).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn get_minor(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<MinorTransaction>, ApiError> {
    Ok(Json(load_minor(&services, &id).await?))
}

pub async fn update_minor(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<NewMinorTransaction>,
) -> Result<Json<MinorTransaction>, ApiError> {
    let mut entry = load_minor(&services, &id).await?;
    entry.replace(body, Utc::now())?;
    services.minor_transactions.put(&entry).await?;
    Ok(Json(entry))
}

pub async fn delete_minor(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<dto::MessageResponse>, ApiError> {
    services
        .minor_transactions
        .delete(&id.parse::<MinorTransactionId>()?)
        .await?
        .ok_or_else(|| DomainError::not_found(MINOR_NOT_FOUND))?;

    Ok(Json(dto::MessageResponse {
        message: "Minor transaction deleted successfully",
    }))
}

// -------------------------
// Invoices
// -------------------------

const INVOICE_NOT_FOUND: &str = "Invoice not found";

async fn load_invoice(services: &AppServices, raw: &str) -> Result<Invoice, ApiError> {
    let id = raw.parse::<InvoiceId>()?;
    services
        .invoices
        .get(&id)
        .await?
        .ok_or_else(|| DomainError::not_found(INVOICE_NOT_FOUND).into())
}

pub async fn list_invoices(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<Invoice>>, ApiError> {
    Ok(Json(services.invoices.list().await?))
}

pub async fn add_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewInvoice>,
) -> Result<impl IntoResponse, ApiError> {
    let invoice = Invoice::issue(InvoiceId::new(), body, Utc::now())?;
    services.invoices.put(&invoice).await?;
    tracing::info!(total = invoice.total_amount(), "invoice issued");
    Ok((StatusCode::CREATED, Json(invoice)))
}

pub async fn get_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<Invoice>, ApiError> {
    Ok(Json(load_invoice(&services, &id).await?))
}

pub async fn update_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<InvoicePatch>,
) -> Result<Json<Invoice>, ApiError> {
    let mut invoice = load_invoice(&services, &id).await?;
    invoice.apply(patch, Utc::now())?;
    services.invoices.put(&invoice).await?;
    Ok(Json(invoice))
}

pub async fn delete_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<dto::MessageResponse>, ApiError> {
    services
        .invoices
        .delete(&id.parse::<InvoiceId>()?)
        .await?
        .ok_or_else(|| DomainError::not_found(INVOICE_NOT_FOUND))?;

    Ok(Json(dto::MessageResponse {
        message: "Invoice deleted successfully",
    }))
}
