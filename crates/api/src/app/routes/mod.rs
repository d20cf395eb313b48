use axum::{
    Router,
    routing::{get, post},
};

pub mod appointments;
pub mod catalogue;
pub mod chatbot;
pub mod feedback;
pub mod finance;
pub mod inventory;
pub mod maintenance;
pub mod system;
pub mod usage;

/// Router for every business endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/chatbot", post(chatbot::chat))
        .nest("/inventories", inventory::router())
        .nest("/maintenance", maintenance::router())
        .nest("/usage", usage::router())
        .nest("/appointments", appointments::router())
        .nest("/services", catalogue::router())
        .nest("/feedback", feedback::router())
        .nest("/transactions", finance::transactions())
        .nest("/minor-transactions", finance::minor_transactions())
        .nest("/invoices", finance::invoices())
}
