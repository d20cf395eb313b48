//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: stores, renderer, mailer and assistant handles
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and extractors
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, http::HeaderValue};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router around already-wired services.
///
/// `cors_allow_origin` restricts cross-origin callers to one origin; `None`
/// (or an unparsable value) allows any origin.
pub fn build_app(services: Arc<AppServices>, cors_allow_origin: Option<&str>) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(cors_allow_origin))
            .layer(Extension(services)),
    )
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => layer.allow_origin(origin),
        Some(Err(_)) => {
            tracing::warn!("CORS_ALLOW_ORIGIN is not a valid header value; allowing any origin");
            layer.allow_origin(Any)
        }
        None => layer.allow_origin(Any),
    }
}
