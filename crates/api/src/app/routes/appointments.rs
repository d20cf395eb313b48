use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, put},
};
use chrono::Utc;

use greenscape_appointments::{
    Appointment, AppointmentCode, AppointmentId, AppointmentInfoPatch, NewAppointment, Notice,
    newest_first,
};
use greenscape_core::DomainError;
use greenscape_infra::OutgoingMail;

use crate::app::dto::{self, ApiJson, ApiQuery};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

const NOT_FOUND: &str = "Appointment not found";

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_appointments).post(book_appointment))
        .route("/customer", get(customer_appointments))
        .route("/:id", delete(delete_appointment))
        .route("/:id/site-visit", put(schedule_site_visit))
        .route("/:id/project-status", put(update_project_status))
        .route("/:id/update-info", put(update_info))
}

fn parse_id(raw: &str) -> Result<AppointmentId, ApiError> {
    Ok(raw.parse::<AppointmentId>()?)
}

async fn load(services: &AppServices, id: &AppointmentId) -> Result<Appointment, ApiError> {
    services
        .appointments
        .get(id)
        .await?
        .ok_or_else(|| DomainError::not_found(NOT_FOUND).into())
}

fn mail_for(appointment: &Appointment, notice: Notice) -> OutgoingMail {
    OutgoingMail::notice(appointment.email(), notice.subject, notice.text)
}

pub async fn book_appointment(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<NewAppointment>,
) -> Result<impl IntoResponse, ApiError> {
    let issued: Vec<AppointmentCode> = services
        .appointments
        .list()
        .await?
        .iter()
        .map(Appointment::code)
        .collect();
    let code = AppointmentCode::next_after(&issued);

    let appointment = Appointment::book(AppointmentId::new(), code, body, Utc::now())?;
    services.appointments.put(&appointment).await?;
    tracing::info!(appointment = %appointment.code(), "appointment booked");

    services
        .notify(mail_for(&appointment, appointment.confirmation_notice()))
        .await;

    Ok((
        StatusCode::CREATED,
        Json(dto::AppointmentResponse {
            message: "Appointment booked successfully".to_string(),
            appointment,
        }),
    ))
}

pub async fn list_appointments(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let mut appointments = services.appointments.list().await?;
    newest_first(&mut appointments);
    Ok(Json(appointments))
}

pub async fn customer_appointments(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(query): ApiQuery<dto::CustomerLookup>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let email = dto::present(&query.email)
        .ok_or_else(|| DomainError::validation("email is required"))?;

    let mut appointments: Vec<Appointment> = services
        .appointments
        .list()
        .await?
        .into_iter()
        .filter(|a| a.booked_by(email))
        .collect();
    newest_first(&mut appointments);
    Ok(Json(appointments))
}

pub async fn schedule_site_visit(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<dto::SiteVisitRequest>,
) -> Result<Json<dto::AppointmentResponse>, ApiError> {
    let mut appointment = load(&services, &parse_id(&id)?).await?;
    appointment.schedule_site_visit(body.site_visit_date);
    services.appointments.put(&appointment).await?;

    let emailed = match appointment.site_visit_notice() {
        Some(notice) => services.notify(mail_for(&appointment, notice)).await,
        None => false,
    };
    let message = if emailed {
        "Site visit scheduled and email sent"
    } else {
        "Site visit scheduled"
    };

    Ok(Json(dto::AppointmentResponse {
        message: message.to_string(),
        appointment,
    }))
}

pub async fn update_project_status(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<dto::ProjectStatusRequest>,
) -> Result<Json<dto::AppointmentResponse>, ApiError> {
    let mut appointment = load(&services, &parse_id(&id)?).await?;
    appointment.set_project_status(body.status);
    services.appointments.put(&appointment).await?;

    Ok(Json(dto::AppointmentResponse {
        message: format!("Project status updated to {}", body.status),
        appointment,
    }))
}

pub async fn update_info(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<AppointmentInfoPatch>,
) -> Result<Json<Appointment>, ApiError> {
    let mut appointment = load(&services, &parse_id(&id)?).await?;
    appointment.update_info(patch);
    services.appointments.put(&appointment).await?;
    Ok(Json(appointment))
}

pub async fn delete_appointment(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<dto::MessageResponse>, ApiError> {
    services
        .appointments
        .delete(&parse_id(&id)?)
        .await?
        .ok_or_else(|| DomainError::not_found(NOT_FOUND))?;

    Ok(Json(dto::MessageResponse {
        message: "Appointment deleted successfully",
    }))
}
