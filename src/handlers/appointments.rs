// src/handlers/appointments.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::appointment::{Appointment, AppointmentStatus, AppointmentWithClient},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentPayload {
    pub client_id: Uuid,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Corte de cabelo")]
    pub service: String,

    #[schema(value_type = String, format = Date, example = "2026-02-23")]
    pub date: NaiveDate,

    #[schema(value_type = String, example = "14:30:00")]
    pub time: NaiveTime,

    // Ausente = pending, como no formulário
    pub status: Option<AppointmentStatus>,

    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAppointmentStatusPayload {
    pub status: AppointmentStatus,
}

#[derive(Debug, Deserialize)]
pub struct ListAppointmentsQuery {
    pub status: Option<AppointmentStatus>,
}

// GET /api/appointments
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = "Appointments",
    responses(
        (status = 200, description = "Agenda ordenada por data e horário", body = Vec<AppointmentWithClient>)
    ),
    params(
        ("status" = Option<String>, Query, description = "pending | confirmed | cancelled; ausente = todos")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_appointments(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Query(query): Query<ListAppointmentsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let appointments = app_state
        .appointment_service
        .list_appointments(&app_state.db_pool, user.id, query.status)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(appointments)))
}

// POST /api/appointments
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "Appointments",
    request_body = CreateAppointmentPayload,
    responses(
        (status = 201, description = "Agendamento criado", body = Appointment),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_appointment(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateAppointmentPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let appointment = app_state
        .appointment_service
        .create_appointment(
            &app_state.db_pool,
            user.id,
            payload.client_id,
            &payload.service,
            payload.date,
            payload.time,
            payload.status.unwrap_or(AppointmentStatus::Pending),
            payload.notes.as_deref(),
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

// PATCH /api/appointments/{id}/status
#[utoipa::path(
    patch,
    path = "/api/appointments/{id}/status",
    tag = "Appointments",
    request_body = UpdateAppointmentStatusPayload,
    responses(
        (status = 200, description = "Status atualizado", body = Appointment),
        (status = 404, description = "Agendamento não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do agendamento")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_appointment_status(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAppointmentStatusPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let appointment = app_state
        .appointment_service
        .update_status(&app_state.db_pool, user.id, id, payload.status)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(appointment)))
}

// DELETE /api/appointments/{id}
#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    tag = "Appointments",
    responses(
        (status = 204, description = "Agendamento removido"),
        (status = 404, description = "Agendamento não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do agendamento")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_appointment(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .appointment_service
        .delete_appointment(&app_state.db_pool, user.id, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
