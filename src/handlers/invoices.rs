// src/handlers/invoices.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::invoice::{Invoice, InvoiceStatus, InvoiceWithClient},
};

// O CHECK do banco também barra, mas rejeitamos antes de abrir transação
fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount < Decimal::ZERO {
        let mut err = ValidationError::new("amount_negative");
        err.message = Some("amount_negative".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoicePayload {
    pub client_id: Uuid,

    #[validate(custom(function = validate_amount))]
    #[schema(example = "150.00")]
    pub amount: Decimal,

    pub description: Option<String>,

    // Ausente = unpaid, como no formulário
    pub status: Option<InvoiceStatus>,

    #[schema(value_type = Option<String>, format = Date, example = "2026-03-01")]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct ListInvoicesQuery {
    pub status: Option<InvoiceStatus>,
}

// GET /api/invoices
#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = "Invoices",
    responses(
        (status = 200, description = "Faturas (mais recentes primeiro)", body = Vec<InvoiceWithClient>)
    ),
    params(
        ("status" = Option<String>, Query, description = "unpaid | paid; ausente = todas")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_invoices(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Query(query): Query<ListInvoicesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let invoices = app_state
        .invoice_service
        .list_invoices(&app_state.db_pool, user.id, query.status)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(invoices)))
}

// POST /api/invoices
#[utoipa::path(
    post,
    path = "/api/invoices",
    tag = "Invoices",
    request_body = CreateInvoicePayload,
    responses(
        (status = 201, description = "Fatura criada", body = Invoice),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_invoice(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateInvoicePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let invoice = app_state
        .invoice_service
        .create_invoice(
            &app_state.db_pool,
            user.id,
            payload.client_id,
            payload.amount,
            payload.description.as_deref(),
            payload.status.unwrap_or(InvoiceStatus::Unpaid),
            payload.due_date,
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(invoice)))
}

// POST /api/invoices/{id}/pay
#[utoipa::path(
    post,
    path = "/api/invoices/{id}/pay",
    tag = "Invoices",
    responses(
        (status = 200, description = "Fatura marcada como paga", body = Invoice),
        (status = 404, description = "Fatura não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da fatura")
    ),
    security(("api_jwt" = []))
)]
pub async fn pay_invoice(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let invoice = app_state
        .invoice_service
        .mark_paid(&app_state.db_pool, user.id, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(invoice)))
}

// DELETE /api/invoices/{id}
#[utoipa::path(
    delete,
    path = "/api/invoices/{id}",
    tag = "Invoices",
    responses(
        (status = 204, description = "Fatura removida"),
        (status = 404, description = "Fatura não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da fatura")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_invoice(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .invoice_service
        .delete_invoice(&app_state.db_pool, user.id, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
