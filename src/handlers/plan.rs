// src/handlers/plan.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
};

// GET /api/plan
#[utoipa::path(
    get,
    path = "/api/plan",
    tag = "Plan",
    responses(
        (status = 200, description = "Plano atual e estado do limite de clientes",
         body = crate::models::plan::PlanEntitlement),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_plan(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let entitlement = app_state
        .plan_service
        .entitlement(&app_state.db_pool, user.id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(entitlement)))
}
