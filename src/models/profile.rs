// src/models/profile.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// O "negócio" do usuário. Um perfil por usuário autenticado,
// criado de forma preguiçosa no primeiro acesso.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,

    #[schema(example = "Estética Maria")]
    pub business_name: Option<String>,

    pub email: Option<String>,
    pub phone: Option<String>,

    // 'en' ou 'es'
    #[schema(example = "es")]
    pub locale: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Estética Maria")]
    pub business_name: Option<String>,

    pub phone: Option<String>,

    #[validate(length(min = 2, max = 5, message = "invalid_locale"))]
    #[schema(example = "en")]
    pub locale: Option<String>,
}
