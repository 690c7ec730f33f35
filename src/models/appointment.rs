// src/models/appointment.rs

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Mapeia o CREATE TYPE appointment_status do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "appointment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,

    #[schema(ignore)]
    pub user_id: Uuid,

    pub client_id: Uuid,

    #[schema(example = "Corte de cabelo")]
    pub service: String,

    #[schema(value_type = String, format = Date, example = "2026-02-23")]
    pub date: NaiveDate,

    #[schema(value_type = String, example = "14:30:00")]
    pub time: NaiveTime,

    pub status: AppointmentStatus,
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
}

// Linha da listagem: agendamento + nome do cliente (JOIN com clients)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentWithClient {
    pub id: Uuid,

    #[schema(ignore)]
    pub user_id: Uuid,

    pub client_id: Uuid,
    pub service: String,

    #[schema(value_type = String, format = Date, example = "2026-02-23")]
    pub date: NaiveDate,

    #[schema(value_type = String, example = "14:30:00")]
    pub time: NaiveTime,

    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,

    #[schema(example = "Maria da Silva")]
    pub client_name: String,
}
