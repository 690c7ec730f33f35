// src/models/invoice.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Mapeia o CREATE TYPE invoice_status do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "invoice_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Unpaid,
    Paid,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,

    #[schema(ignore)]
    pub user_id: Uuid,

    pub client_id: Uuid,

    #[schema(example = "150.00")]
    pub amount: Decimal,

    pub description: Option<String>,
    pub status: InvoiceStatus,

    #[schema(value_type = Option<String>, format = Date, example = "2026-03-01")]
    pub due_date: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,
}

// Linha da listagem: fatura + nome do cliente (JOIN com clients)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceWithClient {
    pub id: Uuid,

    #[schema(ignore)]
    pub user_id: Uuid,

    pub client_id: Uuid,

    #[schema(example = "150.00")]
    pub amount: Decimal,

    pub description: Option<String>,
    pub status: InvoiceStatus,

    #[schema(value_type = Option<String>, format = Date, example = "2026-03-01")]
    pub due_date: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,

    #[schema(example = "Maria da Silva")]
    pub client_name: String,
}
