// src/db/invoice_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::invoice::{Invoice, InvoiceStatus, InvoiceWithClient},
};

#[derive(Clone)]
pub struct InvoiceRepository {
    pool: PgPool,
}

impl InvoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Mais recentes primeiro
    pub async fn list_with_clients<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
    ) -> Result<Vec<InvoiceWithClient>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let invoices = sqlx::query_as::<_, InvoiceWithClient>(
            r#"
            SELECT
                i.id, i.user_id, i.client_id, i.amount, i.description,
                i.status, i.due_date, i.created_at,
                c.name AS client_name
            FROM invoices i
            JOIN clients c ON c.id = i.client_id
            WHERE i.user_id = $1
            ORDER BY i.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?;

        Ok(invoices)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        client_id: Uuid,
        amount: Decimal,
        description: Option<&str>,
        status: InvoiceStatus,
        due_date: Option<NaiveDate>,
    ) -> Result<Invoice, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (user_id, client_id, amount, description, status, due_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, client_id, amount, description, status, due_date, created_at
            "#,
        )
        .bind(user_id)
        .bind(client_id)
        .bind(amount)
        .bind(description)
        .bind(status)
        .bind(due_date)
        .fetch_one(executor)
        .await?;

        Ok(invoice)
    }

    // Única mutação permitida: marcar como paga
    pub async fn mark_paid<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Invoice>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            UPDATE invoices
            SET status = 'paid'
            WHERE user_id = $1 AND id = $2
            RETURNING id, user_id, client_id, amount, description, status, due_date, created_at
            "#,
        )
        .bind(user_id)
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(invoice)
    }

    pub async fn delete<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM invoices WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
