// src/db/appointment_repo.rs

use chrono::{NaiveDate, NaiveTime};
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::appointment::{Appointment, AppointmentStatus, AppointmentWithClient},
};

#[derive(Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Agenda ordenada: data, depois horário (a ordem estável da listagem)
    pub async fn list_with_clients<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
    ) -> Result<Vec<AppointmentWithClient>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let appointments = sqlx::query_as::<_, AppointmentWithClient>(
            r#"
            SELECT
                a.id, a.user_id, a.client_id, a.service, a.date, a.time,
                a.status, a.notes, a.created_at,
                c.name AS client_name
            FROM appointments a
            JOIN clients c ON c.id = a.client_id
            WHERE a.user_id = $1
            ORDER BY a.date ASC, a.time ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?;

        Ok(appointments)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        client_id: Uuid,
        service: &str,
        date: NaiveDate,
        time: NaiveTime,
        status: AppointmentStatus,
        notes: Option<&str>,
    ) -> Result<Appointment, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (user_id, client_id, service, date, time, status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, client_id, service, date, time, status, notes, created_at
            "#,
        )
        .bind(user_id)
        .bind(client_id)
        .bind(service)
        .bind(date)
        .bind(time)
        .bind(status)
        .bind(notes)
        .fetch_one(executor)
        .await?;

        Ok(appointment)
    }

    // Única mutação permitida depois de criado: a transição de status
    pub async fn update_status<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<Option<Appointment>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments
            SET status = $3
            WHERE user_id = $1 AND id = $2
            RETURNING id, user_id, client_id, service, date, time, status, notes, created_at
            "#,
        )
        .bind(user_id)
        .bind(id)
        .bind(status)
        .fetch_optional(executor)
        .await?;

        Ok(appointment)
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
        let result = sqlx::query("DELETE FROM appointments WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
