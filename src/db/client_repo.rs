// src/db/client_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::client::Client};

#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Conta os clientes do tenant (insumo da checagem de limite do plano)
    pub async fn count_for_user<'e, E>(&self, executor: E, user_id: Uuid) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM clients WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(executor)
                .await?;

        Ok(count)
    }

    // Mais recentes primeiro
    pub async fn list<'e, E>(&self, executor: E, user_id: Uuid) -> Result<Vec<Client>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, user_id, name, email, phone, notes, created_at
            FROM clients
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?;

        Ok(clients)
    }

    // Busca escopada pelo tenant: um cliente de outro usuário é "não encontrado"
    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Client>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let client = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, user_id, name, email, phone, notes, created_at
            FROM clients
            WHERE user_id = $1 AND id = $2
            "#,
        )
        .bind(user_id)
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(client)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (user_id, name, email, phone, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, name, email, phone, notes, created_at
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(notes)
        .fetch_one(executor)
        .await?;

        Ok(client)
    }

    // Retorna quantas linhas saíram (0 = não era dele / não existia)
    pub async fn delete<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM clients WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
