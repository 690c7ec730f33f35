// src/db/profile_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::profile::Profile};

#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Profile>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let profile = sqlx::query_as::<_, Profile>(
            "SELECT id, business_name, email, phone, locale, created_at FROM profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(profile)
    }

    // Cria o perfil inicial: e-mail da conta e, se veio do cadastro,
    // o nome do negócio. O resto fica para o PUT /api/profile.
    pub async fn create<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        email: &str,
        business_name: Option<&str>,
    ) -> Result<Profile, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (id, email, business_name)
            VALUES ($1, $2, $3)
            RETURNING id, business_name, email, phone, locale, created_at
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(business_name)
        .fetch_one(executor)
        .await?;

        Ok(profile)
    }

    // UPSERT: campos ausentes no payload preservam o valor atual
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        business_name: Option<&str>,
        phone: Option<&str>,
        locale: Option<&str>,
    ) -> Result<Profile, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (id, business_name, phone, locale)
            VALUES ($1, $2, $3, COALESCE($4, 'en'))
            ON CONFLICT (id)
            DO UPDATE SET
                business_name = COALESCE(EXCLUDED.business_name, profiles.business_name),
                phone = COALESCE(EXCLUDED.phone, profiles.phone),
                locale = COALESCE($4, profiles.locale)
            RETURNING id, business_name, email, phone, locale, created_at
            "#,
        )
        .bind(id)
        .bind(business_name)
        .bind(phone)
        .bind(locale)
        .fetch_one(executor)
        .await?;

        Ok(profile)
    }
}
