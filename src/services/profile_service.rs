// src/services/profile_service.rs

use sqlx::{Acquire, Executor, Postgres};

use crate::{
    common::error::AppError,
    db::ProfileRepository,
    models::{auth::User, profile::Profile},
};

#[derive(Clone)]
pub struct ProfileService {
    repo: ProfileRepository,
}

impl ProfileService {
    pub fn new(repo: ProfileRepository) -> Self {
        Self { repo }
    }

    // Garante que o perfil existe antes de qualquer operação: contas criadas
    // antes da tabela de perfis (ou fora do registro) ganham um na hora.
    pub async fn ensure_profile<'e, E>(&self, executor: E, user: &User) -> Result<Profile, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        let profile = match self.repo.find_by_id(&mut *tx, user.id).await? {
            Some(profile) => profile,
            None => self.repo.create(&mut *tx, user.id, &user.email, None).await?,
        };

        tx.commit().await?;

        Ok(profile)
    }

    pub async fn update_profile<'e, E>(
        &self,
        executor: E,
        user: &User,
        business_name: Option<&str>,
        phone: Option<&str>,
        locale: Option<&str>,
    ) -> Result<Profile, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .update(executor, user.id, business_name, phone, locale)
            .await
    }
}
