// src/services/client_service.rs

use std::sync::Arc;

use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ClientRepository,
    models::client::Client,
    services::plan_service::{check_client_limit, PlanResolver},
};

#[derive(Clone)]
pub struct ClientService {
    repo: ClientRepository,
    resolver: Arc<dyn PlanResolver>,
}

impl ClientService {
    pub fn new(repo: ClientRepository, resolver: Arc<dyn PlanResolver>) -> Self {
        Self { repo, resolver }
    }

    // Cria um cliente depois de checar o limite do plano.
    //
    // A contagem é feita dentro da própria transação, imediatamente antes da
    // decisão. Entre requisições concorrentes a checagem NÃO é atômica: duas
    // criações simultâneas podem passar e estourar o limite em um. Limitação
    // conhecida; a resolução exigiria uma constraint no banco.
    pub async fn create_client<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let plan = self.resolver.resolve_plan(tenant_id).await?;

        let mut tx = executor.begin().await?;

        let current_count = self.repo.count_for_user(&mut *tx, tenant_id).await? as u32;
        let decision = check_client_limit(current_count, &plan);

        if !decision.allowed {
            // O limite vem junto para o front montar o banner
            return Err(AppError::ClientLimitReached {
                limit: decision.limit.unwrap_or(0),
            });
        }

        let client = self
            .repo
            .create(&mut *tx, tenant_id, name, email, phone, notes)
            .await?;

        tx.commit().await?;

        Ok(client)
    }

    pub async fn list_clients<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        search: Option<&str>,
    ) -> Result<Vec<Client>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let clients = self.repo.list(executor, tenant_id).await?;

        Ok(match search {
            Some(query) if !query.is_empty() => filter_clients(clients, query),
            _ => clients,
        })
    }

    pub async fn delete_client<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        id: Uuid,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let deleted = self.repo.delete(executor, tenant_id, id).await?;

        if deleted == 0 {
            return Err(AppError::ClientNotFound);
        }

        Ok(())
    }
}

// A busca da tela de clientes: substring do nome ou do e-mail sem diferenciar
// maiúsculas, ou do telefone como está (número não tem caixa). Campos
// opcionais ausentes simplesmente não casam.
pub fn client_matches(client: &Client, query: &str) -> bool {
    let query_lower = query.to_lowercase();

    client.name.to_lowercase().contains(&query_lower)
        || client
            .email
            .as_deref()
            .is_some_and(|email| email.to_lowercase().contains(&query_lower))
        || client
            .phone
            .as_deref()
            .is_some_and(|phone| phone.contains(query))
}

pub fn filter_clients(clients: Vec<Client>, query: &str) -> Vec<Client> {
    clients
        .into_iter()
        .filter(|c| client_matches(c, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn client(name: &str, email: Option<&str>, phone: Option<&str>) -> Client {
        Client {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.map(String::from),
            phone: phone.map(String::from),
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn search_matches_name_case_insensitive() {
        let maria = client("Maria", None, None);
        let john = client("John", None, None);

        assert!(client_matches(&maria, "mar"));
        assert!(client_matches(&maria, "MARIA"));
        assert!(!client_matches(&john, "mar"));
    }

    #[test]
    fn search_matches_email_when_present() {
        let with_email = client("John", Some("Maria.Lopez@mail.com"), None);
        let without_email = client("John", None, None);

        assert!(client_matches(&with_email, "maria"));
        assert!(!client_matches(&without_email, "maria"));
    }

    #[test]
    fn search_matches_phone_verbatim() {
        let c = client("John", None, Some("+1 555 0199"));

        assert!(client_matches(&c, "555"));
        // Telefone não passa por lowercase: a query é comparada como está
        assert!(client_matches(&c, "+1 555"));
        assert!(!client_matches(&c, "0000"));
    }

    #[test]
    fn filter_keeps_only_matches() {
        let clients = vec![
            client("Maria", None, None),
            client("John", Some("john@mail.com"), None),
            client("Marcos", None, None),
        ];

        let filtered = filter_clients(clients, "mar");
        let names: Vec<_> = filtered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Maria", "Marcos"]);
    }
}
