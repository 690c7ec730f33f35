// src/services/plan_service.rs

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ClientRepository,
    models::plan::{ClientLimit, EntitlementDecision, Plan, PlanEntitlement},
};

// Resolução de plano como capacidade injetada: quem chama não sabe (nem
// precisa saber) de onde o plano vem — hoje um stub, amanhã o billing.
#[async_trait]
pub trait PlanResolver: Send + Sync {
    async fn resolve_plan(&self, tenant_id: Uuid) -> Result<Plan, AppError>;
}

// Por enquanto todos os usuários são plan free.
// Quando integrar o billing, aqui se lê o plano real do usuário.
pub struct FreePlanResolver;

#[async_trait]
impl PlanResolver for FreePlanResolver {
    async fn resolve_plan(&self, _tenant_id: Uuid) -> Result<Plan, AppError> {
        Ok(Plan::free())
    }
}

// A decisão em si: pura, sem efeitos colaterais, total.
// `current_count` é fornecido pelo chamador (recém-contado do banco).
pub fn check_client_limit(current_count: u32, plan: &Plan) -> EntitlementDecision {
    match plan.max_clients {
        ClientLimit::Unlimited => EntitlementDecision::allowed(),
        ClientLimit::Finite(max) if current_count < max => EntitlementDecision::allowed(),
        ClientLimit::Finite(max) => EntitlementDecision::limit_reached(max),
    }
}

#[derive(Clone)]
pub struct PlanService {
    resolver: Arc<dyn PlanResolver>,
    client_repo: ClientRepository,
}

impl PlanService {
    pub fn new(resolver: Arc<dyn PlanResolver>, client_repo: ClientRepository) -> Self {
        Self {
            resolver,
            client_repo,
        }
    }

    // Estado atual do plano do tenant: plano, contagem e decisão.
    // Alimenta o banner de limite da tela de clientes.
    pub async fn entitlement<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
    ) -> Result<PlanEntitlement, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let plan = self.resolver.resolve_plan(tenant_id).await?;
        let current_count = self.client_repo.count_for_user(executor, tenant_id).await? as u32;
        let decision = check_client_limit(current_count, &plan);

        Ok(PlanEntitlement {
            plan,
            current_count,
            decision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plan::DenyReason;

    #[test]
    fn below_limit_is_allowed() {
        let plan = Plan::free();
        for count in 0..15 {
            let decision = check_client_limit(count, &plan);
            assert!(decision.allowed, "count {} deveria passar", count);
            assert_eq!(decision.reason, None);
            assert_eq!(decision.limit, None);
        }
    }

    #[test]
    fn at_limit_is_denied_with_reason_and_limit() {
        // maxClients = 15, currentCount = 15
        let decision = check_client_limit(15, &Plan::free());

        assert!(!decision.allowed);
        assert_eq!(decision.reason, Some(DenyReason::LimitReached));
        assert_eq!(decision.limit, Some(15));
    }

    #[test]
    fn above_limit_is_denied() {
        let decision = check_client_limit(40, &Plan::free());
        assert!(!decision.allowed);
        assert_eq!(decision.limit, Some(15));
    }

    #[test]
    fn unlimited_plan_always_allows() {
        let plan = Plan::growth();
        assert!(check_client_limit(0, &plan).allowed);
        assert!(check_client_limit(15, &plan).allowed);
        assert!(check_client_limit(1_000_000, &plan).allowed);
        assert!(check_client_limit(u32::MAX, &plan).allowed);
    }

    #[tokio::test]
    async fn free_resolver_always_returns_free_plan() {
        let resolver = FreePlanResolver;
        let plan = resolver.resolve_plan(Uuid::new_v4()).await.unwrap();
        assert_eq!(plan.max_clients, ClientLimit::Finite(15));
    }
}
