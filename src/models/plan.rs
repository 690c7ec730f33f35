// src/models/plan.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Teto de clientes de um plano. Valor marcado: planos pagos não têm teto,
// e "ilimitado" nunca é representado como um número grande.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum ClientLimit {
    Finite(u32),
    Unlimited,
}

impl ClientLimit {
    // true se `count` clientes ainda cabem abaixo do teto
    pub fn allows(&self, count: u32) -> bool {
        match self {
            ClientLimit::Unlimited => true,
            ClientLimit::Finite(max) => count < *max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlanKey {
    Free,
    Growth,
}

// Um plano de assinatura com seu direito de uso (máximo de clientes)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub key: PlanKey,

    #[schema(example = "Free Forever")]
    pub name: &'static str,

    pub max_clients: ClientLimit,
}

impl Plan {
    pub fn free() -> Self {
        Plan {
            key: PlanKey::Free,
            name: "Free Forever",
            max_clients: ClientLimit::Finite(15),
        }
    }

    pub fn growth() -> Self {
        Plan {
            key: PlanKey::Growth,
            name: "Growth",
            max_clients: ClientLimit::Unlimited,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    LimitReached,
}

// Decisão do verificador de direito de uso: pode ou não criar mais um cliente.
// Não tem efeitos colaterais e não aplica nada no banco por si só.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementDecision {
    pub allowed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DenyReason>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 15)]
    pub limit: Option<u32>,
}

impl EntitlementDecision {
    pub fn allowed() -> Self {
        EntitlementDecision {
            allowed: true,
            reason: None,
            limit: None,
        }
    }

    pub fn limit_reached(limit: u32) -> Self {
        EntitlementDecision {
            allowed: false,
            reason: Some(DenyReason::LimitReached),
            limit: Some(limit),
        }
    }
}

// Resposta do GET /api/plan: plano atual + estado do limite
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntitlement {
    pub plan: Plan,

    #[schema(example = 7)]
    pub current_count: u32,

    pub decision: EntitlementDecision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_limit_allows_below_ceiling() {
        let limit = ClientLimit::Finite(15);
        assert!(limit.allows(0));
        assert!(limit.allows(14));
        assert!(!limit.allows(15));
        assert!(!limit.allows(16));
    }

    #[test]
    fn unlimited_allows_any_count() {
        assert!(ClientLimit::Unlimited.allows(0));
        assert!(ClientLimit::Unlimited.allows(u32::MAX));
    }

    #[test]
    fn free_plan_caps_at_fifteen() {
        let plan = Plan::free();
        assert_eq!(plan.name, "Free Forever");
        assert_eq!(plan.max_clients, ClientLimit::Finite(15));
    }

    #[test]
    fn growth_plan_is_unlimited() {
        let plan = Plan::growth();
        assert_eq!(plan.max_clients, ClientLimit::Unlimited);
    }
}
