// src/services/invoice_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ClientRepository, InvoiceRepository},
    models::invoice::{Invoice, InvoiceStatus, InvoiceWithClient},
};

#[derive(Clone)]
pub struct InvoiceService {
    repo: InvoiceRepository,
    client_repo: ClientRepository,
}

impl InvoiceService {
    pub fn new(repo: InvoiceRepository, client_repo: ClientRepository) -> Self {
        Self { repo, client_repo }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_invoice<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        client_id: Uuid,
        amount: Decimal,
        description: Option<&str>,
        status: InvoiceStatus,
        due_date: Option<NaiveDate>,
    ) -> Result<Invoice, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        // Mesma regra dos agendamentos: a fatura só pode apontar para um
        // cliente do próprio tenant.
        self.client_repo
            .find_by_id(&mut *tx, tenant_id, client_id)
            .await?
            .ok_or(AppError::ClientNotFound)?;

        let invoice = self
            .repo
            .create(
                &mut *tx, tenant_id, client_id, amount, description, status, due_date,
            )
            .await?;

        tx.commit().await?;

        Ok(invoice)
    }

    pub async fn list_invoices<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        status: Option<InvoiceStatus>,
    ) -> Result<Vec<InvoiceWithClient>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let invoices = self.repo.list_with_clients(executor, tenant_id).await?;

        Ok(filter_by_status(invoices, status))
    }

    pub async fn mark_paid<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        id: Uuid,
    ) -> Result<Invoice, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .mark_paid(executor, tenant_id, id)
            .await?
            .ok_or(AppError::InvoiceNotFound)
    }

    pub async fn delete_invoice<'e, E>(
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
            return Err(AppError::InvoiceNotFound);
        }

        Ok(())
    }
}

// Filtro da listagem: predicado puro sobre o status; None significa "all"
pub fn filter_by_status(
    invoices: Vec<InvoiceWithClient>,
    status: Option<InvoiceStatus>,
) -> Vec<InvoiceWithClient> {
    match status {
        None => invoices,
        Some(wanted) => invoices
            .into_iter()
            .filter(|i| i.status == wanted)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn invoice(status: InvoiceStatus, amount: i64) -> InvoiceWithClient {
        InvoiceWithClient {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            amount: Decimal::new(amount, 0),
            description: None,
            status,
            due_date: None,
            created_at: Utc::now(),
            client_name: "Maria".to_string(),
        }
    }

    #[test]
    fn none_means_all() {
        let list = vec![
            invoice(InvoiceStatus::Paid, 100),
            invoice(InvoiceStatus::Unpaid, 50),
        ];

        assert_eq!(filter_by_status(list, None).len(), 2);
    }

    #[test]
    fn filters_unpaid_only() {
        let list = vec![
            invoice(InvoiceStatus::Paid, 100),
            invoice(InvoiceStatus::Unpaid, 50),
            invoice(InvoiceStatus::Unpaid, 25),
        ];

        let unpaid = filter_by_status(list, Some(InvoiceStatus::Unpaid));
        assert_eq!(unpaid.len(), 2);
        assert!(unpaid.iter().all(|i| i.status == InvoiceStatus::Unpaid));
    }
}
