// src/services/appointment_service.rs

use chrono::{NaiveDate, NaiveTime};
use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AppointmentRepository, ClientRepository},
    models::appointment::{Appointment, AppointmentStatus, AppointmentWithClient},
};

#[derive(Clone)]
pub struct AppointmentService {
    repo: AppointmentRepository,
    client_repo: ClientRepository,
}

impl AppointmentService {
    pub fn new(repo: AppointmentRepository, client_repo: ClientRepository) -> Self {
        Self { repo, client_repo }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_appointment<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        client_id: Uuid,
        service: &str,
        date: NaiveDate,
        time: NaiveTime,
        status: AppointmentStatus,
        notes: Option<&str>,
    ) -> Result<Appointment, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        // O cliente precisa existir E pertencer ao mesmo tenant;
        // a busca escopada garante as duas coisas de uma vez.
        self.client_repo
            .find_by_id(&mut *tx, tenant_id, client_id)
            .await?
            .ok_or(AppError::ClientNotFound)?;

        let appointment = self
            .repo
            .create(
                &mut *tx, tenant_id, client_id, service, date, time, status, notes,
            )
            .await?;

        tx.commit().await?;

        Ok(appointment)
    }

    pub async fn list_appointments<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        status: Option<AppointmentStatus>,
    ) -> Result<Vec<AppointmentWithClient>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let appointments = self.repo.list_with_clients(executor, tenant_id).await?;

        Ok(filter_by_status(appointments, status))
    }

    pub async fn update_status<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<Appointment, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .update_status(executor, tenant_id, id, status)
            .await?
            .ok_or(AppError::AppointmentNotFound)
    }

    pub async fn delete_appointment<'e, E>(
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
            return Err(AppError::AppointmentNotFound);
        }

        Ok(())
    }
}

// Filtro da listagem: predicado puro sobre o status; None significa "all"
pub fn filter_by_status(
    appointments: Vec<AppointmentWithClient>,
    status: Option<AppointmentStatus>,
) -> Vec<AppointmentWithClient> {
    match status {
        None => appointments,
        Some(wanted) => appointments
            .into_iter()
            .filter(|a| a.status == wanted)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn appointment(status: AppointmentStatus) -> AppointmentWithClient {
        AppointmentWithClient {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            service: "Corte".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 23).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            status,
            notes: None,
            created_at: Utc::now(),
            client_name: "Maria".to_string(),
        }
    }

    #[test]
    fn none_means_all() {
        let list = vec![
            appointment(AppointmentStatus::Pending),
            appointment(AppointmentStatus::Cancelled),
        ];

        assert_eq!(filter_by_status(list, None).len(), 2);
    }

    #[test]
    fn filters_by_exact_status() {
        let list = vec![
            appointment(AppointmentStatus::Pending),
            appointment(AppointmentStatus::Confirmed),
            appointment(AppointmentStatus::Confirmed),
            appointment(AppointmentStatus::Cancelled),
        ];

        let confirmed = filter_by_status(list, Some(AppointmentStatus::Confirmed));
        assert_eq!(confirmed.len(), 2);
        assert!(confirmed
            .iter()
            .all(|a| a.status == AppointmentStatus::Confirmed));
    }
}
