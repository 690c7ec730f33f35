// src/services/dashboard_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AppointmentRepository, ClientRepository, InvoiceRepository},
    models::{
        appointment::AppointmentWithClient,
        client::Client,
        dashboard::DashboardOverview,
        invoice::{InvoiceStatus, InvoiceWithClient},
    },
};

// Quantos itens cada lista da tela inicial mostra (parâmetro de
// apresentação, não regra de negócio)
const UPCOMING_CAP: usize = 5;
const RECENT_CLIENTS_CAP: usize = 3;

#[derive(Clone)]
pub struct DashboardService {
    client_repo: ClientRepository,
    appointment_repo: AppointmentRepository,
    invoice_repo: InvoiceRepository,
}

impl DashboardService {
    pub fn new(
        client_repo: ClientRepository,
        appointment_repo: AppointmentRepository,
        invoice_repo: InvoiceRepository,
    ) -> Self {
        Self {
            client_repo,
            appointment_repo,
            invoice_repo,
        }
    }

    // Busca as três coleções em paralelo (não há dependência de ordem entre
    // elas) e deriva a visão geral. `today` vem do chamador.
    pub async fn overview(
        &self,
        pool: &PgPool,
        tenant_id: Uuid,
        today: NaiveDate,
    ) -> Result<DashboardOverview, AppError> {
        let (clients, appointments, invoices) = tokio::try_join!(
            self.client_repo.list(pool, tenant_id),
            self.appointment_repo.list_with_clients(pool, tenant_id),
            self.invoice_repo.list_with_clients(pool, tenant_id),
        )?;

        Ok(build_overview(&clients, &appointments, &invoices, today))
    }
}

// =============================================================================
//  Derivações puras (determinísticas, totais, sem mutação)
// =============================================================================

pub fn todays_appointments(
    appointments: &[AppointmentWithClient],
    today: NaiveDate,
) -> Vec<AppointmentWithClient> {
    appointments
        .iter()
        .filter(|a| a.date == today)
        .cloned()
        .collect()
}

// Agendamentos de hoje em diante, ordenados por (data, horário),
// limitados aos primeiros `cap`
pub fn upcoming_appointments(
    appointments: &[AppointmentWithClient],
    today: NaiveDate,
    cap: usize,
) -> Vec<AppointmentWithClient> {
    let mut upcoming: Vec<AppointmentWithClient> = appointments
        .iter()
        .filter(|a| a.date >= today)
        .cloned()
        .collect();

    upcoming.sort_by_key(|a| (a.date, a.time));
    upcoming.truncate(cap);
    upcoming
}

pub fn pending_invoices(invoices: &[InvoiceWithClient]) -> Vec<InvoiceWithClient> {
    invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Unpaid)
        .cloned()
        .collect()
}

// Vencida = não paga, com vencimento definido e já no passado.
// Sem due_date não há o que vencer.
pub fn overdue_invoices(
    invoices: &[InvoiceWithClient],
    today: NaiveDate,
) -> Vec<InvoiceWithClient> {
    invoices
        .iter()
        .filter(|i| {
            i.status == InvoiceStatus::Unpaid && i.due_date.is_some_and(|due| due < today)
        })
        .cloned()
        .collect()
}

pub fn total_revenue(invoices: &[InvoiceWithClient]) -> Decimal {
    invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Paid)
        .map(|i| i.amount)
        .sum()
}

pub fn pending_revenue(invoices: &[InvoiceWithClient]) -> Decimal {
    invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Unpaid)
        .map(|i| i.amount)
        .sum()
}

pub fn build_overview(
    clients: &[Client],
    appointments: &[AppointmentWithClient],
    invoices: &[InvoiceWithClient],
    today: NaiveDate,
) -> DashboardOverview {
    DashboardOverview {
        total_clients: clients.len(),
        todays_appointments: todays_appointments(appointments, today).len(),
        overdue_invoices: overdue_invoices(invoices, today).len(),
        total_revenue: total_revenue(invoices),
        pending_revenue: pending_revenue(invoices),
        upcoming_appointments: upcoming_appointments(appointments, today, UPCOMING_CAP),
        // A listagem já vem do repositório com os mais recentes primeiro
        recent_clients: clients.iter().take(RECENT_CLIENTS_CAP).cloned().collect(),
        pending_invoices: pending_invoices(invoices),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::AppointmentStatus;
    use chrono::{NaiveTime, Utc};

    fn appt(date: &str, time: &str) -> AppointmentWithClient {
        AppointmentWithClient {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            service: "Corte".to_string(),
            date: date.parse().unwrap(),
            time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
            status: AppointmentStatus::Pending,
            notes: None,
            created_at: Utc::now(),
            client_name: "Maria".to_string(),
        }
    }

    fn inv(status: InvoiceStatus, amount: i64, due_date: Option<&str>) -> InvoiceWithClient {
        InvoiceWithClient {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            amount: Decimal::new(amount, 0),
            description: None,
            status,
            due_date: due_date.map(|d| d.parse().unwrap()),
            created_at: Utc::now(),
            client_name: "Maria".to_string(),
        }
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn todays_appointments_match_exact_date() {
        let list = vec![appt("2026-02-23", "10:00"), appt("2026-02-24", "09:00")];
        let today = day("2026-02-23");

        let todays = todays_appointments(&list, today);
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].date, today);
    }

    #[test]
    fn upcoming_is_sorted_by_date_then_time_and_capped() {
        let list = vec![
            appt("2026-03-01", "15:00"),
            appt("2026-02-23", "14:00"),
            appt("2026-02-23", "09:00"),
            appt("2026-02-20", "08:00"), // passado, fica de fora
            appt("2026-02-25", "11:00"),
        ];

        let upcoming = upcoming_appointments(&list, day("2026-02-23"), 3);

        let order: Vec<_> = upcoming
            .iter()
            .map(|a| (a.date.to_string(), a.time.to_string()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("2026-02-23".to_string(), "09:00:00".to_string()),
                ("2026-02-23".to_string(), "14:00:00".to_string()),
                ("2026-02-25".to_string(), "11:00:00".to_string()),
            ]
        );
    }

    #[test]
    fn todays_are_subset_of_upcoming() {
        let list = vec![
            appt("2026-02-23", "10:00"),
            appt("2026-02-23", "16:00"),
            appt("2026-02-28", "10:00"),
        ];
        let today = day("2026-02-23");

        let todays = todays_appointments(&list, today);
        let upcoming = upcoming_appointments(&list, today, usize::MAX);

        for a in &todays {
            assert!(upcoming.iter().any(|u| u.id == a.id));
        }
    }

    #[test]
    fn revenue_splits_by_status() {
        // [{amount:100,status:paid}, {amount:50,status:unpaid}]
        let invoices = vec![
            inv(InvoiceStatus::Paid, 100, None),
            inv(InvoiceStatus::Unpaid, 50, None),
        ];

        assert_eq!(total_revenue(&invoices), Decimal::new(100, 0));
        assert_eq!(pending_revenue(&invoices), Decimal::new(50, 0));
    }

    #[test]
    fn paid_plus_pending_covers_all_amounts() {
        let invoices = vec![
            inv(InvoiceStatus::Paid, 100, None),
            inv(InvoiceStatus::Unpaid, 50, None),
            inv(InvoiceStatus::Paid, 25, Some("2026-01-01")),
            inv(InvoiceStatus::Unpaid, 75, Some("2026-06-01")),
        ];

        let sum_all: Decimal = invoices.iter().map(|i| i.amount).sum();
        assert_eq!(total_revenue(&invoices) + pending_revenue(&invoices), sum_all);
    }

    #[test]
    fn overdue_needs_unpaid_and_past_due_date() {
        let today = day("2026-02-23");

        let unpaid_past = inv(InvoiceStatus::Unpaid, 10, Some("2026-02-20"));
        let paid_past = inv(InvoiceStatus::Paid, 10, Some("2026-02-20"));
        let unpaid_future = inv(InvoiceStatus::Unpaid, 10, Some("2026-03-20"));
        let unpaid_no_due = inv(InvoiceStatus::Unpaid, 10, None);
        let unpaid_due_today = inv(InvoiceStatus::Unpaid, 10, Some("2026-02-23"));

        let invoices = vec![
            unpaid_past.clone(),
            paid_past,
            unpaid_future,
            unpaid_no_due,
            unpaid_due_today,
        ];

        let overdue = overdue_invoices(&invoices, today);
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].id, unpaid_past.id);
    }

    #[test]
    fn moving_today_back_clears_overdue() {
        let invoices = vec![inv(InvoiceStatus::Unpaid, 10, Some("2026-02-20"))];

        assert_eq!(overdue_invoices(&invoices, day("2026-02-23")).len(), 1);
        assert_eq!(overdue_invoices(&invoices, day("2026-02-19")).len(), 0);
    }

    #[test]
    fn overview_assembles_counts_and_lists() {
        let today = day("2026-02-23");

        let clients = vec![
            Client {
                id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                name: "Maria".to_string(),
                email: None,
                phone: None,
                notes: None,
                created_at: Utc::now(),
            };
            4
        ];
        let appointments = vec![
            appt("2026-02-23", "10:00"),
            appt("2026-02-23", "11:00"),
            appt("2026-02-26", "09:00"),
        ];
        let invoices = vec![
            inv(InvoiceStatus::Paid, 100, None),
            inv(InvoiceStatus::Unpaid, 50, Some("2026-02-20")),
        ];

        let overview = build_overview(&clients, &appointments, &invoices, today);

        assert_eq!(overview.total_clients, 4);
        assert_eq!(overview.todays_appointments, 2);
        assert_eq!(overview.overdue_invoices, 1);
        assert_eq!(overview.total_revenue, Decimal::new(100, 0));
        assert_eq!(overview.pending_revenue, Decimal::new(50, 0));
        assert_eq!(overview.upcoming_appointments.len(), 3);
        assert_eq!(overview.recent_clients.len(), 3);
        assert_eq!(overview.pending_invoices.len(), 1);
    }
}
