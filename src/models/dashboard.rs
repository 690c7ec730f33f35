// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{
    appointment::AppointmentWithClient, client::Client, invoice::InvoiceWithClient,
};

// Visão geral do dia (os cards e listas da tela inicial)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub total_clients: usize,       // Total de clientes cadastrados
    pub todays_appointments: usize, // Agendamentos com data de hoje
    pub overdue_invoices: usize,    // Faturas não pagas já vencidas

    #[schema(example = "1250.00")]
    pub total_revenue: Decimal, // Soma das faturas pagas

    #[schema(example = "340.00")]
    pub pending_revenue: Decimal, // Soma das faturas em aberto

    pub upcoming_appointments: Vec<AppointmentWithClient>, // Próximos (máx. 5)
    pub recent_clients: Vec<Client>,                       // Últimos cadastrados (máx. 3)
    pub pending_invoices: Vec<InvoiceWithClient>,          // Todas as não pagas
}
