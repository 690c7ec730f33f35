// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,

        // --- Users ---
        handlers::auth::get_me,

        // --- Profile ---
        handlers::profile::get_profile,
        handlers::profile::update_profile,

        // --- Plan ---
        handlers::plan::get_plan,

        // --- Clients ---
        handlers::clients::list_clients,
        handlers::clients::create_client,
        handlers::clients::delete_client,

        // --- Appointments ---
        handlers::appointments::list_appointments,
        handlers::appointments::create_appointment,
        handlers::appointments::update_appointment_status,
        handlers::appointments::delete_appointment,

        // --- Invoices ---
        handlers::invoices::list_invoices,
        handlers::invoices::create_invoice,
        handlers::invoices::pay_invoice,
        handlers::invoices::delete_invoice,

        // --- Dashboard ---
        handlers::dashboard::get_overview,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Profile ---
            models::profile::Profile,
            models::profile::UpdateProfilePayload,

            // --- Plan ---
            models::plan::ClientLimit,
            models::plan::PlanKey,
            models::plan::Plan,
            models::plan::DenyReason,
            models::plan::EntitlementDecision,
            models::plan::PlanEntitlement,

            // --- Clients ---
            models::client::Client,
            handlers::clients::CreateClientPayload,

            // --- Appointments ---
            models::appointment::AppointmentStatus,
            models::appointment::Appointment,
            models::appointment::AppointmentWithClient,
            handlers::appointments::CreateAppointmentPayload,
            handlers::appointments::UpdateAppointmentStatusPayload,

            // --- Invoices ---
            models::invoice::InvoiceStatus,
            models::invoice::Invoice,
            models::invoice::InvoiceWithClient,
            handlers::invoices::CreateInvoicePayload,

            // --- Dashboard ---
            models::dashboard::DashboardOverview,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Dados do Usuário"),
        (name = "Profile", description = "Perfil do Negócio"),
        (name = "Plan", description = "Plano e Limite de Clientes"),
        (name = "Clients", description = "Gestão de Clientes"),
        (name = "Appointments", description = "Agendamentos"),
        (name = "Invoices", description = "Faturas"),
        (name = "Dashboard", description = "Visão Geral do Dia")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
