pub mod auth;
pub mod profile_service;
pub mod plan_service;
pub mod client_service;
pub mod appointment_service;
pub mod invoice_service;
pub mod dashboard_service;
