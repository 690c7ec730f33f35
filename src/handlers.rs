pub mod auth;
pub mod profile;
pub mod plan;
pub mod clients;
pub mod appointments;
pub mod invoices;
pub mod dashboard;
