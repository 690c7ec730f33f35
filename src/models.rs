pub mod auth;
pub mod profile;
pub mod client;
pub mod appointment;
pub mod invoice;
pub mod plan;
pub mod dashboard;
