pub mod user_repo;
pub use user_repo::UserRepository;
pub mod profile_repo;
pub use profile_repo::ProfileRepository;
pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod appointment_repo;
pub use appointment_repo::AppointmentRepository;
pub mod invoice_repo;
pub use invoice_repo::InvoiceRepository;
