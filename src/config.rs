// src/config.rs

use std::sync::Arc;
use std::{env, time::Duration};

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    common::i18n::I18nStore,
    db::{
        AppointmentRepository, ClientRepository, InvoiceRepository, ProfileRepository,
        UserRepository,
    },
    services::{
        appointment_service::AppointmentService,
        auth::AuthService,
        client_service::ClientService,
        dashboard_service::DashboardService,
        invoice_service::InvoiceService,
        plan_service::{FreePlanResolver, PlanResolver, PlanService},
        profile_service::ProfileService,
    },
};

// O estado compartilhado, acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: String,
    pub i18n_store: I18nStore,
    pub auth_service: AuthService,
    pub profile_service: ProfileService,
    pub plan_service: PlanService,
    pub client_service: ClientService,
    pub appointment_service: AppointmentService,
    pub invoice_service: InvoiceService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let profile_repo = ProfileRepository::new(db_pool.clone());
        let client_repo = ClientRepository::new(db_pool.clone());
        let appointment_repo = AppointmentRepository::new(db_pool.clone());
        let invoice_repo = InvoiceRepository::new(db_pool.clone());

        // Hoje todo mundo é free; trocar o resolver quando o billing chegar
        let plan_resolver: Arc<dyn PlanResolver> = Arc::new(FreePlanResolver);

        let auth_service = AuthService::new(
            user_repo,
            profile_repo.clone(),
            jwt_secret.clone(),
            db_pool.clone(),
        );
        let profile_service = ProfileService::new(profile_repo);
        let plan_service = PlanService::new(plan_resolver.clone(), client_repo.clone());
        let client_service = ClientService::new(client_repo.clone(), plan_resolver);
        let appointment_service =
            AppointmentService::new(appointment_repo.clone(), client_repo.clone());
        let invoice_service = InvoiceService::new(invoice_repo.clone(), client_repo.clone());
        let dashboard_service = DashboardService::new(client_repo, appointment_repo, invoice_repo);

        Ok(Self {
            db_pool,
            jwt_secret,
            i18n_store: I18nStore::new(),
            auth_service,
            profile_service,
            plan_service,
            client_service,
            appointment_service,
            invoice_service,
            dashboard_service,
        })
    }
}
