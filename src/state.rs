use std::sync::Arc;

use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::registry::RegistryConfig;
use crate::config::supabase::SupabaseConfig;
use crate::modules::auth::service::{AuthResolver, GoTrueClient, PgAdminDirectory};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub auth: AuthResolver,
    pub http: reqwest::Client,
    pub cors_config: CorsConfig,
    pub registry_config: RegistryConfig,
}

pub async fn init_app_state() -> AppState {
    let db = init_db_pool().await;
    let supabase_config = SupabaseConfig::from_env();

    let auth = AuthResolver::new(
        Arc::new(GoTrueClient::new(&supabase_config)),
        Arc::new(PgAdminDirectory::new(db.clone())),
        supabase_config.admin_email_domain.clone(),
    );

    AppState {
        db,
        auth,
        http: reqwest::Client::new(),
        cors_config: CorsConfig::from_env(),
        registry_config: RegistryConfig::from_env(),
    }
}
