use alumnet_config::{AuthConfig, CorsConfig, DatabaseConfig, JwtConfig};
use alumnet_db::init_db_pool;
use sqlx::PgPool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub auth_config: AuthConfig,
}

impl AppState {
    /// State around an existing pool, with every other setting read from the
    /// environment.
    pub fn from_pool(db: PgPool) -> Self {
        Self {
            db,
            jwt_config: JwtConfig::from_env(),
            cors_config: CorsConfig::from_env(),
            auth_config: AuthConfig::from_env(),
        }
    }
}

pub async fn init_app_state() -> Result<AppState, sqlx::Error> {
    let db = init_db_pool(&DatabaseConfig::from_env()).await?;
    Ok(AppState::from_pool(db))
}
