use alumnet_auth::create_access_token;
use alumnet_config::JwtConfig;
use alumnet_core::{AppError, hash_password, verify_dummy, verify_password};
use alumnet_db::{Violation, storage, violation};
use alumnet_models::{LoginRequest, RegisterRequest, User};
use anyhow::anyhow;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::modules::users::service::UserService;
use crate::validator::format_errors;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub struct AuthService;

impl AuthService {
    /// Creates a user holding `role`.
    ///
    /// The user row and its role assignment are written in one transaction; an
    /// unknown role or a duplicate email leaves nothing behind.
    #[instrument(skip(db, dto), fields(db.operation = "INSERT", db.table = "users", role = %role))]
    pub async fn register(db: &PgPool, dto: RegisterRequest, role: &str) -> Result<User, AppError> {
        dto.validate()
            .map_err(|errors| AppError::unprocessable(anyhow!("{}", format_errors(&errors))))?;

        let password_hash = hash_password(&dto.password)?;

        let mut tx = db
            .begin()
            .await
            .map_err(|e| storage(e, "Failed to start transaction"))?;

        let (id, created_at, updated_at): (Uuid, DateTime<Utc>, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, created_at, updated_at
            "#,
        )
        .bind(&dto.email)
        .bind(&password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::Unique) => {
                AppError::unprocessable(anyhow!("Email already registered"))
            }
            _ => storage(e, "Failed to insert user"),
        })?;

        let role_id: Uuid = sqlx::query_scalar("SELECT id FROM roles WHERE name = $1")
            .bind(role)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| storage(e, "Failed to look up role"))?
            .ok_or_else(|| {
                warn!(role = %role, "Registration with unknown role");
                AppError::unprocessable(anyhow!("Unknown role"))
            })?;

        sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)")
            .bind(id)
            .bind(role_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| storage(e, "Failed to assign role"))?;

        tx.commit()
            .await
            .map_err(|e| storage(e, "Failed to commit registration"))?;

        info!(user.id = %id, role = %role, "User registered");

        Ok(User {
            id,
            email: dto.email,
            roles: vec![role.to_string()],
            created_at,
            updated_at,
        })
    }

    /// Verifies credentials and issues an access token carrying the user's roles.
    ///
    /// An unknown email and a wrong password fail with the same error after the
    /// same amount of bcrypt work.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        let Some(credentials) = UserService::find_credentials_by_email(db, &dto.email).await?
        else {
            verify_dummy(&dto.password);
            warn!("Login failed");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !verify_password(&dto.password, &credentials.password_hash)? {
            warn!(user.id = %credentials.id, "Login failed");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let token = create_access_token(
            credentials.id,
            &credentials.email,
            credentials.roles,
            jwt_config,
        )?;

        info!(user.id = %credentials.id, "User logged in");

        Ok(token)
    }
}
