use alumnet_core::AppError;
use alumnet_db::storage;
use alumnet_models::{User, UserCredentials};
use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

pub struct UserService;

impl UserService {
    #[instrument(skip(db), fields(user.id = %id, db.operation = "SELECT", db.table = "users"))]
    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.email, u.created_at, u.updated_at,
                   COALESCE(
                       array_agg(r.name::TEXT ORDER BY r.name) FILTER (WHERE r.name IS NOT NULL),
                       '{}'::TEXT[]
                   ) AS roles
            FROM users u
            LEFT JOIN user_roles ur ON ur.user_id = u.id
            LEFT JOIN roles r ON r.id = ur.role_id
            WHERE u.id = $1
            GROUP BY u.id
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| storage(e, "Failed to fetch user"))?
        .ok_or_else(|| {
            debug!(user.id = %id, "User not found");
            AppError::not_found(anyhow!("User not found"))
        })?;

        Ok(user)
    }

    /// Looks up the stored hash and current roles for a login attempt.
    #[instrument(skip(db, email), fields(db.operation = "SELECT", db.table = "users"))]
    pub async fn find_credentials_by_email(
        db: &PgPool,
        email: &str,
    ) -> Result<Option<UserCredentials>, AppError> {
        sqlx::query_as::<_, UserCredentials>(
            r#"
            SELECT u.id, u.email, u.password_hash,
                   COALESCE(
                       array_agg(r.name::TEXT ORDER BY r.name) FILTER (WHERE r.name IS NOT NULL),
                       '{}'::TEXT[]
                   ) AS roles
            FROM users u
            LEFT JOIN user_roles ur ON ur.user_id = u.id
            LEFT JOIN roles r ON r.id = ur.role_id
            WHERE u.email = $1
            GROUP BY u.id
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .map_err(|e| storage(e, "Failed to fetch user credentials"))
    }
}
