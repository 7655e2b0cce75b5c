//! JWT (JSON Web Token) issuance and validation.
//!
//! Tokens are HS256-signed with the shared secret from [`JwtConfig`]. Validation
//! checks the signature first, then expiry, then the subject. Expiry is compared
//! here against an explicit clock instead of the library's leeway-based check, so
//! a token is rejected from the exact second `now >= exp`.
//!
//! # Example
//!
//! ```ignore
//! use alumnet_auth::{create_access_token, validate};
//! use alumnet_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "user@kampus.ac.id", vec!["user".into()], &config)?;
//! let principal = validate(&token, &config)?;
//! ```

use alumnet_config::JwtConfig;
use alumnet_core::AppError;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::claims::Claims;
use crate::principal::Principal;

const INVALID_TOKEN: &str = "Invalid token";
const EXPIRED_TOKEN: &str = "Token has expired";

/// Creates an access token valid for `jwt_config.access_token_expiry` seconds.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    roles: Vec<String>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    create_access_token_at(user_id, email, roles, jwt_config, Utc::now().timestamp())
}

/// Same as [`create_access_token`] with an explicit issue time.
pub fn create_access_token_at(
    user_id: Uuid,
    email: &str,
    roles: Vec<String>,
    jwt_config: &JwtConfig,
    now: i64,
) -> Result<String, AppError> {
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        roles,
        iat: now,
        exp: now.saturating_add(jwt_config.access_token_expiry),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Validates a token against the current time.
///
/// # Errors
///
/// Returns an unauthorized error with `"Invalid token"` for a bad signature or a
/// malformed token, and `"Token has expired"` once `now >= exp`.
pub fn validate(token: &str, jwt_config: &JwtConfig) -> Result<Principal, AppError> {
    validate_at(token, jwt_config, Utc::now().timestamp())
}

/// Validates a token against the supplied Unix timestamp.
pub fn validate_at(token: &str, jwt_config: &JwtConfig, now: i64) -> Result<Principal, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(INVALID_TOKEN))?;

    if now >= claims.exp {
        return Err(AppError::unauthorized(EXPIRED_TOKEN));
    }

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::unauthorized(INVALID_TOKEN))?;

    Ok(Principal {
        user_id,
        email: claims.email,
        roles: claims.roles.into_iter().collect(),
    })
}
