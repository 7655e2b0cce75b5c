//! # Alumnet Config
//!
//! Configuration types for the Alumnet API, loaded from environment variables.
//!
//! - [`auth`]: Self-registration policy
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL connection settings
//! - [`jwt`]: JWT signing and expiry
//! - [`server`]: Bind address
//!
//! Every loader falls back to a default when a variable is missing or does not
//! parse, so `from_env()` never fails.
//!
//! # Example
//!
//! ```ignore
//! use alumnet_config::{DatabaseConfig, JwtConfig, ServerConfig};
//!
//! dotenvy::dotenv().ok();
//! let db = DatabaseConfig::from_env();
//! let jwt = JwtConfig::from_env();
//! let server = ServerConfig::from_env();
//! ```

pub mod auth;
pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

pub use auth::AuthConfig;
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Reads a variable and parses it, falling back to `default` when it is unset or
/// malformed.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

pub(crate) fn string_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
pub(crate) fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: std::collections::HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}
