use std::env;

use crate::string_or;

/// Account policy for self-service registration.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Role granted by `POST /api/auth/register`. Admins are created through the CLI.
    pub registration_role: String,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let role = string_or(&lookup, "AUTH_REGISTRATION_ROLE", "user");
        let role = role.trim();

        Self {
            registration_role: if role.is_empty() { "user" } else { role }.to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            registration_role: "user".to_string(),
        }
    }
}
