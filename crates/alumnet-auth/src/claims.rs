//! JWT claims for access tokens.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Claims embedded in every access token.
///
/// - `sub`: User ID (UUID string)
/// - `email`: User's email address
/// - `roles`: Role names held when the token was issued
/// - `iat` / `exp`: Unix timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// Role names. Missing or malformed values decode as no roles.
    #[serde(default, deserialize_with = "deserialize_roles")]
    pub roles: Vec<String>,
    /// Token issued-at timestamp (Unix timestamp)
    #[serde(default)]
    pub iat: i64,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: i64,
}

/// Accepts only an array of strings. Anything else yields an empty list, which
/// every role check then denies.
fn deserialize_roles<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    let roles: Option<Vec<String>> = items
        .into_iter()
        .map(|item| match item {
            Value::String(role) => Some(role),
            _ => None,
        })
        .collect();

    Ok(roles.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize() {
        let claims = Claims {
            sub: "9b1deb4d-3b7d-4bad-9bdd-2b0d7b3dcb6d".to_string(),
            email: "admin@kampus.ac.id".to_string(),
            roles: vec!["admin".to_string()],
            iat: 1_700_000_000,
            exp: 1_700_003_600,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""email":"admin@kampus.ac.id""#));
        assert!(serialized.contains(r#""roles":["admin"]"#));
        assert!(serialized.contains(r#""exp":1700003600"#));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"u-1","email":"user@test.com","roles":["user","admin"],"iat":10,"exp":20}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.roles, vec!["user", "admin"]);
        assert_eq!(claims.exp, 20);
    }

    #[test]
    fn test_missing_roles_decode_as_empty() {
        let json = r#"{"sub":"u-1","email":"user@test.com","iat":10,"exp":20}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert!(claims.roles.is_empty());
    }

    #[test]
    fn test_malformed_roles_decode_as_empty() {
        let cases = [
            r#""admin""#,
            r#"null"#,
            r#"{"admin":true}"#,
            r#"["admin", 1]"#,
            r#"[["admin"]]"#,
        ];

        for roles in cases {
            let json = format!(r#"{{"sub":"u-1","email":"e","roles":{roles},"iat":1,"exp":2}}"#);
            let claims: Claims = serde_json::from_str(&json).unwrap();
            assert!(claims.roles.is_empty(), "roles {roles} should decode as empty");
        }
    }
}
