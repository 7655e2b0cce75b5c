//! # Alumnet Auth
//!
//! Stateless bearer-token authentication for the Alumnet API.
//!
//! - [`claims`]: Claims carried inside an access token
//! - [`jwt`]: Token issuance and validation (HS256)
//! - [`principal`]: The authenticated identity and role checks
//!
//! Token lifecycle: issued, then valid while `now < exp`, then expired. There is no
//! server-side session and no revocation.
//!
//! # Example
//!
//! ```ignore
//! use alumnet_auth::{create_access_token, require_role, validate};
//!
//! let token = create_access_token(user_id, "admin@kampus.ac.id", vec!["admin".into()], &jwt)?;
//! let principal = validate(&token, &jwt)?;
//! require_role(&principal, "admin")?;
//! ```

pub mod claims;
pub mod jwt;
pub mod principal;

pub use claims::Claims;
pub use jwt::{create_access_token, create_access_token_at, validate, validate_at};
pub use principal::{Principal, require_role};
