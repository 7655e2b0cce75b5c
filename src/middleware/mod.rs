//! Authentication and authorization extractors.
//!
//! # Modules
//!
//! - [`auth`]: Bearer token extraction into a [`Principal`](alumnet_auth::Principal)
//! - [`role`]: Role-gated extractors built with [`require_role!`](crate::require_role)
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `AuthUser` validates the token and yields the principal (401 otherwise)
//! 3. Role extractors check the principal's roles (403 otherwise)
//! 4. Handler executes with the principal passed in explicitly
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//! use crate::middleware::role::RequireAdmin;
//!
//! // Any valid token
//! async fn list(AuthUser(principal): AuthUser) -> impl IntoResponse { /* ... */ }
//!
//! // Token holding the `admin` role
//! async fn delete(RequireAdmin(principal): RequireAdmin) -> impl IntoResponse { /* ... */ }
//! ```

pub mod auth;
pub mod role;
