/// Generates an extractor that authenticates the caller and then requires a role.
///
/// The generated type wraps the [`Principal`](alumnet_auth::Principal), so handlers
/// receive the checked identity directly.
#[macro_export]
macro_rules! require_role {
    ($name:ident, $role:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub alumnet_auth::Principal);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = alumnet_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let $crate::middleware::auth::AuthUser(principal) = <$crate::middleware::auth::AuthUser as axum::extract::FromRequestParts<
                    $crate::state::AppState,
                >>::from_request_parts(parts, state)
                .await?;

                alumnet_auth::require_role(&principal, $role)?;

                Ok($name(principal))
            }
        }
    };
}

require_role!(RequireAdmin, alumnet_models::roles::ADMIN);
