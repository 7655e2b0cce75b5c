use crate::docs::ApiDoc;
use crate::modules::alumni::router::init_alumni_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::mahasiswa::router::init_mahasiswa_router;
use crate::modules::pekerjaan::router::init_pekerjaan_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;
use alumnet_config::CorsConfig;
use alumnet_observability::logging_middleware;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use axum::{Json, Router, middleware};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Route-level authentication lives in the handler extractors
/// (`AuthUser`, `RequireAdmin`), so every module router is nested as is.
pub fn init_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config);

    Router::new()
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest("/users", init_users_router())
                .nest("/alumni", init_alumni_router())
                .nest("/mahasiswa", init_mahasiswa_router())
                .nest("/pekerjaan", init_pekerjaan_router()),
        )
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    // Credentials cannot be combined with a wildcard origin.
    if config.allows_any() {
        return layer.allow_origin(Any);
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    layer.allow_origin(allowed_origins).allow_credentials(true)
}
