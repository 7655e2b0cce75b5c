use alumnet_core::{AppError, PageResult, PaginationRequest};
use alumnet_models::{Alumni, CreateAlumniDto, UpdateAlumniDto};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::modules::alumni::service::AlumniService;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::{IdPath, PaginationQuery, ValidatedJson};

#[utoipa::path(
    get,
    path = "/api/alumni",
    params(PaginationRequest),
    responses(
        (status = 200, description = "Page of alumni", body = PageResult<Alumni>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Alumni"
)]
#[instrument(skip(state, principal), fields(user.id = %principal.user_id))]
pub async fn get_all_alumni(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    PaginationQuery(page): PaginationQuery,
) -> Result<Json<PageResult<Alumni>>, AppError> {
    let result = AlumniService::list(&state.db, &page).await?;
    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/api/alumni/{id}",
    params(
        ("id" = Uuid, Path, description = "Alumni ID")
    ),
    responses(
        (status = 200, description = "Alumni found", body = Alumni),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Alumni not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Alumni"
)]
#[instrument(skip(state, _principal))]
pub async fn get_alumni(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<Alumni>, AppError> {
    let alumni = AlumniService::get(&state.db, id).await?;
    Ok(Json(alumni))
}

#[utoipa::path(
    post,
    path = "/api/alumni",
    request_body = CreateAlumniDto,
    responses(
        (status = 201, description = "Alumni created", body = Alumni),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 422, description = "Validation failed or NIM already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Alumni"
)]
#[instrument(skip(state, principal, dto), fields(user.id = %principal.user_id))]
pub async fn create_alumni(
    State(state): State<AppState>,
    RequireAdmin(principal): RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateAlumniDto>,
) -> Result<(StatusCode, Json<Alumni>), AppError> {
    let alumni = AlumniService::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(alumni)))
}

#[utoipa::path(
    put,
    path = "/api/alumni/{id}",
    params(
        ("id" = Uuid, Path, description = "Alumni ID")
    ),
    request_body = UpdateAlumniDto,
    responses(
        (status = 200, description = "Alumni updated", body = Alumni),
        (status = 400, description = "Invalid ID or malformed body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 404, description = "Alumni not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Alumni"
)]
#[instrument(skip(state, principal, dto), fields(user.id = %principal.user_id))]
pub async fn update_alumni(
    State(state): State<AppState>,
    RequireAdmin(principal): RequireAdmin,
    IdPath(id): IdPath,
    ValidatedJson(dto): ValidatedJson<UpdateAlumniDto>,
) -> Result<Json<Alumni>, AppError> {
    let alumni = AlumniService::update(&state.db, id, dto).await?;
    Ok(Json(alumni))
}

#[utoipa::path(
    delete,
    path = "/api/alumni/{id}",
    params(
        ("id" = Uuid, Path, description = "Alumni ID")
    ),
    responses(
        (status = 204, description = "Alumni deleted"),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 404, description = "Alumni not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Alumni"
)]
#[instrument(skip(state, principal), fields(user.id = %principal.user_id))]
pub async fn delete_alumni(
    State(state): State<AppState>,
    RequireAdmin(principal): RequireAdmin,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    AlumniService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
