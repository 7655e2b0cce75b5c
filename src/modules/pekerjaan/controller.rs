use alumnet_core::{AppError, PageResult, PaginationRequest};
use alumnet_models::{Pekerjaan, CreatePekerjaanDto, UpdatePekerjaanDto};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::modules::pekerjaan::service::PekerjaanService;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::{IdPath, PaginationQuery, ValidatedJson};

#[utoipa::path(
    get,
    path = "/api/pekerjaan",
    params(PaginationRequest),
    responses(
        (status = 200, description = "Page of employment records", body = PageResult<Pekerjaan>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Pekerjaan"
)]
#[instrument(skip(state, principal), fields(user.id = %principal.user_id))]
pub async fn get_all_pekerjaan(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    PaginationQuery(page): PaginationQuery,
) -> Result<Json<PageResult<Pekerjaan>>, AppError> {
    let result = PekerjaanService::list(&state.db, &page).await?;
    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/api/pekerjaan/{id}",
    params(
        ("id" = Uuid, Path, description = "Pekerjaan ID")
    ),
    responses(
        (status = 200, description = "Pekerjaan found", body = Pekerjaan),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Pekerjaan not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Pekerjaan"
)]
#[instrument(skip(state, _principal))]
pub async fn get_pekerjaan(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<Pekerjaan>, AppError> {
    let pekerjaan = PekerjaanService::get(&state.db, id).await?;
    Ok(Json(pekerjaan))
}

#[utoipa::path(
    post,
    path = "/api/pekerjaan",
    request_body = CreatePekerjaanDto,
    responses(
        (status = 201, description = "Pekerjaan created", body = Pekerjaan),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 422, description = "Validation failed or alumni not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Pekerjaan"
)]
#[instrument(skip(state, principal, dto), fields(user.id = %principal.user_id))]
pub async fn create_pekerjaan(
    State(state): State<AppState>,
    RequireAdmin(principal): RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreatePekerjaanDto>,
) -> Result<(StatusCode, Json<Pekerjaan>), AppError> {
    let pekerjaan = PekerjaanService::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(pekerjaan)))
}

#[utoipa::path(
    put,
    path = "/api/pekerjaan/{id}",
    params(
        ("id" = Uuid, Path, description = "Pekerjaan ID")
    ),
    request_body = UpdatePekerjaanDto,
    responses(
        (status = 200, description = "Pekerjaan updated", body = Pekerjaan),
        (status = 400, description = "Invalid ID or malformed body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 404, description = "Pekerjaan not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Pekerjaan"
)]
#[instrument(skip(state, principal, dto), fields(user.id = %principal.user_id))]
pub async fn update_pekerjaan(
    State(state): State<AppState>,
    RequireAdmin(principal): RequireAdmin,
    IdPath(id): IdPath,
    ValidatedJson(dto): ValidatedJson<UpdatePekerjaanDto>,
) -> Result<Json<Pekerjaan>, AppError> {
    let pekerjaan = PekerjaanService::update(&state.db, id, dto).await?;
    Ok(Json(pekerjaan))
}

#[utoipa::path(
    delete,
    path = "/api/pekerjaan/{id}",
    params(
        ("id" = Uuid, Path, description = "Pekerjaan ID")
    ),
    responses(
        (status = 204, description = "Pekerjaan deleted"),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 404, description = "Pekerjaan not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Pekerjaan"
)]
#[instrument(skip(state, principal), fields(user.id = %principal.user_id))]
pub async fn delete_pekerjaan(
    State(state): State<AppState>,
    RequireAdmin(principal): RequireAdmin,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    PekerjaanService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
