use alumnet_core::{AppError, PageResult, PaginationRequest};
use alumnet_models::{Mahasiswa, CreateMahasiswaDto, UpdateMahasiswaDto};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::modules::mahasiswa::service::MahasiswaService;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::{IdPath, PaginationQuery, ValidatedJson};

#[utoipa::path(
    get,
    path = "/api/mahasiswa",
    params(PaginationRequest),
    responses(
        (status = 200, description = "Page of mahasiswa", body = PageResult<Mahasiswa>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Mahasiswa"
)]
#[instrument(skip(state, principal), fields(user.id = %principal.user_id))]
pub async fn get_all_mahasiswa(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    PaginationQuery(page): PaginationQuery,
) -> Result<Json<PageResult<Mahasiswa>>, AppError> {
    let result = MahasiswaService::list(&state.db, &page).await?;
    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/api/mahasiswa/{id}",
    params(
        ("id" = Uuid, Path, description = "Mahasiswa ID")
    ),
    responses(
        (status = 200, description = "Mahasiswa found", body = Mahasiswa),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Mahasiswa not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Mahasiswa"
)]
#[instrument(skip(state, _principal))]
pub async fn get_mahasiswa(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<Mahasiswa>, AppError> {
    let mahasiswa = MahasiswaService::get(&state.db, id).await?;
    Ok(Json(mahasiswa))
}

#[utoipa::path(
    post,
    path = "/api/mahasiswa",
    request_body = CreateMahasiswaDto,
    responses(
        (status = 201, description = "Mahasiswa created", body = Mahasiswa),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 422, description = "Validation failed or NIM already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Mahasiswa"
)]
#[instrument(skip(state, principal, dto), fields(user.id = %principal.user_id))]
pub async fn create_mahasiswa(
    State(state): State<AppState>,
    RequireAdmin(principal): RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateMahasiswaDto>,
) -> Result<(StatusCode, Json<Mahasiswa>), AppError> {
    let mahasiswa = MahasiswaService::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(mahasiswa)))
}

#[utoipa::path(
    put,
    path = "/api/mahasiswa/{id}",
    params(
        ("id" = Uuid, Path, description = "Mahasiswa ID")
    ),
    request_body = UpdateMahasiswaDto,
    responses(
        (status = 200, description = "Mahasiswa updated", body = Mahasiswa),
        (status = 400, description = "Invalid ID or malformed body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 404, description = "Mahasiswa not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Mahasiswa"
)]
#[instrument(skip(state, principal, dto), fields(user.id = %principal.user_id))]
pub async fn update_mahasiswa(
    State(state): State<AppState>,
    RequireAdmin(principal): RequireAdmin,
    IdPath(id): IdPath,
    ValidatedJson(dto): ValidatedJson<UpdateMahasiswaDto>,
) -> Result<Json<Mahasiswa>, AppError> {
    let mahasiswa = MahasiswaService::update(&state.db, id, dto).await?;
    Ok(Json(mahasiswa))
}

#[utoipa::path(
    delete,
    path = "/api/mahasiswa/{id}",
    params(
        ("id" = Uuid, Path, description = "Mahasiswa ID")
    ),
    responses(
        (status = 204, description = "Mahasiswa deleted"),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 404, description = "Mahasiswa not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Mahasiswa"
)]
#[instrument(skip(state, principal), fields(user.id = %principal.user_id))]
pub async fn delete_mahasiswa(
    State(state): State<AppState>,
    RequireAdmin(principal): RequireAdmin,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    MahasiswaService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
