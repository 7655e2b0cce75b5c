use alumnet_core::query::build;
use alumnet_core::{AppError, PageRequest, PageResult};
use alumnet_db::{Violation, execute, storage, violation};
use alumnet_models::{ALUMNI_QUERY, Alumni, CreateAlumniDto, UpdateAlumniDto};
use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{debug, info, instrument};
use uuid::Uuid;

pub struct AlumniService;

impl AlumniService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "alumni"))]
    pub async fn list(db: &PgPool, page: &PageRequest) -> Result<PageResult<Alumni>, AppError> {
        let plan = build(page, &ALUMNI_QUERY);
        execute::<Alumni>(db, &plan, page).await
    }

    #[instrument(skip(db), fields(alumni.id = %id, db.operation = "SELECT", db.table = "alumni"))]
    pub async fn get(db: &PgPool, id: Uuid) -> Result<Alumni, AppError> {
        sqlx::query_as::<_, Alumni>(
            r#"
            SELECT id, nim, nama, jurusan, angkatan, tahun_lulus, email, no_telepon, alamat,
                   created_at, updated_at
            FROM alumni
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| storage(e, "Failed to fetch alumni"))?
        .ok_or_else(|| {
            debug!(alumni.id = %id, "Alumni not found");
            AppError::not_found(anyhow!("Alumni not found"))
        })
    }

    #[instrument(skip(db, dto), fields(alumni.nim = %dto.nim, db.operation = "INSERT", db.table = "alumni"))]
    pub async fn create(db: &PgPool, dto: CreateAlumniDto) -> Result<Alumni, AppError> {
        let alumni = sqlx::query_as::<_, Alumni>(
            r#"
            INSERT INTO alumni (nim, nama, jurusan, angkatan, tahun_lulus, email, no_telepon, alamat)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, nim, nama, jurusan, angkatan, tahun_lulus, email, no_telepon, alamat,
                      created_at, updated_at
            "#,
        )
        .bind(&dto.nim)
        .bind(&dto.nama)
        .bind(&dto.jurusan)
        .bind(dto.angkatan)
        .bind(dto.tahun_lulus)
        .bind(&dto.email)
        .bind(&dto.no_telepon)
        .bind(&dto.alamat)
        .fetch_one(db)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::Unique) => {
                AppError::unprocessable(anyhow!("Alumni with NIM {} already exists", dto.nim))
            }
            _ => storage(e, "Failed to create alumni"),
        })?;

        info!(alumni.id = %alumni.id, "Alumni created");
        Ok(alumni)
    }

    #[instrument(skip(db, dto), fields(alumni.id = %id, db.operation = "UPDATE", db.table = "alumni"))]
    pub async fn update(db: &PgPool, id: Uuid, dto: UpdateAlumniDto) -> Result<Alumni, AppError> {
        sqlx::query_as::<_, Alumni>(
            r#"
            UPDATE alumni
            SET nama = $1, jurusan = $2, angkatan = $3, tahun_lulus = $4, email = $5,
                no_telepon = $6, alamat = $7, updated_at = NOW()
            WHERE id = $8
            RETURNING id, nim, nama, jurusan, angkatan, tahun_lulus, email, no_telepon, alamat,
                      created_at, updated_at
            "#,
        )
        .bind(&dto.nama)
        .bind(&dto.jurusan)
        .bind(dto.angkatan)
        .bind(dto.tahun_lulus)
        .bind(&dto.email)
        .bind(&dto.no_telepon)
        .bind(&dto.alamat)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| storage(e, "Failed to update alumni"))?
        .ok_or_else(|| AppError::not_found(anyhow!("Alumni not found")))
    }

    /// Deleting an alumni also removes their employment records.
    #[instrument(skip(db), fields(alumni.id = %id, db.operation = "DELETE", db.table = "alumni"))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM alumni WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| storage(e, "Failed to delete alumni"))?;

        if result.rows_affected() == 0 {
            debug!(alumni.id = %id, "Alumni not found for deletion");
            return Err(AppError::not_found(anyhow!("Alumni not found")));
        }

        info!(alumni.id = %id, "Alumni deleted");
        Ok(())
    }
}
