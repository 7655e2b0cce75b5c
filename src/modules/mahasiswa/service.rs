use alumnet_core::query::build;
use alumnet_core::{AppError, PageRequest, PageResult};
use alumnet_db::{Violation, execute, storage, violation};
use alumnet_models::{CreateMahasiswaDto, MAHASISWA_QUERY, Mahasiswa, UpdateMahasiswaDto};
use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{debug, info, instrument};
use uuid::Uuid;

const MAHASISWA_COLUMNS: &str = "id, nim, nama, jurusan, angkatan, email, created_at, updated_at";

pub struct MahasiswaService;

impl MahasiswaService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "mahasiswa"))]
    pub async fn list(
        db: &PgPool,
        page: &PageRequest,
    ) -> Result<PageResult<Mahasiswa>, AppError> {
        let plan = build(page, &MAHASISWA_QUERY);
        execute::<Mahasiswa>(db, &plan, page).await
    }

    #[instrument(skip(db), fields(mahasiswa.id = %id, db.operation = "SELECT", db.table = "mahasiswa"))]
    pub async fn get(db: &PgPool, id: Uuid) -> Result<Mahasiswa, AppError> {
        let sql = format!("SELECT {MAHASISWA_COLUMNS} FROM mahasiswa WHERE id = $1");
        sqlx::query_as::<_, Mahasiswa>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(|e| storage(e, "Failed to fetch mahasiswa"))?
            .ok_or_else(|| {
                debug!(mahasiswa.id = %id, "Mahasiswa not found");
                AppError::not_found(anyhow!("Mahasiswa not found"))
            })
    }

    #[instrument(skip(db, dto), fields(mahasiswa.nim = %dto.nim, db.operation = "INSERT", db.table = "mahasiswa"))]
    pub async fn create(db: &PgPool, dto: CreateMahasiswaDto) -> Result<Mahasiswa, AppError> {
        let sql = format!(
            "INSERT INTO mahasiswa (nim, nama, jurusan, angkatan, email) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {MAHASISWA_COLUMNS}"
        );
        let mahasiswa = sqlx::query_as::<_, Mahasiswa>(&sql)
            .bind(&dto.nim)
            .bind(&dto.nama)
            .bind(&dto.jurusan)
            .bind(dto.angkatan)
            .bind(&dto.email)
            .fetch_one(db)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::Unique) => AppError::unprocessable(anyhow!(
                    "Mahasiswa with NIM {} already exists",
                    dto.nim
                )),
                _ => storage(e, "Failed to create mahasiswa"),
            })?;

        info!(mahasiswa.id = %mahasiswa.id, "Mahasiswa created");
        Ok(mahasiswa)
    }

    #[instrument(skip(db, dto), fields(mahasiswa.id = %id, db.operation = "UPDATE", db.table = "mahasiswa"))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateMahasiswaDto,
    ) -> Result<Mahasiswa, AppError> {
        let sql = format!(
            "UPDATE mahasiswa \
             SET nama = $1, jurusan = $2, angkatan = $3, email = $4, updated_at = NOW() \
             WHERE id = $5 RETURNING {MAHASISWA_COLUMNS}"
        );
        sqlx::query_as::<_, Mahasiswa>(&sql)
            .bind(&dto.nama)
            .bind(&dto.jurusan)
            .bind(dto.angkatan)
            .bind(&dto.email)
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(|e| storage(e, "Failed to update mahasiswa"))?
            .ok_or_else(|| AppError::not_found(anyhow!("Mahasiswa not found")))
    }

    #[instrument(skip(db), fields(mahasiswa.id = %id, db.operation = "DELETE", db.table = "mahasiswa"))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM mahasiswa WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| storage(e, "Failed to delete mahasiswa"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Mahasiswa not found")));
        }

        info!(mahasiswa.id = %id, "Mahasiswa deleted");
        Ok(())
    }
}
