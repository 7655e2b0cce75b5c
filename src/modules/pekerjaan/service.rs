use alumnet_core::query::build;
use alumnet_core::{AppError, PageRequest, PageResult};
use alumnet_db::{Violation, execute, storage, violation};
use alumnet_models::{CreatePekerjaanDto, PEKERJAAN_QUERY, Pekerjaan, UpdatePekerjaanDto};
use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{debug, info, instrument};
use uuid::Uuid;

const PEKERJAAN_COLUMNS: &str = "id, alumni_id, nama_perusahaan, posisi_jabatan, bidang_industri, \
     lokasi_kerja, gaji_range, tanggal_mulai_kerja, tanggal_selesai_kerja, status_pekerjaan, \
     deskripsi_pekerjaan, created_at, updated_at";

/// Maps write failures that the caller can fix to 422.
fn write_error(err: sqlx::Error, context: &'static str) -> AppError {
    match violation(&err) {
        Some(Violation::ForeignKey) => AppError::unprocessable(anyhow!("Alumni not found")),
        Some(Violation::Check) => AppError::unprocessable(anyhow!(
            "tanggal_selesai_kerja must not be before tanggal_mulai_kerja"
        )),
        _ => storage(err, context),
    }
}

pub struct PekerjaanService;

impl PekerjaanService {
    /// Search also matches the owning alumni's name.
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "pekerjaan"))]
    pub async fn list(
        db: &PgPool,
        page: &PageRequest,
    ) -> Result<PageResult<Pekerjaan>, AppError> {
        let plan = build(page, &PEKERJAAN_QUERY);
        execute::<Pekerjaan>(db, &plan, page).await
    }

    #[instrument(skip(db), fields(pekerjaan.id = %id, db.operation = "SELECT", db.table = "pekerjaan"))]
    pub async fn get(db: &PgPool, id: Uuid) -> Result<Pekerjaan, AppError> {
        let sql = format!("SELECT {PEKERJAAN_COLUMNS} FROM pekerjaan WHERE id = $1");
        sqlx::query_as::<_, Pekerjaan>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(|e| storage(e, "Failed to fetch pekerjaan"))?
            .ok_or_else(|| {
                debug!(pekerjaan.id = %id, "Pekerjaan not found");
                AppError::not_found(anyhow!("Pekerjaan not found"))
            })
    }

    #[instrument(skip(db, dto), fields(alumni.id = %dto.alumni_id, db.operation = "INSERT", db.table = "pekerjaan"))]
    pub async fn create(db: &PgPool, dto: CreatePekerjaanDto) -> Result<Pekerjaan, AppError> {
        let sql = format!(
            "INSERT INTO pekerjaan (alumni_id, nama_perusahaan, posisi_jabatan, bidang_industri, \
             lokasi_kerja, gaji_range, tanggal_mulai_kerja, tanggal_selesai_kerja, \
             status_pekerjaan, deskripsi_pekerjaan) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING {PEKERJAAN_COLUMNS}"
        );
        let pekerjaan = sqlx::query_as::<_, Pekerjaan>(&sql)
            .bind(dto.alumni_id)
            .bind(&dto.nama_perusahaan)
            .bind(&dto.posisi_jabatan)
            .bind(&dto.bidang_industri)
            .bind(&dto.lokasi_kerja)
            .bind(&dto.gaji_range)
            .bind(dto.tanggal_mulai_kerja)
            .bind(dto.tanggal_selesai_kerja)
            .bind(&dto.status_pekerjaan)
            .bind(&dto.deskripsi_pekerjaan)
            .fetch_one(db)
            .await
            .map_err(|e| write_error(e, "Failed to create pekerjaan"))?;

        info!(pekerjaan.id = %pekerjaan.id, "Pekerjaan created");
        Ok(pekerjaan)
    }

    #[instrument(skip(db, dto), fields(pekerjaan.id = %id, db.operation = "UPDATE", db.table = "pekerjaan"))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdatePekerjaanDto,
    ) -> Result<Pekerjaan, AppError> {
        let sql = format!(
            "UPDATE pekerjaan \
             SET nama_perusahaan = $1, posisi_jabatan = $2, bidang_industri = $3, \
                 lokasi_kerja = $4, gaji_range = $5, tanggal_mulai_kerja = $6, \
                 tanggal_selesai_kerja = $7, status_pekerjaan = $8, deskripsi_pekerjaan = $9, \
                 updated_at = NOW() \
             WHERE id = $10 RETURNING {PEKERJAAN_COLUMNS}"
        );
        sqlx::query_as::<_, Pekerjaan>(&sql)
            .bind(&dto.nama_perusahaan)
            .bind(&dto.posisi_jabatan)
            .bind(&dto.bidang_industri)
            .bind(&dto.lokasi_kerja)
            .bind(&dto.gaji_range)
            .bind(dto.tanggal_mulai_kerja)
            .bind(dto.tanggal_selesai_kerja)
            .bind(&dto.status_pekerjaan)
            .bind(&dto.deskripsi_pekerjaan)
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(|e| write_error(e, "Failed to update pekerjaan"))?
            .ok_or_else(|| AppError::not_found(anyhow!("Pekerjaan not found")))
    }

    #[instrument(skip(db), fields(pekerjaan.id = %id, db.operation = "DELETE", db.table = "pekerjaan"))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM pekerjaan WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| storage(e, "Failed to delete pekerjaan"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Pekerjaan not found")));
        }

        info!(pekerjaan.id = %id, "Pekerjaan deleted");
        Ok(())
    }
}
