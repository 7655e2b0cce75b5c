//! Pekerjaan (alumni employment) models and DTOs.
//!
//! Listing searches across the employer, position and industry of the job and the
//! name of the alumni holding it, so the listing spec joins `alumni` while a search
//! is active.

use alumnet_core::query::{EntityQuerySpec, SortDirection, SortSpec};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

pub const PEKERJAAN_QUERY: EntityQuerySpec = EntityQuerySpec {
    select: "p.id, p.alumni_id, p.nama_perusahaan, p.posisi_jabatan, p.bidang_industri, \
             p.lokasi_kerja, p.gaji_range, p.tanggal_mulai_kerja, p.tanggal_selesai_kerja, \
             p.status_pekerjaan, p.deskripsi_pekerjaan, p.created_at, p.updated_at",
    from: "pekerjaan p",
    join: Some("JOIN alumni a ON p.alumni_id = a.id"),
    key_column: "p.id",
    searchable: &[
        "p.nama_perusahaan",
        "p.posisi_jabatan",
        "p.bidang_industri",
        "a.nama",
    ],
    sortable: &[
        ("nama_perusahaan", "p.nama_perusahaan"),
        ("posisi_jabatan", "p.posisi_jabatan"),
        ("tanggal_mulai_kerja", "p.tanggal_mulai_kerja"),
        ("created_at", "p.created_at"),
    ],
    default_sort: SortSpec::new("p.created_at", SortDirection::Desc),
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pekerjaan {
    pub id: Uuid,
    pub alumni_id: Uuid,
    pub nama_perusahaan: String,
    pub posisi_jabatan: String,
    pub bidang_industri: String,
    pub lokasi_kerja: String,
    pub gaji_range: Option<String>,
    pub tanggal_mulai_kerja: NaiveDate,
    /// Empty while the job is ongoing
    pub tanggal_selesai_kerja: Option<NaiveDate>,
    /// e.g. `aktif`, `selesai`
    pub status_pekerjaan: String,
    pub deskripsi_pekerjaan: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_create_dates"))]
pub struct CreatePekerjaanDto {
    pub alumni_id: Uuid,
    #[validate(length(min = 1, max = 150))]
    pub nama_perusahaan: String,
    #[validate(length(min = 1, max = 100))]
    pub posisi_jabatan: String,
    #[validate(length(min = 1, max = 100))]
    pub bidang_industri: String,
    #[validate(length(min = 1, max = 100))]
    pub lokasi_kerja: String,
    #[validate(length(max = 50))]
    pub gaji_range: Option<String>,
    #[schema(example = "2023-08-01")]
    pub tanggal_mulai_kerja: NaiveDate,
    pub tanggal_selesai_kerja: Option<NaiveDate>,
    #[validate(length(min = 1, max = 50))]
    pub status_pekerjaan: String,
    pub deskripsi_pekerjaan: Option<String>,
}

/// Full replacement of an employment record. The owning alumni cannot be changed.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_update_dates"))]
pub struct UpdatePekerjaanDto {
    #[validate(length(min = 1, max = 150))]
    pub nama_perusahaan: String,
    #[validate(length(min = 1, max = 100))]
    pub posisi_jabatan: String,
    #[validate(length(min = 1, max = 100))]
    pub bidang_industri: String,
    #[validate(length(min = 1, max = 100))]
    pub lokasi_kerja: String,
    #[validate(length(max = 50))]
    pub gaji_range: Option<String>,
    pub tanggal_mulai_kerja: NaiveDate,
    pub tanggal_selesai_kerja: Option<NaiveDate>,
    #[validate(length(min = 1, max = 50))]
    pub status_pekerjaan: String,
    pub deskripsi_pekerjaan: Option<String>,
}

fn end_not_before_start(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), ValidationError> {
    match end {
        Some(end) if end < start => {
            let mut err = ValidationError::new("end_before_start");
            err.message =
                Some("tanggal_selesai_kerja cannot be earlier than tanggal_mulai_kerja".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

fn validate_create_dates(dto: &CreatePekerjaanDto) -> Result<(), ValidationError> {
    end_not_before_start(dto.tanggal_mulai_kerja, dto.tanggal_selesai_kerja)
}

fn validate_update_dates(dto: &UpdatePekerjaanDto) -> Result<(), ValidationError> {
    end_not_before_start(dto.tanggal_mulai_kerja, dto.tanggal_selesai_kerja)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alumnet_core::query::build;
    use alumnet_core::PaginationRequest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_create() -> CreatePekerjaanDto {
        CreatePekerjaanDto {
            alumni_id: Uuid::new_v4(),
            nama_perusahaan: "PT Nusantara Digital".to_string(),
            posisi_jabatan: "Backend Engineer".to_string(),
            bidang_industri: "Teknologi".to_string(),
            lokasi_kerja: "Jakarta".to_string(),
            gaji_range: Some("10-15 juta".to_string()),
            tanggal_mulai_kerja: date(2023, 8, 1),
            tanggal_selesai_kerja: None,
            status_pekerjaan: "aktif".to_string(),
            deskripsi_pekerjaan: None,
        }
    }

    #[test]
    fn test_create_pekerjaan_dto_validation() {
        assert!(valid_create().validate().is_ok());

        let dto = CreatePekerjaanDto {
            tanggal_selesai_kerja: Some(date(2023, 8, 1)),
            ..valid_create()
        };
        assert!(dto.validate().is_ok());

        let dto = CreatePekerjaanDto {
            nama_perusahaan: String::new(),
            ..valid_create()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_end_date_before_start_is_rejected() {
        let dto = CreatePekerjaanDto {
            tanggal_selesai_kerja: Some(date(2023, 7, 31)),
            ..valid_create()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_dates_deserialize_from_iso_strings() {
        let json = r#"{
            "nama_perusahaan": "PT Maju",
            "posisi_jabatan": "Analis",
            "bidang_industri": "Perbankan",
            "lokasi_kerja": "Bandung",
            "gaji_range": null,
            "tanggal_mulai_kerja": "2022-01-10",
            "tanggal_selesai_kerja": "2024-03-31",
            "status_pekerjaan": "selesai",
            "deskripsi_pekerjaan": null
        }"#;
        let dto: UpdatePekerjaanDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.tanggal_mulai_kerja, date(2022, 1, 10));
        assert_eq!(dto.tanggal_selesai_kerja, Some(date(2024, 3, 31)));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_pekerjaan_query_joins_alumni_only_when_searching() {
        let plan = build(&PaginationRequest::default().normalize(), &PEKERJAAN_QUERY);
        assert_eq!(plan.count.sql, "SELECT COUNT(*) FROM pekerjaan p");
        assert!(plan.data.sql.contains("ORDER BY p.created_at DESC, p.id DESC"));

        let page = PaginationRequest {
            search: Some("Budi".to_string()),
            sort: Some("tanggal_mulai_kerja:asc".to_string()),
            ..Default::default()
        }
        .normalize();
        let plan = build(&page, &PEKERJAAN_QUERY);
        assert_eq!(
            plan.count.sql,
            "SELECT COUNT(*) FROM pekerjaan p JOIN alumni a ON p.alumni_id = a.id \
             WHERE (p.nama_perusahaan ILIKE $1 OR p.posisi_jabatan ILIKE $1 \
             OR p.bidang_industri ILIKE $1 OR a.nama ILIKE $1)"
        );
        assert!(plan
            .data
            .sql
            .contains("ORDER BY p.tanggal_mulai_kerja ASC, p.id ASC"));
    }
}
