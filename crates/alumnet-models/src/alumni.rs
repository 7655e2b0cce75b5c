//! Alumni (graduate) models and DTOs.

use alumnet_core::query::{EntityQuerySpec, SortDirection, SortSpec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

pub const ALUMNI_QUERY: EntityQuerySpec = EntityQuerySpec {
    select: "id, nim, nama, jurusan, angkatan, tahun_lulus, email, no_telepon, alamat, \
             created_at, updated_at",
    from: "alumni",
    join: None,
    key_column: "id",
    searchable: &["nim", "nama", "jurusan", "email"],
    sortable: &[
        ("nim", "nim"),
        ("nama", "nama"),
        ("jurusan", "jurusan"),
        ("angkatan", "angkatan"),
        ("tahun_lulus", "tahun_lulus"),
        ("created_at", "created_at"),
    ],
    default_sort: SortSpec::new("created_at", SortDirection::Desc),
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Alumni {
    pub id: Uuid,
    /// Student number, unique across alumni
    pub nim: String,
    pub nama: String,
    pub jurusan: String,
    /// Year of enrollment
    pub angkatan: i32,
    /// Year of graduation
    pub tahun_lulus: i32,
    pub email: String,
    pub no_telepon: Option<String>,
    pub alamat: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_create_years"))]
pub struct CreateAlumniDto {
    #[validate(length(min = 1, max = 20))]
    #[schema(example = "2019010001")]
    pub nim: String,
    #[validate(length(min = 1, max = 100))]
    pub nama: String,
    #[validate(length(min = 1, max = 100))]
    pub jurusan: String,
    #[validate(range(min = 1900, max = 2100))]
    pub angkatan: i32,
    #[validate(range(min = 1900, max = 2100))]
    pub tahun_lulus: i32,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 20))]
    pub no_telepon: Option<String>,
    pub alamat: Option<String>,
}

/// Full replacement of an alumni record. The NIM cannot be changed.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_update_years"))]
pub struct UpdateAlumniDto {
    #[validate(length(min = 1, max = 100))]
    pub nama: String,
    #[validate(length(min = 1, max = 100))]
    pub jurusan: String,
    #[validate(range(min = 1900, max = 2100))]
    pub angkatan: i32,
    #[validate(range(min = 1900, max = 2100))]
    pub tahun_lulus: i32,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 20))]
    pub no_telepon: Option<String>,
    pub alamat: Option<String>,
}

fn graduation_after_enrollment(angkatan: i32, tahun_lulus: i32) -> Result<(), ValidationError> {
    if tahun_lulus < angkatan {
        let mut err = ValidationError::new("tahun_lulus_before_angkatan");
        err.message = Some("tahun_lulus cannot be earlier than angkatan".into());
        return Err(err);
    }
    Ok(())
}

fn validate_create_years(dto: &CreateAlumniDto) -> Result<(), ValidationError> {
    graduation_after_enrollment(dto.angkatan, dto.tahun_lulus)
}

fn validate_update_years(dto: &UpdateAlumniDto) -> Result<(), ValidationError> {
    graduation_after_enrollment(dto.angkatan, dto.tahun_lulus)
}
