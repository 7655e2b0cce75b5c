//! Mahasiswa (enrolled student) models and DTOs.

use alumnet_core::query::{EntityQuerySpec, SortDirection, SortSpec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

pub const MAHASISWA_QUERY: EntityQuerySpec = EntityQuerySpec {
    select: "id, nim, nama, jurusan, angkatan, email, created_at, updated_at",
    from: "mahasiswa",
    join: None,
    key_column: "id",
    searchable: &["nim", "nama", "jurusan", "email"],
    sortable: &[
        ("nim", "nim"),
        ("nama", "nama"),
        ("jurusan", "jurusan"),
        ("angkatan", "angkatan"),
        ("created_at", "created_at"),
    ],
    default_sort: SortSpec::new("created_at", SortDirection::Desc),
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Mahasiswa {
    pub id: Uuid,
    pub nim: String,
    pub nama: String,
    pub jurusan: String,
    pub angkatan: i32,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMahasiswaDto {
    #[validate(length(min = 1, max = 20))]
    #[schema(example = "2023010042")]
    pub nim: String,
    #[validate(length(min = 1, max = 100))]
    pub nama: String,
    #[validate(length(min = 1, max = 100))]
    pub jurusan: String,
    #[validate(range(min = 1900, max = 2100))]
    pub angkatan: i32,
    #[validate(email)]
    pub email: String,
}

/// Full replacement of a student record. The NIM cannot be changed.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateMahasiswaDto {
    #[validate(length(min = 1, max = 100))]
    pub nama: String,
    #[validate(length(min = 1, max = 100))]
    pub jurusan: String,
    #[validate(range(min = 1900, max = 2100))]
    pub angkatan: i32,
    #[validate(email)]
    pub email: String,
}
