//! # Alumnet Models
//!
//! Domain models and DTOs for the Alumnet API.
//!
//! Each entity module also carries the `EntityQuerySpec` that controls how the
//! entity may be listed: the searchable columns, the sort whitelist and the
//! default ordering.
//!
//! # Modules
//!
//! - [`auth`]: Register and login payloads
//! - [`users`]: User accounts and role names
//! - [`alumni`]: Graduates
//! - [`mahasiswa`]: Enrolled students
//! - [`pekerjaan`]: Employment history of alumni
//!
//! # Example
//!
//! ```ignore
//! use alumnet_core::query::build;
//! use alumnet_models::alumni::{Alumni, ALUMNI_QUERY};
//!
//! let plan = build(&page, &ALUMNI_QUERY);
//! let result = alumnet_db::execute::<Alumni>(&pool, &plan, &page).await?;
//! ```

pub mod alumni;
pub mod auth;
pub mod mahasiswa;
pub mod pekerjaan;
pub mod users;

pub use alumni::{ALUMNI_QUERY, Alumni, CreateAlumniDto, UpdateAlumniDto};
pub use auth::{LoginRequest, LoginResponse, RegisterRequest};
pub use mahasiswa::{CreateMahasiswaDto, MAHASISWA_QUERY, Mahasiswa, UpdateMahasiswaDto};
pub use pekerjaan::{CreatePekerjaanDto, PEKERJAAN_QUERY, Pekerjaan, UpdatePekerjaanDto};
pub use users::{User, UserCredentials, roles};
