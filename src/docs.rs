use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use alumnet_core::PaginationRequest;
use alumnet_models::{
    Alumni, CreateAlumniDto, CreateMahasiswaDto, CreatePekerjaanDto, LoginRequest, LoginResponse,
    Mahasiswa, Pekerjaan, RegisterRequest, UpdateAlumniDto, UpdateMahasiswaDto,
    UpdatePekerjaanDto, User,
};

use crate::modules::auth::controller::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::get_me,
        crate::modules::alumni::controller::get_all_alumni,
        crate::modules::alumni::controller::get_alumni,
        crate::modules::alumni::controller::create_alumni,
        crate::modules::alumni::controller::update_alumni,
        crate::modules::alumni::controller::delete_alumni,
        crate::modules::mahasiswa::controller::get_all_mahasiswa,
        crate::modules::mahasiswa::controller::get_mahasiswa,
        crate::modules::mahasiswa::controller::create_mahasiswa,
        crate::modules::mahasiswa::controller::update_mahasiswa,
        crate::modules::mahasiswa::controller::delete_mahasiswa,
        crate::modules::pekerjaan::controller::get_all_pekerjaan,
        crate::modules::pekerjaan::controller::get_pekerjaan,
        crate::modules::pekerjaan::controller::create_pekerjaan,
        crate::modules::pekerjaan::controller::update_pekerjaan,
        crate::modules::pekerjaan::controller::delete_pekerjaan,
    ),
    components(
        schemas(
            User,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            ErrorResponse,
            PaginationRequest,
            Alumni,
            CreateAlumniDto,
            UpdateAlumniDto,
            Mahasiswa,
            CreateMahasiswaDto,
            UpdateMahasiswaDto,
            Pekerjaan,
            CreatePekerjaanDto,
            UpdatePekerjaanDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Users", description = "Current user"),
        (name = "Alumni", description = "Graduate records"),
        (name = "Mahasiswa", description = "Enrolled student records"),
        (name = "Pekerjaan", description = "Alumni employment history")
    ),
    info(
        title = "Alumnet API",
        version = "0.1.0",
        description = "Alumni, student and employment records with JWT authentication and role-based access.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
