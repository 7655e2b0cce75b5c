pub mod alumni;
pub mod auth;
pub mod mahasiswa;
pub mod pekerjaan;
pub mod users;
