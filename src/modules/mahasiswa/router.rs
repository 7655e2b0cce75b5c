use crate::modules::mahasiswa::controller::{
    create_mahasiswa, delete_mahasiswa, get_all_mahasiswa, get_mahasiswa, update_mahasiswa,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_mahasiswa_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_mahasiswa).get(get_all_mahasiswa))
        .route(
            "/{id}",
            get(get_mahasiswa).put(update_mahasiswa).delete(delete_mahasiswa),
        )
}
