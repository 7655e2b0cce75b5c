use crate::modules::pekerjaan::controller::{
    create_pekerjaan, delete_pekerjaan, get_all_pekerjaan, get_pekerjaan, update_pekerjaan,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_pekerjaan_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_pekerjaan).get(get_all_pekerjaan))
        .route(
            "/{id}",
            get(get_pekerjaan).put(update_pekerjaan).delete(delete_pekerjaan),
        )
}
