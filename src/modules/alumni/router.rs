use crate::modules::alumni::controller::{
    create_alumni, delete_alumni, get_all_alumni, get_alumni, update_alumni,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_alumni_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_alumni).get(get_all_alumni))
        .route(
            "/{id}",
            get(get_alumni).put(update_alumni).delete(delete_alumni),
        )
}
