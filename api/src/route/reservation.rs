use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{register_reservation, show_reservation};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservation_routers = Router::new()
        .route("/", post(register_reservation))
        .route("/:reservation_id", get(show_reservation));

    Router::new().nest("/reservations", reservation_routers)
}
