use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::payment::{confirm_payment, show_receipt};

pub fn build_payment_routers() -> Router<AppRegistry> {
    Router::new()
        .nest("/payments", Router::new().route("/", post(confirm_payment)))
        .route("/receipts/:payment_id", get(show_receipt))
}
