use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::pages::{about, contact, landing, services};

/// サイトの静的ページ。/api/v1 の外側に置く
pub fn build_pages_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/", get(landing))
        .route("/about", get(about))
        .route("/services", get(services))
        .route("/contact", get(contact))
}
