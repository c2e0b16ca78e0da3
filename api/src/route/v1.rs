use axum::Router;
use registry::AppRegistry;

use super::{
    admin::build_admin_routers, auth::build_auth_routers, health::build_health_check_routers,
    payment::build_payment_routers, reservation::build_reservation_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_auth_routers())
        .merge(build_reservation_routers())
        .merge(build_payment_routers())
        .merge(build_admin_routers());
    Router::new().nest("/api/v1", router)
}
