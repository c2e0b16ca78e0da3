use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    admin::show_dashboard,
    form_field::{
        delete_form_field, register_form_field, show_form_field_list, update_form_field,
    },
};

pub fn build_admin_routers() -> Router<AppRegistry> {
    let admin_routers = Router::new()
        .route("/dashboard", get(show_dashboard))
        .route("/form-fields", post(register_form_field))
        .route("/form-fields", get(show_form_field_list))
        .route("/form-fields/:field_id", put(update_form_field))
        .route("/form-fields/:field_id", delete(delete_form_field));

    Router::new().nest("/admin", admin_routers)
}
