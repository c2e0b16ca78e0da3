use derive_new::new;

use crate::model::role::Role;

#[derive(Debug, new)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}
