pub mod auth;
pub mod form_field;
pub mod id;
pub mod payment;
pub mod reservation;
pub mod role;
pub mod user;
