pub mod auth;
pub mod form_field;
pub mod health;
pub mod payment;
pub mod reservation;
pub mod user;
