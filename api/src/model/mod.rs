pub mod admin;
pub mod auth;
pub mod form_field;
pub mod pages;
pub mod payment;
pub mod reservation;
pub mod user;
