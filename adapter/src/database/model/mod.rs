pub mod form_field;
pub mod payment;
pub mod reservation;
pub mod user;
