use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use kernel::model::{
    id::ReservationId,
    reservation::{Reservation, ReservationStatus, ReservationSummary},
};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};

#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub vehicle_type: String,
    pub plate_number: String,
    pub reservation_date: NaiveDate,
    pub arrival_time: NaiveTime,
    pub departure_time: NaiveTime,
    pub parking_slot: String,
    pub total_minutes: i32,
    pub total_cost: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(value: ReservationRow) -> AppResult<Self> {
        let ReservationRow {
            reservation_id,
            full_name,
            phone_number,
            email,
            vehicle_type,
            plate_number,
            reservation_date,
            arrival_time,
            departure_time,
            parking_slot,
            total_minutes,
            total_cost,
            status,
            created_at,
        } = value;
        let status = ReservationStatus::from_str(&status).map_err(|_| {
            AppError::ConversionEntityError(format!("unknown reservation status: {status}"))
        })?;
        Ok(Reservation {
            reservation_id,
            full_name,
            phone_number,
            email,
            vehicle_type,
            plate_number,
            reservation_date,
            arrival_time,
            departure_time,
            parking_slot,
            total_minutes,
            total_cost,
            status,
            created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
pub struct ReservationSummaryRow {
    pub total: i64,
    pub pending: i64,
    pub paid: i64,
}

impl From<ReservationSummaryRow> for ReservationSummary {
    fn from(value: ReservationSummaryRow) -> Self {
        let ReservationSummaryRow {
            total,
            pending,
            paid,
        } = value;
        Self {
            total,
            pending,
            paid,
        }
    }
}
