use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use strum::{AsRefStr, Display, EnumString};

use crate::model::id::ReservationId;

pub mod event;
pub mod pricing;

/// 予約エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
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
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

/// 予約の状態。pending → paid の一方向にのみ遷移する。
/// キャンセルや返金の遷移は存在しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReservationStatus {
    Pending,
    Paid,
}

/// 管理ダッシュボード用の件数集計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationSummary {
    pub total: i64,
    pub pending: i64,
    pub paid: i64,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn status_round_trips_through_storage_form() {
        assert_eq!(ReservationStatus::Pending.as_ref(), "pending");
        assert_eq!(ReservationStatus::Paid.as_ref(), "paid");
        assert_eq!(
            ReservationStatus::from_str("paid").unwrap(),
            ReservationStatus::Paid
        );
        assert!(ReservationStatus::from_str("cancelled").is_err());
    }
}
