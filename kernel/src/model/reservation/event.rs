use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use derive_new::new;
use thiserror::Error;

/// 予約フォームの入力内容。永続化の前に validate を通す。
#[derive(Debug, Clone, new)]
pub struct CreateReservation {
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
}

impl CreateReservation {
    /// 逐次バリデーション。最初に失敗した規則のエラーで打ち切る。
    /// 1. 必須項目がすべて埋まっているか
    /// 2. 予約日が過去でないか
    /// 3. 当日予約の場合、到着時刻を過ぎていないか
    pub fn validate(&self, now: DateTime<Local>) -> Result<(), ReservationRejection> {
        self.validate_required_fields()?;
        self.validate_date(now.date_naive())?;
        self.validate_arrival(now)?;
        Ok(())
    }

    fn validate_required_fields(&self) -> Result<(), ReservationRejection> {
        let filled = [
            &self.full_name,
            &self.phone_number,
            &self.email,
            &self.vehicle_type,
            &self.plate_number,
            &self.parking_slot,
        ]
        .iter()
        .all(|field| !field.trim().is_empty());

        if !filled || self.total_minutes <= 0 {
            return Err(ReservationRejection::FieldsRequired);
        }
        Ok(())
    }

    fn validate_date(&self, today: NaiveDate) -> Result<(), ReservationRejection> {
        if self.reservation_date < today {
            return Err(ReservationRejection::PastDate);
        }
        Ok(())
    }

    fn validate_arrival(&self, now: DateTime<Local>) -> Result<(), ReservationRejection> {
        if self.reservation_date == now.date_naive() && self.arrival_time < now.time() {
            return Err(ReservationRejection::ArrivalPassed);
        }
        Ok(())
    }
}

/// 予約入力の棄却理由。メッセージはそのまま利用者へ表示される。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationRejection {
    #[error("all fields are required")]
    FieldsRequired,
    #[error("cannot select a past date")]
    PastDate,
    #[error("arrival time has already passed")]
    ArrivalPassed,
}
