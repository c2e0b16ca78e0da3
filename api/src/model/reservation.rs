use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::ReservationId,
    reservation::{event::CreateReservation, Reservation},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 予約フォームの送信内容。項目の有無や日時の前後関係は
/// kernel 側の逐次バリデーションが判定する
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(skip)]
    pub full_name: String,
    #[garde(skip)]
    pub phone_number: String,
    #[garde(skip)]
    pub email: String,
    #[garde(skip)]
    pub vehicle_type: String,
    #[garde(skip)]
    pub plate_number: String,
    #[garde(skip)]
    pub reservation_date: NaiveDate,
    #[garde(skip)]
    pub arrival_time: NaiveTime,
    #[garde(skip)]
    pub departure_time: NaiveTime,
    #[garde(skip)]
    pub parking_slot: String,
    #[garde(skip)]
    pub total_minutes: i32,
}

impl From<CreateReservationRequest> for CreateReservation {
    fn from(value: CreateReservationRequest) -> Self {
        let CreateReservationRequest {
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
        } = value;
        Self {
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
        }
    }
}

/// 予約作成の応答。支払いステップへ引き継ぐ識別子と金額
#[derive(Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationResponse {
    pub reservation_id: ReservationId,
    pub total_cost: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
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

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
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
        Self {
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
            status: status.to_string(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use kernel::model::reservation::ReservationStatus;

    use super::*;

    #[test]
    fn a_reservation_serializes_in_camel_case() {
        let res = ReservationResponse::from(Reservation {
            reservation_id: ReservationId::new(),
            full_name: "Juan Dela Cruz".into(),
            phone_number: "09171234567".into(),
            email: "juan@example.com".into(),
            vehicle_type: "car".into(),
            plate_number: "ABC-1234".into(),
            reservation_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            arrival_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            departure_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            parking_slot: "A-01".into(),
            total_minutes: 90,
            total_cost: Decimal::from(75),
            status: ReservationStatus::Pending,
            created_at: Utc::now(),
        });

        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["fullName"], "Juan Dela Cruz");
        assert_eq!(json["vehicleType"], "car");
        assert_eq!(json["totalCost"], "75");
        assert_eq!(json["status"], "pending");
    }
}
