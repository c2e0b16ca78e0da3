use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::model::{
    id::{PaymentId, ReservationId},
    reservation::Reservation,
};

pub mod event;

/// 支払いレコード。作成後は変更されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub payment_id: PaymentId,
    pub reservation_id: ReservationId,
    pub payment_method: String,
    pub account_number: String,
    pub account_name: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// 領収書。支払いとその対象の予約の組
#[derive(Debug)]
pub struct Receipt {
    pub payment: Payment,
    pub reservation: Reservation,
}
