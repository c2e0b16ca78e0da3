use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{PaymentId, ReservationId},
    payment::{event::ConfirmPayment, Payment, Receipt},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::reservation::ReservationResponse;

/// 支払い確定の送信内容。金額は送らせず、予約側の記録を使う
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    #[garde(skip)]
    pub reservation_id: ReservationId,
    #[garde(length(min = 1))]
    pub payment_method: String,
    #[garde(skip)]
    pub account_number: String,
    #[garde(skip)]
    pub account_name: String,
}

impl From<ConfirmPaymentRequest> for ConfirmPayment {
    fn from(value: ConfirmPaymentRequest) -> Self {
        let ConfirmPaymentRequest {
            reservation_id,
            payment_method,
            account_number,
            account_name,
        } = value;
        Self {
            reservation_id,
            payment_method,
            account_number,
            account_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub payment_id: PaymentId,
    pub reservation_id: ReservationId,
    pub payment_method: String,
    pub account_number: String,
    pub account_name: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(value: Payment) -> Self {
        let Payment {
            payment_id,
            reservation_id,
            payment_method,
            account_number,
            account_name,
            amount,
            created_at,
        } = value;
        Self {
            payment_id,
            reservation_id,
            payment_method,
            account_number,
            account_name,
            amount,
            created_at,
        }
    }
}

/// 支払い確定後のサマリーと領収書表示に共通で使う応答
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    pub payment: PaymentResponse,
    pub reservation: ReservationResponse,
}

impl From<Receipt> for ReceiptResponse {
    fn from(value: Receipt) -> Self {
        let Receipt {
            payment,
            reservation,
        } = value;
        Self {
            payment: payment.into(),
            reservation: reservation.into(),
        }
    }
}
