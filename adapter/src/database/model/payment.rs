use chrono::{DateTime, Utc};
use kernel::model::{
    id::{PaymentId, ReservationId},
    payment::Payment,
};
use rust_decimal::Decimal;

#[derive(sqlx::FromRow)]
pub struct PaymentRow {
    pub payment_id: PaymentId,
    pub reservation_id: ReservationId,
    pub payment_method: String,
    pub account_number: String,
    pub account_name: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<PaymentRow> for Payment {
    fn from(value: PaymentRow) -> Self {
        let PaymentRow {
            payment_id,
            reservation_id,
            payment_method,
            account_number,
            account_name,
            amount,
            created_at,
        } = value;
        Payment {
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
