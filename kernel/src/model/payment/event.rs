use derive_new::new;

use crate::model::id::ReservationId;

/// 支払い確定の入力。金額はクライアントからは受け取らず、
/// 予約に保存された total_cost を使う。
#[derive(Debug, new)]
pub struct ConfirmPayment {
    pub reservation_id: ReservationId,
    pub payment_method: String,
    pub account_number: String,
    pub account_name: String,
}
