use async_trait::async_trait;
use mockall::automock;
use shared::error::AppResult;

use crate::model::{
    id::PaymentId,
    payment::{event::ConfirmPayment, Receipt},
};

#[automock]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// 支払いを確定する。支払いレコードの作成と予約の paid への遷移を
    /// 同一トランザクションで行う。
    /// 予約が存在しなければ EntityNotFound、既に paid なら ConflictError
    async fn confirm(&self, event: ConfirmPayment) -> AppResult<Receipt>;
    /// 支払い ID から領収書（支払い + 対象予約）を引く
    async fn find_receipt(&self, payment_id: PaymentId) -> AppResult<Option<Receipt>>;
}
