use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use shared::error::AppResult;

use crate::model::{
    id::ReservationId,
    reservation::{event::CreateReservation, Reservation, ReservationSummary},
};

#[automock]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// 予約を status = pending で永続化する
    async fn create(&self, event: CreateReservation, total_cost: Decimal)
        -> AppResult<ReservationId>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    /// 全予約を予約日・到着時刻の降順で取得する
    async fn find_all_desc(&self) -> AppResult<Vec<Reservation>>;
    /// ダッシュボード用の total / pending / paid 件数
    async fn summary(&self) -> AppResult<ReservationSummary>;
}
