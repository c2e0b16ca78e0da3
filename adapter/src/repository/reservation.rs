use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::ReservationId,
    reservation::{event::CreateReservation, Reservation, ReservationStatus, ReservationSummary},
};
use kernel::repository::reservation::ReservationRepository;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::reservation::{ReservationRow, ReservationSummaryRow},
    ConnectionPool,
};

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(
        &self,
        event: CreateReservation,
        total_cost: Decimal,
    ) -> AppResult<ReservationId> {
        let reservation_id = ReservationId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reservations
                (reservation_id, full_name, phone_number, email, vehicle_type,
                 plate_number, reservation_date, arrival_time, departure_time,
                 parking_slot, total_minutes, total_cost, status)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(reservation_id)
        .bind(&event.full_name)
        .bind(&event.phone_number)
        .bind(&event.email)
        .bind(&event.vehicle_type)
        .bind(&event.plate_number)
        .bind(event.reservation_date)
        .bind(event.arrival_time)
        .bind(event.departure_time)
        .bind(&event.parking_slot)
        .bind(event.total_minutes)
        .bind(total_cost)
        .bind(ReservationStatus::Pending.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no reservation record has been created".into(),
            ));
        }

        Ok(reservation_id)
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(
            r#"
                SELECT
                    reservation_id, full_name, phone_number, email, vehicle_type,
                    plate_number, reservation_date, arrival_time, departure_time,
                    parking_slot, total_minutes, total_cost, status, created_at
                FROM reservations
                WHERE reservation_id = $1
            "#,
        )
        .bind(reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Reservation::try_from).transpose()
    }

    async fn find_all_desc(&self) -> AppResult<Vec<Reservation>> {
        // 管理画面の一覧は新しい予約から順に見せる
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
                SELECT
                    reservation_id, full_name, phone_number, email, vehicle_type,
                    plate_number, reservation_date, arrival_time, departure_time,
                    parking_slot, total_minutes, total_cost, status, created_at
                FROM reservations
                ORDER BY reservation_date DESC, arrival_time DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn summary(&self) -> AppResult<ReservationSummary> {
        let row: ReservationSummaryRow = sqlx::query_as(
            r#"
                SELECT
                    COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE status = 'pending') AS pending,
                    COUNT(*) FILTER (WHERE status = 'paid') AS paid
                FROM reservations
            "#,
        )
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.into())
    }
}
