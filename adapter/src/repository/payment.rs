use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::PaymentId,
    payment::{event::ConfirmPayment, Payment, Receipt},
    reservation::{Reservation, ReservationStatus},
};
use kernel::repository::payment::PaymentRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::{payment::PaymentRow, reservation::ReservationRow},
    ConnectionPool,
};

const FIND_RESERVATION_FOR_UPDATE: &str = r#"
    SELECT
        reservation_id, full_name, phone_number, email, vehicle_type,
        plate_number, reservation_date, arrival_time, departure_time,
        parking_slot, total_minutes, total_cost, status, created_at
    FROM reservations
    WHERE reservation_id = $1
    FOR UPDATE
"#;

#[derive(new)]
pub struct PaymentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PaymentRepository for PaymentRepositoryImpl {
    async fn confirm(&self, event: ConfirmPayment) -> AppResult<Receipt> {
        let mut tx = self.db.begin().await?;

        // 事前チェック。予約が存在し、まだ pending であること。
        // 支払いの作成と paid への遷移まで同一トランザクションで行い、
        // 途中で落ちても片方だけ残らないようにする。
        let row: Option<ReservationRow> = sqlx::query_as(FIND_RESERVATION_FOR_UPDATE)
            .bind(event.reservation_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Err(AppError::EntityNotFound(format!(
                "reservation ({}) not found",
                event.reservation_id
            )));
        };
        let mut reservation = Reservation::try_from(row)?;
        if reservation.status == ReservationStatus::Paid {
            return Err(AppError::ConflictError(
                "reservation is already paid".into(),
            ));
        }

        // 金額はフォームの値ではなく保存済みの total_cost を使う
        let payment_row: PaymentRow = sqlx::query_as(
            r#"
                INSERT INTO payments
                (payment_id, reservation_id, payment_method, account_number,
                 account_name, amount)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING payment_id, reservation_id, payment_method,
                          account_number, account_name, amount, created_at
            "#,
        )
        .bind(PaymentId::new())
        .bind(event.reservation_id)
        .bind(&event.payment_method)
        .bind(&event.account_number)
        .bind(&event.account_name)
        .bind(reservation.total_cost)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let res = sqlx::query(
            r#"
                UPDATE reservations SET status = 'paid' WHERE reservation_id = $1
            "#,
        )
        .bind(event.reservation_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no reservation has been marked as paid".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        reservation.status = ReservationStatus::Paid;
        Ok(Receipt {
            payment: payment_row.into(),
            reservation,
        })
    }

    async fn find_receipt(&self, payment_id: PaymentId) -> AppResult<Option<Receipt>> {
        let payment: Option<PaymentRow> = sqlx::query_as(
            r#"
                SELECT payment_id, reservation_id, payment_method,
                       account_number, account_name, amount, created_at
                FROM payments
                WHERE payment_id = $1
            "#,
        )
        .bind(payment_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(payment) = payment else {
            return Ok(None);
        };
        let payment = Payment::from(payment);

        // 支払いは予約 ID を必ず持つので、予約側が消えていれば不整合
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
        .bind(payment.reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Err(AppError::ConversionEntityError(format!(
                "payment ({}) references a missing reservation",
                payment.payment_id
            )));
        };

        Ok(Some(Receipt {
            payment,
            reservation: row.try_into()?,
        }))
    }
}
