use axum::{
    extract::{Path, State},
    Json,
};
use garde::Validate;
use kernel::model::id::PaymentId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::payment::{ConfirmPaymentRequest, ReceiptResponse},
};

/// 支払いを確定し、予約を paid に遷移させてサマリーを返す
pub async fn confirm_payment(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<ConfirmPaymentRequest>,
) -> AppResult<Json<ReceiptResponse>> {
    req.validate(&())?;

    registry
        .payment_repository()
        .confirm(req.into())
        .await
        .map(ReceiptResponse::from)
        .map(Json)
}

pub async fn show_receipt(
    _user: AuthorizedUser,
    Path(payment_id): Path<PaymentId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReceiptResponse>> {
    registry
        .payment_repository()
        .find_receipt(payment_id)
        .await
        .and_then(|receipt| match receipt {
            Some(r) => Ok(Json(r.into())),
            None => Err(AppError::EntityNotFound("payment not found".into())),
        })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime, Utc};
    use kernel::model::{
        id::ReservationId,
        payment::{Payment, Receipt},
        reservation::{Reservation, ReservationStatus},
        role::Role,
    };
    use rust_decimal::Decimal;

    use super::*;
    use crate::handler::test_support::{authorized, TestRegistryBuilder};

    fn paid_receipt(reservation_id: ReservationId) -> Receipt {
        Receipt {
            payment: Payment {
                payment_id: PaymentId::new(),
                reservation_id,
                payment_method: "gcash".into(),
                account_number: "09170000000".into(),
                account_name: "Juan Dela Cruz".into(),
                amount: Decimal::new(525, 1),
                created_at: Utc::now(),
            },
            reservation: Reservation {
                reservation_id,
                full_name: "Juan Dela Cruz".into(),
                phone_number: "09171234567".into(),
                email: "juan@example.com".into(),
                vehicle_type: "truck".into(),
                plate_number: "ABC-1234".into(),
                reservation_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                arrival_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                departure_time: NaiveTime::from_hms_opt(10, 40, 0).unwrap(),
                parking_slot: "B-02".into(),
                total_minutes: 100,
                total_cost: Decimal::new(525, 1),
                status: ReservationStatus::Paid,
                created_at: Utc::now(),
            },
        }
    }

    fn confirm_request(reservation_id: ReservationId) -> ConfirmPaymentRequest {
        ConfirmPaymentRequest {
            reservation_id,
            payment_method: "gcash".into(),
            account_number: "09170000000".into(),
            account_name: "Juan Dela Cruz".into(),
        }
    }

    #[tokio::test]
    async fn confirming_returns_the_combined_summary() {
        let reservation_id = ReservationId::new();
        let mut builder = TestRegistryBuilder::new();
        builder
            .payment
            .expect_confirm()
            .withf(move |event| event.reservation_id == reservation_id)
            .returning(move |_| Ok(paid_receipt(reservation_id)));
        let registry = builder.build();

        let res = confirm_payment(
            authorized(Role::User),
            State(registry),
            Json(confirm_request(reservation_id)),
        )
        .await
        .unwrap();
        assert_eq!(res.0.reservation.status, "paid");
        assert_eq!(res.0.payment.amount, Decimal::new(525, 1));
    }

    #[tokio::test]
    async fn confirming_an_unknown_reservation_is_a_not_found() {
        let mut builder = TestRegistryBuilder::new();
        builder
            .payment
            .expect_confirm()
            .returning(|_| Err(AppError::EntityNotFound("reservation not found".into())));
        let registry = builder.build();

        let res = confirm_payment(
            authorized(Role::User),
            State(registry),
            Json(confirm_request(ReservationId::new())),
        )
        .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn confirming_twice_is_a_conflict() {
        let mut builder = TestRegistryBuilder::new();
        builder
            .payment
            .expect_confirm()
            .returning(|_| Err(AppError::ConflictError("reservation is already paid".into())));
        let registry = builder.build();

        let res = confirm_payment(
            authorized(Role::User),
            State(registry),
            Json(confirm_request(ReservationId::new())),
        )
        .await;
        assert!(matches!(res, Err(AppError::ConflictError(_))));
    }

    #[tokio::test]
    async fn an_unknown_payment_id_is_a_not_found() {
        let mut builder = TestRegistryBuilder::new();
        builder
            .payment
            .expect_find_receipt()
            .returning(|_| Ok(None));
        let registry = builder.build();

        let res = show_receipt(
            authorized(Role::User),
            Path(PaymentId::new()),
            State(registry),
        )
        .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }
}
